//! Integration tests for the scaffolding pipeline

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use larascaff::{ArtifactKind, ScaffoldConfig, ScaffoldError, Scaffolder, WriteStatus};
use tempfile::TempDir;

const ROUTES_HEADER: &str = "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\n";

/// Minimal Laravel skeleton with an api routes file
fn laravel_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("routes")).unwrap();
    fs::write(dir.path().join("routes/api.php"), ROUTES_HEADER).unwrap();
    dir
}

fn scaffolder(root: &Path) -> Scaffolder {
    let timestamp = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    Scaffolder::new(root, ScaffoldConfig::default()).with_timestamp(timestamp)
}

fn read(root: &Path, path: &str) -> String {
    fs::read_to_string(root.join(path))
        .unwrap_or_else(|err| panic!("{path} should be readable: {err}"))
}

/// Every file below `root`, relative and sorted
fn tree(root: &Path) -> Vec<PathBuf> {
    fn walk(dir: &Path, root: &Path, out: &mut Vec<PathBuf>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                out.push(path.strip_prefix(root).unwrap().to_path_buf());
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

#[test]
fn test_full_run_generates_every_artifact() {
    let project = laravel_project();
    let root = project.path();

    let report = scaffolder(root)
        .run("BlogPost", Some("title:string,age:integer?,status:string*draft"))
        .unwrap();
    assert!(report.is_success(), "{report:?}");

    let model = read(root, "app/Models/BlogPost.php");
    assert!(model.contains("protected $fillable = ['title', 'age', 'status'];"));

    let migration = read(
        root,
        "database/migrations/2024_01_02_030405_create_blog_posts_table.php",
    );
    assert!(migration.contains("$table->string('title');"));
    assert!(migration.contains("$table->integer('age')->nullable();"));
    assert!(migration.contains("$table->string('status')->default('draft');"));

    let controller = read(root, "app/Http/Controllers/Api/BlogPostController.php");
    assert!(controller.contains("'title' => 'required',"));
    assert!(controller.contains("'age' => 'nullable',"));
    assert!(controller.contains("'title' => 'sometimes|required',"));

    let resource = read(root, "app/Http/Resources/BlogPostResource.php");
    assert!(resource.contains("'status' => $this->status,"));

    for class in ["BaseController", "ApiResponse", "MetaHelper", "HandlesQuery"] {
        assert!(root.join(format!("app/Support/{class}.php")).is_file());
    }

    let routes = read(root, "routes/api.php");
    assert_eq!(
        routes,
        format!(
            "{ROUTES_HEADER}Route::apiResource('blog-posts', \\App\\Http\\Controllers\\Api\\BlogPostController::class);\n"
        )
    );
}

#[test]
fn test_no_columns_option_scaffolds_empty_model() {
    let project = laravel_project();
    let report = scaffolder(project.path()).run("Tag", None).unwrap();

    assert!(report.is_success());
    let model = read(project.path(), "app/Models/Tag.php");
    assert!(model.contains("protected $fillable = [];"));
}

#[test]
fn test_empty_columns_generates_nothing() {
    let project = laravel_project();
    let before = tree(project.path());

    let err = scaffolder(project.path()).run("Post", Some("")).unwrap_err();
    assert!(matches!(err, ScaffoldError::EmptyColumns));
    assert_eq!(tree(project.path()), before);
}

#[test]
fn test_invalid_columns_report_every_issue() {
    let project = laravel_project();
    let before = tree(project.path());

    let err = scaffolder(project.path())
        .run("Post", Some("title,age:integer,name:badtype"))
        .unwrap_err();
    match err {
        ScaffoldError::InvalidColumns(issues) => {
            let indices: Vec<usize> = issues.iter().map(|issue| issue.index).collect();
            assert_eq!(indices, vec![0, 2]);
        }
        other => panic!("expected InvalidColumns, got {other:?}"),
    }
    assert_eq!(tree(project.path()), before);
}

#[test]
fn test_dry_run_leaves_tree_untouched() {
    let project = laravel_project();
    let before = tree(project.path());

    let report = scaffolder(project.path())
        .dry_run(true)
        .run("BlogPost", Some("title:string"))
        .unwrap();

    assert!(report.is_success());
    assert!(report
        .outcomes
        .iter()
        .all(|outcome| matches!(outcome.status, WriteStatus::DryRun)));
    assert_eq!(tree(project.path()), before);
    assert_eq!(read(project.path(), "routes/api.php"), ROUTES_HEADER);
}

#[test]
fn test_support_files_are_not_overwritten() {
    let project = laravel_project();
    let root = project.path();
    fs::create_dir_all(root.join("app/Support")).unwrap();
    fs::write(root.join("app/Support/BaseController.php"), "<?php // customised\n").unwrap();

    let report = scaffolder(root).run("Post", Some("title:string")).unwrap();

    assert!(report.is_success());
    assert_eq!(
        read(root, "app/Support/BaseController.php"),
        "<?php // customised\n"
    );
    let skipped = report
        .of_kind(ArtifactKind::Support)
        .filter(|outcome| matches!(outcome.status, WriteStatus::Skipped))
        .count();
    assert_eq!(skipped, 1);
}

#[test]
fn test_missing_routes_file_fails_only_the_route() {
    let project = TempDir::new().unwrap();
    let root = project.path();

    let report = scaffolder(root).run("Post", Some("title:string")).unwrap();

    assert!(!report.is_success());
    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].kind, ArtifactKind::Route);
    assert!(matches!(failures[0].error(), Some(ScaffoldError::MissingFile(_))));

    assert!(root.join("app/Models/Post.php").is_file());
    assert!(root.join("app/Http/Controllers/Api/PostController.php").is_file());
}

#[test]
fn test_configured_stub_dir_missing_a_stub() {
    let project = laravel_project();
    let root = project.path();

    let stub_dir = root.join("custom-stubs");
    fs::create_dir_all(&stub_dir).unwrap();
    for stub in ["migration", "resource", "controller", "route"] {
        let builtin = larascaff::template::Stub::ALL
            .iter()
            .find(|s| s.name() == stub)
            .unwrap()
            .builtin();
        fs::write(stub_dir.join(format!("{stub}.stub")), builtin).unwrap();
    }

    let config = ScaffoldConfig {
        stub_path: Some(PathBuf::from("custom-stubs")),
        ..Default::default()
    };
    let report = Scaffolder::new(root, config)
        .run("Post", Some("title:string"))
        .unwrap();

    let failed: Vec<ArtifactKind> = report.failures().map(|outcome| outcome.kind).collect();
    assert_eq!(failed, vec![ArtifactKind::Support, ArtifactKind::Model]);
    assert!(matches!(
        report.failures().next().and_then(|outcome| outcome.error()),
        Some(ScaffoldError::MissingStub(_))
    ));
    assert!(!root.join("app/Models/Post.php").exists());
    assert!(root.join("app/Http/Controllers/Api/PostController.php").is_file());
}

#[test]
fn test_published_stub_overrides_builtin() {
    let project = laravel_project();
    let root = project.path();

    let publish = scaffolder(root).publish_stubs(false);
    assert!(publish.is_success());
    fs::write(
        root.join("stubs/larascaff/model.stub"),
        "<?php // {{ modelName }} for {{ tableName }}\n",
    )
    .unwrap();

    scaffolder(root).run("Post", None).unwrap();
    assert_eq!(read(root, "app/Models/Post.php"), "<?php // Post for posts\n");
}

#[test]
fn test_repeated_runs_duplicate_route_line() {
    let project = laravel_project();
    let root = project.path();

    scaffolder(root).run("Post", Some("title:string")).unwrap();
    scaffolder(root).run("Post", Some("title:string")).unwrap();

    let routes = read(root, "routes/api.php");
    assert_eq!(routes.matches("Route::apiResource('posts'").count(), 2);
}

#[test]
fn test_install_respects_force() {
    let project = laravel_project();
    let root = project.path();
    fs::create_dir_all(root.join("app/Support")).unwrap();
    fs::write(root.join("app/Support/ApiResponse.php"), "old").unwrap();

    let report = scaffolder(root).install(false);
    assert!(report.is_success());
    assert_eq!(read(root, "app/Support/ApiResponse.php"), "old");

    let report = scaffolder(root).install(true);
    assert!(report.is_success());
    assert!(read(root, "app/Support/ApiResponse.php").contains("class ApiResponse"));
}

#[test]
fn test_config_file_changes_layout() {
    let project = laravel_project();
    let root = project.path();
    fs::write(
        root.join("larascaff.toml"),
        "route_case = \"snake\"\n\n[paths]\nmodels = \"app/Domain\"\n\n[namespaces]\nmodels = \"App\\\\Domain\"\n",
    )
    .unwrap();

    let config = ScaffoldConfig::load(root).unwrap();
    let report = Scaffolder::new(root, config)
        .run("BlogPost", Some("title:string"))
        .unwrap();

    assert!(report.is_success());
    assert!(read(root, "app/Domain/BlogPost.php").contains("namespace App\\Domain;"));
    assert!(read(root, "app/Http/Controllers/Api/BlogPostController.php")
        .contains("use App\\Domain\\BlogPost;"));
    assert!(read(root, "routes/api.php").contains("Route::apiResource('blog_posts',"));
}
