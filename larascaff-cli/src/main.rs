//! larascaff CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use larascaff_cli_lib::{GenerateCommand, InstallCommand, StubsCommand, TypesCommand};

#[derive(Parser)]
#[command(name = "larascaff")]
#[command(version)]
#[command(about = "CRUD scaffolding for Laravel APIs", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate model, migration, resource, controller and route
    #[command(visible_alias = "crud")]
    Generate {
        /// Model name (`PascalCase`, e.g. `Post`, `BlogPost`)
        model: String,
        /// Column definitions (e.g. `title:string,age:integer?,status:string*draft`)
        #[arg(long)]
        columns: Option<String>,
        /// Laravel project root (defaults to the current directory)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Show what would be generated without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Write the shared support classes
    Install {
        /// Laravel project root (defaults to the current directory)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite existing support files
        #[arg(long)]
        force: bool,
    },
    /// Publish the built-in stubs for customisation
    Stubs {
        /// Laravel project root (defaults to the current directory)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite previously published stubs
        #[arg(long)]
        force: bool,
    },
    /// List supported column types
    Types,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    larascaff::observability::init(cli.verbose).context("Failed to initialize logging")?;

    match cli.command {
        Commands::Generate {
            model,
            columns,
            path,
            dry_run,
        } => {
            let cmd = GenerateCommand::new(model, columns, path, dry_run);
            cmd.execute()?;
        }
        Commands::Install { path, force } => {
            InstallCommand::new(path, force).execute()?;
        }
        Commands::Stubs { path, force } => {
            StubsCommand::new(path, force).execute()?;
        }
        Commands::Types => TypesCommand::execute(),
    }

    Ok(())
}
