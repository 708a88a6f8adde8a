//! Column list parsing

use super::column::ColumnSpec;
use super::validator::validate_columns;
use crate::error::ScaffoldError;

/// Parse a raw column list into ordered column definitions
///
/// The input is validated first; input order is preserved because it drives
/// the fillable list and the migration column order.
///
/// # Examples
///
/// ```
/// # use larascaff::parse_columns;
/// let columns = parse_columns("title:string,age:integer?,avatar:file").unwrap();
/// let flags: Vec<_> = columns.iter().map(|c| (c.nullable, c.is_file)).collect();
/// assert_eq!(flags, vec![(false, false), (true, false), (false, true)]);
/// ```
///
/// # Errors
///
/// - [`ScaffoldError::EmptyColumns`] when the input is empty or whitespace
/// - [`ScaffoldError::InvalidColumns`] listing every malformed token
pub fn parse_columns(columns: &str) -> Result<Vec<ColumnSpec>, ScaffoldError> {
    if columns.trim().is_empty() {
        return Err(ScaffoldError::EmptyColumns);
    }

    let issues = validate_columns(columns);
    if !issues.is_empty() {
        return Err(ScaffoldError::InvalidColumns(issues));
    }

    columns
        .split(',')
        .enumerate()
        .map(|(index, token)| {
            ColumnSpec::parse(token).map_err(|reason| {
                ScaffoldError::InvalidColumns(vec![super::ColumnIssue::new(
                    index,
                    token.trim(),
                    reason,
                )])
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::ColumnType;

    #[test]
    fn test_parse_preserves_order() {
        let columns = parse_columns("title:string,age:integer?,avatar:file").unwrap();
        let names: Vec<_> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["title", "age", "avatar"]);

        assert!(!columns[0].nullable);
        assert!(columns[1].nullable);
        assert!(!columns[2].nullable);

        assert!(!columns[0].is_file);
        assert!(!columns[1].is_file);
        assert!(columns[2].is_file);
    }

    #[test]
    fn test_parse_types() {
        let columns = parse_columns("title:string, body:longText, price:decimal*0").unwrap();
        assert_eq!(columns[0].column_type, ColumnType::String);
        assert_eq!(columns[1].column_type, ColumnType::LongText);
        assert_eq!(columns[2].column_type, ColumnType::Decimal);
        assert_eq!(columns[2].default_value.as_deref(), Some("0"));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_columns(""), Err(ScaffoldError::EmptyColumns)));
        assert!(matches!(parse_columns("   "), Err(ScaffoldError::EmptyColumns)));
    }

    #[test]
    fn test_invalid_input_lists_all_issues() {
        match parse_columns("title:strng,age:integer,body") {
            Err(ScaffoldError::InvalidColumns(issues)) => {
                assert_eq!(issues.len(), 2);
                assert_eq!(issues[0].index, 0);
                assert_eq!(issues[1].index, 2);
            }
            other => panic!("expected InvalidColumns, got {other:?}"),
        }
    }
}
