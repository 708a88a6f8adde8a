//! Column definitions parsed from user input
//!
//! Format: `name:type[?|*default]`
//!
//! ```text
//! title:string          → string column, required
//! age:integer?          → nullable integer column
//! status:string*draft   → string column defaulting to 'draft'
//! avatar:file           → string column holding an upload path
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::column_type::ColumnType;
use crate::error::ColumnParseError;

/// Whole-token grammar: `IDENT ':' TYPE ( '?' | '*' DEFAULT? )?`
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+:[A-Za-z]+(\?|\*[^,]*)?$").expect("column token pattern is valid")
});

/// One column of the generated model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Column name (e.g. "title", "`published_at`")
    pub name: String,
    /// Storage type
    pub column_type: ColumnType,
    /// Whether the column accepts null
    pub nullable: bool,
    /// Whether a `*default` marker was given
    pub has_default: bool,
    /// Default literal; `None` with `has_default` means `null`
    pub default_value: Option<String>,
    /// Whether the column stores an uploaded file path
    pub is_file: bool,
}

impl ColumnSpec {
    /// Parse a single `name:type[?|*default]` token
    ///
    /// # Examples
    ///
    /// ```
    /// # use larascaff::ColumnSpec;
    /// let column = ColumnSpec::parse("age:integer?").unwrap();
    /// assert_eq!(column.name, "age");
    /// assert!(column.nullable);
    ///
    /// let column = ColumnSpec::parse("status:string*draft").unwrap();
    /// assert_eq!(column.default_value.as_deref(), Some("draft"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`ColumnParseError`] when the token does not match the
    /// grammar or names a type outside the supported vocabulary.
    pub fn parse(token: &str) -> Result<Self, ColumnParseError> {
        let token = token.trim();
        if !TOKEN_PATTERN.is_match(token) {
            return Err(Self::explain(token));
        }

        // The pattern guarantees a ':' and a non-empty name.
        let (name, rest) = token.split_once(':').ok_or_else(|| Self::explain(token))?;

        let (rest, nullable) = rest
            .strip_suffix('?')
            .map_or((rest, false), |stripped| (stripped, true));

        let (type_token, default) = match rest.split_once('*') {
            Some((type_token, default)) => (type_token, Some(default)),
            None => (rest, None),
        };

        let column_type = type_token.parse::<ColumnType>()?;

        // Nullable wins when both markers are present.
        let has_default = default.is_some() && !nullable;
        let default_value = if has_default {
            default.filter(|value| !value.is_empty()).map(str::to_string)
        } else {
            None
        };

        Ok(Self {
            name: name.to_string(),
            column_type,
            nullable,
            has_default,
            default_value,
            is_file: column_type.is_file(),
        })
    }

    /// Describe why a token failed the grammar
    fn explain(token: &str) -> ColumnParseError {
        if token.is_empty() {
            return ColumnParseError::Empty;
        }

        let Some((name, rest)) = token.split_once(':') else {
            return ColumnParseError::MissingSeparator;
        };

        if name.is_empty() {
            return ColumnParseError::MissingName;
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return ColumnParseError::InvalidName(name.to_string());
        }

        let type_len = rest.chars().take_while(char::is_ascii_alphabetic).count();
        let (type_token, modifier) = rest.split_at(type_len);
        if type_token.is_empty() {
            return ColumnParseError::MissingType;
        }
        if ColumnType::from_token(type_token).is_none() {
            return ColumnParseError::UnknownType(type_token.to_string());
        }

        ColumnParseError::BadModifier(modifier.to_string())
    }

    /// Whether validation should allow the column to be absent or null
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable || matches!(self.column_type, ColumnType::NullableMorphs)
    }

    /// Model attributes backed by this column
    ///
    /// Morph columns expand to their `_id`/`_type` pair; framework-managed
    /// columns have no request-facing attributes.
    #[must_use]
    pub fn attribute_names(&self) -> Vec<String> {
        if self.column_type.is_framework_managed() {
            Vec::new()
        } else if self.column_type.is_morph() {
            vec![format!("{}_id", self.name), format!("{}_type", self.name)]
        } else {
            vec![self.name.clone()]
        }
    }
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.column_type)?;
        if self.nullable {
            write!(f, "?")?;
        } else if self.has_default {
            write!(f, "*{}", self.default_value.as_deref().unwrap_or_default())?;
        }
        Ok(())
    }
}
