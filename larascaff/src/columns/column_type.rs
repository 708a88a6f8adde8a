//! Supported column types
//!
//! The vocabulary is the set of Laravel schema-builder column methods plus the
//! scaffold-only `file` type. Tokens are matched case-sensitively because they
//! are emitted verbatim as `$table->{type}(...)` calls.
//!
//! | Token | Migration method | Notes |
//! |-------|------------------|-------|
//! | `string`, `integer`, `text`, ... | same as token | |
//! | `file` | `string` | stores the upload path; skipped by validation rules |
//! | `rememberToken`, `nullableTimestamps` | same as token | no column argument |
//! | `morphs`, `nullableMorphs` | same as token | expands to `{name}_id` and `{name}_type` |

use std::fmt;
use std::str::FromStr;

use crate::error::ColumnParseError;

macro_rules! column_types {
    ($($variant:ident => $token:literal),+ $(,)?) => {
        /// Column storage type
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ColumnType {
            $(
                #[doc = concat!("`", $token, "`")]
                $variant,
            )+
        }

        impl ColumnType {
            /// Every supported type, in vocabulary order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Token as written in a column list
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }

            /// Look up a type by its exact token
            #[must_use]
            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

column_types! {
    BigIncrements => "bigIncrements",
    BigInteger => "bigInteger",
    Binary => "binary",
    Boolean => "boolean",
    Char => "char",
    Date => "date",
    DateTime => "dateTime",
    Decimal => "decimal",
    Double => "double",
    Enum => "enum",
    File => "file",
    Float => "float",
    Geometry => "geometry",
    GeometryCollection => "geometryCollection",
    Increments => "increments",
    Integer => "integer",
    IpAddress => "ipAddress",
    Json => "json",
    Jsonb => "jsonb",
    LineString => "lineString",
    LongText => "longText",
    MacAddress => "macAddress",
    MediumIncrements => "mediumIncrements",
    MediumInteger => "mediumInteger",
    MediumText => "mediumText",
    Morphs => "morphs",
    MultiLineString => "multiLineString",
    MultiPoint => "multiPoint",
    MultiPolygon => "multiPolygon",
    NullableMorphs => "nullableMorphs",
    NullableTimestamps => "nullableTimestamps",
    Point => "point",
    Polygon => "polygon",
    RememberToken => "rememberToken",
    Set => "set",
    SmallIncrements => "smallIncrements",
    SmallInteger => "smallInteger",
    SoftDeletes => "softDeletes",
    SoftDeletesTz => "softDeletesTz",
    String => "string",
    Text => "text",
    Time => "time",
    TimeTz => "timeTz",
    Timestamp => "timestamp",
    TimestampTz => "timestampTz",
    TinyIncrements => "tinyIncrements",
    TinyInteger => "tinyInteger",
    TinyText => "tinyText",
    UnsignedBigInteger => "unsignedBigInteger",
    UnsignedDecimal => "unsignedDecimal",
    UnsignedInteger => "unsignedInteger",
    UnsignedMediumInteger => "unsignedMediumInteger",
    UnsignedSmallInteger => "unsignedSmallInteger",
    UnsignedTinyInteger => "unsignedTinyInteger",
    Uuid => "uuid",
    Year => "year",
}

impl ColumnType {
    /// Schema-builder method used in the migration
    #[must_use]
    pub const fn migration_method(self) -> &'static str {
        match self {
            Self::File => "string",
            other => other.as_str(),
        }
    }

    /// Whether the migration call takes the column name as its argument
    #[must_use]
    pub const fn takes_column_name(self) -> bool {
        !matches!(self, Self::RememberToken | Self::NullableTimestamps)
    }

    /// Whether `->nullable()` and `->default()` can be chained onto the call
    ///
    /// Laravel's `morphs`, `nullableMorphs` and `nullableTimestamps` return
    /// nothing.
    #[must_use]
    pub const fn accepts_modifiers(self) -> bool {
        !matches!(
            self,
            Self::Morphs | Self::NullableMorphs | Self::NullableTimestamps
        )
    }

    /// Whether the column holds an uploaded file path
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::File)
    }

    /// Whether the column is a polymorphic relation pair
    #[must_use]
    pub const fn is_morph(self) -> bool {
        matches!(self, Self::Morphs | Self::NullableMorphs)
    }

    /// Columns maintained by the framework rather than by request input
    ///
    /// These never appear in the fillable list or in validation rules.
    #[must_use]
    pub const fn is_framework_managed(self) -> bool {
        matches!(
            self,
            Self::RememberToken
                | Self::NullableTimestamps
                | Self::SoftDeletes
                | Self::SoftDeletesTz
                | Self::Increments
                | Self::BigIncrements
                | Self::MediumIncrements
                | Self::SmallIncrements
                | Self::TinyIncrements
        )
    }

    /// Eloquent attribute cast, if the type benefits from one
    #[must_use]
    pub const fn cast(self) -> Option<&'static str> {
        match self {
            Self::Boolean => Some("boolean"),
            Self::Json | Self::Jsonb => Some("array"),
            Self::Date => Some("date"),
            Self::DateTime | Self::Timestamp | Self::TimestampTz => Some("datetime"),
            Self::Decimal | Self::UnsignedDecimal => Some("decimal:2"),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = ColumnParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| ColumnParseError::UnknownType(s.to_string()))
    }
}
