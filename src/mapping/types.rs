use std::fmt;

use serde::Serialize;

/// JSON-Schema primitive assigned to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AbstractType {
    /// Whole numbers of any width.
    Integer,
    /// Floating point and fixed-point decimals.
    Number,
    /// Everything else, including temporal, text, binary and enumerated types.
    String,
}

impl AbstractType {
    /// The JSON-Schema spelling of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

impl fmt::Display for AbstractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a MySQL `DATA_TYPE` token (e.g. `"varchar"`, `"int"`) to its abstract type.
///
/// Matching ignores ASCII case. Unknown tokens fall back to [`AbstractType::String`].
pub fn map_type(raw_type: &str) -> AbstractType {
    match raw_type.to_ascii_lowercase().as_str() {
        "tinyint" | "smallint" | "mediumint" | "int" | "bigint" => AbstractType::Integer,
        "float" | "double" | "decimal" => AbstractType::Number,
        // temporal
        "date" | "datetime" | "timestamp" | "time" | "year" => AbstractType::String,
        "char" | "varchar" | "tinytext" | "mediumtext" | "text" | "longtext" => {
            AbstractType::String
        }
        "binary" | "varbinary" | "tinyblob" | "mediumblob" | "blob" | "longblob" => {
            AbstractType::String
        }
        "enum" | "set" => AbstractType::String,
        _ => AbstractType::String,
    }
}
