use serde::{Deserialize, Serialize};

/// Key designation of a column (`COLUMN_KEY`).
///
/// Carried through for diagnostics; the generated document does not use it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColumnKey {
    /// Not part of any index.
    #[default]
    None,
    /// `PRI`: part of the primary key.
    Primary,
    /// `UNI`: first column of a unique index.
    Unique,
    /// `MUL`: first column of a non-unique index.
    Multiple,
    /// Any other designation, kept verbatim.
    Other(String),
}

impl ColumnKey {
    /// Parse a `COLUMN_KEY` value.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "" => Self::None,
            "PRI" => Self::Primary,
            "UNI" => Self::Unique,
            "MUL" => Self::Multiple,
            _ => Self::Other(raw.trim().to_string()),
        }
    }
}

/// One column of one table, in `ORDER BY TABLE_NAME, ORDINAL_POSITION` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Raw table name as stored in the catalog.
    pub table_name: String,
    /// Raw column name as stored in the catalog.
    pub column_name: String,
    /// `DATA_TYPE` token, e.g. `"varchar"`.
    pub column_type: String,
    /// Full `COLUMN_TYPE`, e.g. `"varchar(50)"`, when the source knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_type: Option<String>,
    /// Whether the column accepts `NULL`.
    pub nullable: bool,
    /// Key designation.
    #[serde(default)]
    pub key: ColumnKey,
}

impl ColumnDescriptor {
    /// Build a descriptor with no key designation.
    pub fn new(
        table_name: impl Into<String>,
        column_name: impl Into<String>,
        column_type: impl Into<String>,
        nullable: bool,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            column_name: column_name.into(),
            column_type: column_type.into(),
            full_type: None,
            nullable,
            key: ColumnKey::None,
        }
    }

    /// Set the key designation.
    #[must_use]
    pub fn with_key(mut self, key: ColumnKey) -> Self {
        self.key = key;
        self
    }

    /// Set the full `COLUMN_TYPE`.
    #[must_use]
    pub fn with_full_type(mut self, full_type: impl Into<String>) -> Self {
        self.full_type = Some(full_type.into());
        self
    }
}

/// Interpret an `IS_NULLABLE` value: only `"YES"` means nullable.
pub fn parse_nullable(raw: &str) -> bool {
    raw == "YES"
}
