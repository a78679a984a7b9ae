use std::path::{Path, PathBuf};

use sqlparser::ast::{ColumnDef, ColumnOption, CreateTable, Statement, TableConstraint};
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;

use crate::error::SourceError;
use crate::schema::column::{ColumnDescriptor, ColumnKey};
use crate::schema::source::{sort_for_emission, SchemaSource};

/// Schema source reading `CREATE TABLE` statements instead of a live catalog.
///
/// Rows are reported the way `INFORMATION_SCHEMA.COLUMNS` would report them
/// for the same DDL.
#[derive(Debug, Clone)]
pub struct DdlSource {
    schema_name: String,
    sql: String,
}

impl DdlSource {
    /// Build a source over an in-memory DDL script.
    pub fn new(schema_name: impl Into<String>, sql: impl Into<String>) -> Self {
        Self {
            schema_name: schema_name.into(),
            sql: sql.into(),
        }
    }

    /// Read and concatenate DDL files, in the given order.
    pub fn from_files(
        schema_name: impl Into<String>,
        paths: &[PathBuf],
    ) -> Result<Self, SourceError> {
        let mut combined_sql = String::new();
        for path in paths {
            let content = read_sql(path)?;
            combined_sql.push_str(&content);
            combined_sql.push('\n');
        }
        Ok(Self::new(schema_name, combined_sql))
    }
}

impl SchemaSource for DdlSource {
    fn schema_name(&self) -> &str {
        &self.schema_name
    }

    fn fetch_columns(&mut self) -> Result<Vec<ColumnDescriptor>, SourceError> {
        parse_columns(&self.sql)
    }
}

fn read_sql(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse MySQL DDL into column rows ordered by table name, then column position.
///
/// Statements other than `CREATE TABLE` are ignored.
pub fn parse_columns(sql: &str) -> Result<Vec<ColumnDescriptor>, SourceError> {
    let statements = Parser::parse_sql(&MySqlDialect {}, sql)
        .map_err(|e| SourceError::Parse(e.to_string()))?;

    let mut columns = Vec::new();
    for statement in &statements {
        if let Statement::CreateTable(create) = statement {
            let table_columns = table_columns(create);
            tracing::debug!(
                table = %create.name,
                columns = table_columns.len(),
                "parsed CREATE TABLE"
            );
            columns.extend(table_columns);
        }
    }

    sort_for_emission(&mut columns);
    Ok(columns)
}

/// Index kinds that decide `COLUMN_KEY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndexKind {
    Primary,
    Unique,
    NonUnique,
}

/// One index of a table, with its columns in index order.
#[derive(Debug)]
struct IndexDecl {
    kind: IndexKind,
    columns: Vec<String>,
}

impl IndexDecl {
    fn new(kind: IndexKind, columns: impl IntoIterator<Item = String>) -> Self {
        Self {
            kind,
            columns: columns.into_iter().collect(),
        }
    }

    fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c.eq_ignore_ascii_case(column))
    }

    fn starts_with(&self, column: &str) -> bool {
        self.columns
            .first()
            .is_some_and(|c| c.eq_ignore_ascii_case(column))
    }
}

fn table_columns(create: &CreateTable) -> Vec<ColumnDescriptor> {
    let table_name = relation_name(&create.name.to_string());

    let mut indexes: Vec<IndexDecl> = Vec::new();
    let mut columns: Vec<ColumnDescriptor> = Vec::with_capacity(create.columns.len());
    for column in &create.columns {
        let (descriptor, inline_index) = describe_column(&table_name, column);
        indexes.extend(inline_index);
        columns.push(descriptor);
    }

    for constraint in &create.constraints {
        let (kind, index_columns) = match constraint {
            TableConstraint::PrimaryKey { columns, .. } => (IndexKind::Primary, columns),
            TableConstraint::Unique { columns, .. } => (IndexKind::Unique, columns),
            TableConstraint::Index { columns, .. }
            | TableConstraint::FulltextOrSpatial { columns, .. }
            | TableConstraint::ForeignKey { columns, .. } => (IndexKind::NonUnique, columns),
            _ => continue,
        };
        indexes.push(IndexDecl::new(
            kind,
            index_columns.iter().map(|c| unquote(&c.to_string())),
        ));
    }

    for index in indexes.iter().filter(|i| i.kind == IndexKind::Primary) {
        for descriptor in columns.iter_mut() {
            if index.contains(&descriptor.column_name) {
                descriptor.nullable = false;
            }
        }
    }

    // Without a primary key, MySQL reports the first unique index over
    // NOT NULL columns as PRI.
    if !indexes.iter().any(|i| i.kind == IndexKind::Primary) {
        let promoted = indexes.iter_mut().find(|index| {
            index.kind == IndexKind::Unique
                && index.columns.iter().all(|name| {
                    columns
                        .iter()
                        .any(|c| c.column_name.eq_ignore_ascii_case(name) && !c.nullable)
                })
        });
        if let Some(index) = promoted {
            index.kind = IndexKind::Primary;
        }
    }

    for descriptor in columns.iter_mut() {
        descriptor.key = column_key(&indexes, &descriptor.column_name);
    }
    columns
}

/// `COLUMN_KEY` of one column: PRI beats UNI beats MUL.
///
/// UNI needs a single-column unique index; the leading column of a composite
/// unique index or of any other index reports MUL.
fn column_key(indexes: &[IndexDecl], column: &str) -> ColumnKey {
    if indexes
        .iter()
        .any(|i| i.kind == IndexKind::Primary && i.contains(column))
    {
        return ColumnKey::Primary;
    }
    if indexes
        .iter()
        .any(|i| i.kind == IndexKind::Unique && i.columns.len() == 1 && i.starts_with(column))
    {
        return ColumnKey::Unique;
    }
    if indexes.iter().any(|i| i.starts_with(column)) {
        return ColumnKey::Multiple;
    }
    ColumnKey::None
}

fn describe_column(
    table_name: &str,
    column: &ColumnDef,
) -> (ColumnDescriptor, Option<IndexDecl>) {
    let rendered = column.data_type.to_string();
    let own_name = || [column.name.value.clone()];
    let serial = is_serial(&rendered);
    let mut nullable = !serial;
    let mut index = serial.then(|| IndexDecl::new(IndexKind::Unique, own_name()));

    for option in &column.options {
        match &option.option {
            ColumnOption::NotNull => nullable = false,
            ColumnOption::Null => nullable = true,
            ColumnOption::Unique { is_primary, .. } => {
                if *is_primary {
                    nullable = false;
                    index = Some(IndexDecl::new(IndexKind::Primary, own_name()));
                } else if index.is_none() {
                    index = Some(IndexDecl::new(IndexKind::Unique, own_name()));
                }
            }
            _ => {}
        }
    }

    let full_type = if serial {
        "bigint unsigned".to_string()
    } else {
        rendered.to_ascii_lowercase()
    };
    let descriptor = ColumnDescriptor::new(
        table_name,
        column.name.value.clone(),
        data_type_token(&rendered),
        nullable,
    )
    .with_full_type(full_type);
    (descriptor, index)
}

fn leading_word(rendered: &str) -> String {
    rendered
        .trim()
        .chars()
        .take_while(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
        .collect::<String>()
        .to_ascii_lowercase()
}

/// `SERIAL` is shorthand for `BIGINT UNSIGNED NOT NULL AUTO_INCREMENT UNIQUE`.
fn is_serial(rendered: &str) -> bool {
    leading_word(rendered) == "serial"
}

/// Reduce a rendered column type to the `DATA_TYPE` token MySQL would report.
///
/// Examples:
/// - `"VARCHAR(50)"` -> `"varchar"`
/// - `"INT UNSIGNED"` -> `"int"`
/// - `"BOOLEAN"` -> `"tinyint"`
/// - `"FLOAT(30)"` -> `"double"`
pub fn data_type_token(rendered: &str) -> String {
    let leading = leading_word(rendered);

    let canonical = match leading.as_str() {
        "integer" | "int4" => "int",
        "int1" | "bool" | "boolean" => "tinyint",
        "int2" => "smallint",
        "int3" | "middleint" => "mediumint",
        "int8" | "serial" => "bigint",
        "dec" | "numeric" | "fixed" => "decimal",
        "real" | "float8" => "double",
        "float4" => "float",
        "float" if float_precision(rendered).is_some_and(|p| p > 24) => "double",
        "character" | "nchar" => "char",
        "nvarchar" => "varchar",
        "long" => "mediumtext",
        _ => return leading,
    };
    canonical.to_string()
}

/// Precision of a single-argument `FLOAT(p)`.
fn float_precision(rendered: &str) -> Option<u32> {
    let (_, args) = rendered.split_once('(')?;
    let args = args.split_once(')')?.0;
    if args.contains(',') {
        return None;
    }
    args.trim().parse().ok()
}

/// Return the identifier without surrounding backticks or double quotes.
fn unquote(ident: &str) -> String {
    let trimmed = ident.trim();
    trimmed
        .strip_prefix('`')
        .and_then(|s| s.strip_suffix('`'))
        .or_else(|| trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(trimmed)
        .to_string()
}

/// Terminal relation of a possibly schema-qualified name, unquoted.
///
/// Dots inside quoted identifiers do not split, e.g. `` `my.schema`.`widget` ``.
fn relation_name(name: &str) -> String {
    let mut quote: Option<char> = None;
    let mut start = 0usize;

    for (idx, ch) in name.char_indices() {
        match (quote, ch) {
            (None, '`' | '"') => quote = Some(ch),
            (Some(open), _) if open == ch => quote = None,
            (None, '.') => start = idx + 1,
            _ => {}
        }
    }

    unquote(&name[start..])
}
