use std::collections::HashSet;

use indexmap::IndexMap;

use crate::generator::document::{
    BodyParameter, Definition, Header, Info, OpenApiDocument, ParameterLocation, PathItem,
    PropertySchema, Reference, Response, SchemaType,
};
use crate::generator::paths::create_basic_path_definition;
use crate::mapping::names::normalize;
use crate::mapping::types::map_type;
use crate::schema::column::ColumnDescriptor;

/// Tool name embedded in the document title.
pub const GENERATOR_NAME: &str = "mysql-to-openapi";
/// Value of the `swagger` field.
pub const SWAGGER_VERSION: &str = "2.0";
/// Value of `info.version`.
pub const API_VERSION: &str = "0.1.0";

/// Accumulates the four document maps over one ordered pass of column rows.
///
/// Each run starts from an empty assembler; nothing is shared between runs.
#[derive(Debug, Default)]
pub struct DocumentAssembler {
    definitions: IndexMap<String, Definition>,
    paths: IndexMap<String, PathItem>,
    parameters: IndexMap<String, BodyParameter>,
    responses: IndexMap<String, Response>,
    /// Raw table names whose path items were already synthesized.
    tables_with_paths: HashSet<String>,
}

impl DocumentAssembler {
    /// Start an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one column row into the document.
    ///
    /// Rows must arrive grouped by table and in column order; the property
    /// order of each definition follows arrival order.
    pub fn push(&mut self, column: &ColumnDescriptor) {
        let table = normalize(&column.table_name);
        let property_name = normalize(&column.column_name);
        let property = PropertySchema::column(map_type(&column.column_type), column.nullable);

        if !self.definitions.contains_key(&table) {
            tracing::debug!(table = %column.table_name, definition = %table, "new definition");
            self.definitions
                .insert(table.clone(), Definition::empty_object());
        }

        // Identical for every row of a table, so rewriting is harmless.
        upsert(
            &mut self.parameters,
            format!("{table}Request"),
            request_parameter(&table),
        );
        upsert(
            &mut self.responses,
            format!("{table}Response"),
            envelope_response(&table),
        );
        upsert(
            &mut self.definitions,
            format!("{table}Request"),
            envelope_definition(&table),
        );
        upsert(
            &mut self.definitions,
            format!("{table}Response"),
            envelope_definition(&table),
        );

        tracing::trace!(definition = %table, property = %property_name, "column");
        self.definitions
            .entry(table)
            .or_insert_with(Definition::empty_object)
            .properties
            .insert(property_name, property);

        if self.tables_with_paths.insert(column.table_name.clone()) {
            for (path, item) in create_basic_path_definition(&column.table_name) {
                tracing::debug!(table = %column.table_name, %path, "path item");
                upsert(&mut self.paths, path, item);
            }
        }
    }

    /// Number of distinct raw tables seen so far.
    pub fn table_count(&self) -> usize {
        self.tables_with_paths.len()
    }

    /// Complete the document for database `db_name`.
    pub fn finish(self, db_name: &str) -> OpenApiDocument {
        OpenApiDocument {
            swagger: SWAGGER_VERSION.to_string(),
            info: Info {
                title: format!("{db_name} OpenAPI 2.0 generated by {GENERATOR_NAME}"),
                version: API_VERSION.to_string(),
            },
            parameters: self.parameters,
            responses: self.responses,
            paths: self.paths,
            definitions: self.definitions,
        }
    }
}

/// Build the whole document from an ordered row sequence.
pub fn assemble<'a>(
    db_name: &str,
    columns: impl IntoIterator<Item = &'a ColumnDescriptor>,
) -> OpenApiDocument {
    let mut assembler = DocumentAssembler::new();
    for column in columns {
        assembler.push(column);
    }
    assembler.finish(db_name)
}

/// Insert or replace `key`, keeping the position of an existing entry.
///
/// Two raw names that normalize to the same key collide here; the later
/// write wins.
fn upsert<V>(map: &mut IndexMap<String, V>, key: String, value: V) {
    map.insert(key, value);
}

// ── Envelope builders ───────────────────────────────────────────────

fn request_parameter(table: &str) -> BodyParameter {
    BodyParameter {
        description: format!("An array of new {table} records"),
        location: ParameterLocation::Body,
        name: format!("{}Request", table.to_lowercase()),
        required: true,
        schema: Reference::definition(&format!("{table}Request")),
    }
}

fn envelope_response(table: &str) -> Response {
    let string_header = || Header {
        header_type: SchemaType::String,
    };
    Response {
        description: format!("{table} Response Object"),
        headers: IndexMap::from([
            ("Access-Control-Allow-Origin".to_string(), string_header()),
            ("Cache-Control".to_string(), string_header()),
        ]),
        schema: Reference::definition(&format!("{table}Response")),
    }
}

fn envelope_definition(table: &str) -> Definition {
    Definition {
        schema_type: SchemaType::Object,
        description: Some(format!("An array of {table} objects")),
        properties: IndexMap::from([(
            "Data".to_string(),
            PropertySchema::array_of(Reference::definition(table)),
        )]),
    }
}
