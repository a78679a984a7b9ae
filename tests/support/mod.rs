#![allow(dead_code)]

use std::path::PathBuf;

use mysql_to_openapi::generator::assembler::assemble;
use mysql_to_openapi::generator::document::OpenApiDocument;
use mysql_to_openapi::schema::column::ColumnDescriptor;
use mysql_to_openapi::schema::ddl;

pub(crate) fn fixture_path(fixture: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(fixture).join("input.sql")
}

pub(crate) fn read_fixture_sql(fixture: &str) -> String {
    std::fs::read_to_string(fixture_path(fixture)).expect("fixture SQL should be readable")
}

pub(crate) fn fixture_columns(fixture: &str) -> Vec<ColumnDescriptor> {
    ddl::parse_columns(&read_fixture_sql(fixture)).expect("fixture SQL should parse")
}

pub(crate) fn fixture_document(fixture: &str) -> OpenApiDocument {
    assemble(fixture, &fixture_columns(fixture))
}

pub(crate) fn widget_rows() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("widget", "id", "int", false),
        ColumnDescriptor::new("widget", "name", "varchar", true),
    ]
}
