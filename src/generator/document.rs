use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::mapping::types::AbstractType;

// ── Top level ────────────────────────────────────────────────────────

/// A Swagger 2.0 document. Field order is the order they are written in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// Always `"2.0"`.
    pub swagger: String,
    /// Title and version.
    pub info: Info,
    /// Shared body parameters, one `<Table>Request` per table.
    pub parameters: IndexMap<String, BodyParameter>,
    /// Shared responses, one `<Table>Response` per table.
    pub responses: IndexMap<String, Response>,
    /// Collection and item paths for every table.
    pub paths: IndexMap<String, PathItem>,
    /// Table schemas and their request/response envelopes.
    pub definitions: IndexMap<String, Definition>,
}

/// Document metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    /// Human-readable title.
    pub title: String,
    /// API version string.
    pub version: String,
}

// ── Schemas ──────────────────────────────────────────────────────────

/// JSON-Schema `type` keyword values used by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// `object`
    Object,
    /// `array`
    Array,
    /// `integer`
    Integer,
    /// `number`
    Number,
    /// `string`
    String,
}

impl From<AbstractType> for SchemaType {
    fn from(value: AbstractType) -> Self {
        match value {
            AbstractType::Integer => Self::Integer,
            AbstractType::Number => Self::Number,
            AbstractType::String => Self::String,
        }
    }
}

/// A JSON reference (`$ref`) into the same document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Target pointer, e.g. `#/definitions/Widget`.
    #[serde(rename = "$ref")]
    pub target: String,
}

impl Reference {
    /// Reference to an entry of `definitions`.
    pub fn definition(name: &str) -> Self {
        Self {
            target: format!("#/definitions/{name}"),
        }
    }

    /// Reference to an entry of `parameters`.
    pub fn parameter(name: &str) -> Self {
        Self {
            target: format!("#/parameters/{name}"),
        }
    }
}

/// An entry of `definitions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    /// Always [`SchemaType::Object`].
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Present on envelope definitions only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Property name to schema, in column order.
    pub properties: IndexMap<String, PropertySchema>,
}

impl Definition {
    /// An object schema with no properties yet.
    pub fn empty_object() -> Self {
        Self {
            schema_type: SchemaType::Object,
            description: None,
            properties: IndexMap::new(),
        }
    }
}

/// Schema of a single property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// JSON-Schema type.
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Element schema for arrays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Reference>,
    /// Swagger 2.0 vendor extension marking nullable columns.
    #[serde(rename = "x-nullable", default, skip_serializing_if = "is_false")]
    pub nullable: bool,
}

impl PropertySchema {
    /// Schema for a table column.
    pub fn column(abstract_type: AbstractType, nullable: bool) -> Self {
        Self {
            schema_type: abstract_type.into(),
            items: None,
            nullable,
        }
    }

    /// Array whose items are the referenced schema.
    pub fn array_of(items: Reference) -> Self {
        Self {
            schema_type: SchemaType::Array,
            items: Some(items),
            nullable: false,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

// ── Parameters and responses ─────────────────────────────────────────

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Request body.
    Body,
    /// URL path template segment.
    Path,
}

/// A shared body parameter in the top-level `parameters` map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyParameter {
    /// Human-readable description.
    pub description: String,
    /// Always [`ParameterLocation::Body`].
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Parameter name.
    pub name: String,
    /// Always `true`.
    pub required: bool,
    /// Body schema.
    pub schema: Reference,
}

/// A path template parameter declared inline on an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathParameter {
    /// Template variable name.
    pub name: String,
    /// Always [`ParameterLocation::Path`].
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Human-readable description.
    pub description: String,
    /// Always `true` for path parameters.
    pub required: bool,
    /// Primitive type of the value.
    #[serde(rename = "type")]
    pub param_type: SchemaType,
}

/// An operation parameter: either a reference to a shared one or inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperationParameter {
    /// `$ref` into the top-level `parameters` map.
    Reference(Reference),
    /// Inline path parameter.
    Path(PathParameter),
}

/// Header declared on a shared response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header value type.
    #[serde(rename = "type")]
    pub header_type: SchemaType,
}

/// A shared response in the top-level `responses` map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Human-readable description.
    pub description: String,
    /// Response headers by name.
    pub headers: IndexMap<String, Header>,
    /// Body schema.
    pub schema: Reference,
}

/// A per-status response on an operation; carries only a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Human-readable description, e.g. `"OK"`.
    pub description: String,
}

// ── Paths ────────────────────────────────────────────────────────────

/// Operations available on one URL template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathItem {
    /// `GET`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    /// `POST`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    /// `PUT`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    /// `DELETE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
}

/// A single HTTP operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Short summary.
    pub summary: String,
    /// Unique operation identifier.
    #[serde(rename = "operationId")]
    pub operation_id: String,
    /// Parameters; omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<OperationParameter>,
    /// Status code (as a string key) to response.
    pub responses: IndexMap<String, StatusResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nullable_flag_is_omitted_when_false() {
        let json = serde_json::to_value(PropertySchema::column(AbstractType::Integer, false))
            .unwrap();
        assert_eq!(json, serde_json::json!({ "type": "integer" }));

        let json =
            serde_json::to_value(PropertySchema::column(AbstractType::String, true)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "string", "x-nullable": true }));
    }

    #[test]
    fn array_property_references_items() {
        let json =
            serde_json::to_value(PropertySchema::array_of(Reference::definition("Widget")))
                .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "array", "items": { "$ref": "#/definitions/Widget" } })
        );
    }

    #[test]
    fn operation_parameters_serialize_untagged() {
        let params = vec![
            OperationParameter::Reference(Reference::parameter("WidgetRequest")),
            OperationParameter::Path(PathParameter {
                name: "id".to_string(),
                location: ParameterLocation::Path,
                description: "ID of the Widget to fetch".to_string(),
                required: true,
                param_type: SchemaType::Integer,
            }),
        ];
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json[0], serde_json::json!({ "$ref": "#/parameters/WidgetRequest" }));
        assert_eq!(json[1]["in"], "path");
        assert_eq!(json[1]["type"], "integer");

        let back: Vec<OperationParameter> = serde_json::from_value(json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn empty_path_item_methods_are_omitted() {
        let json = serde_json::to_value(PathItem::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
