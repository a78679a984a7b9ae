use indexmap::IndexMap;

use crate::generator::document::{
    Operation, OperationParameter, ParameterLocation, PathItem, PathParameter, Reference,
    SchemaType, StatusResponse,
};
use crate::mapping::names::{normalize, pluralize};

/// Build the collection and item path items for a table.
///
/// Returns `("/<plural>", collection)` and `("/<plural>/{id}", item)`, where
/// `<plural>` is the lower-cased table name with the naive plural applied.
pub fn create_basic_path_definition(table_name: &str) -> [(String, PathItem); 2] {
    let lower = table_name.to_lowercase();
    let plural = pluralize(&lower);
    let name = normalize(&lower);
    let plural_name = normalize(&plural);

    let collection_path = format!("/{}", plural.to_lowercase());
    let item_path = format!("{collection_path}/{{id}}");

    let collection = PathItem {
        get: Some(Operation {
            summary: format!("Get a list of {plural_name}"),
            operation_id: format!("get{plural_name}"),
            parameters: Vec::new(),
            responses: status("200", "OK"),
        }),
        post: Some(Operation {
            summary: format!("Create a new {name}"),
            operation_id: format!("create{name}"),
            parameters: vec![OperationParameter::Reference(Reference::parameter(
                &format!("{name}Request"),
            ))],
            responses: status("201", "Created"),
        }),
        ..PathItem::default()
    };

    let item = PathItem {
        get: Some(Operation {
            summary: format!("Get a specific {name}"),
            operation_id: format!("get{name}ById"),
            parameters: vec![id_parameter(&name, "fetch")],
            responses: status("200", "OK"),
        }),
        put: Some(Operation {
            summary: format!("Update an existing {name}"),
            operation_id: format!("update{name}"),
            parameters: vec![id_parameter(&name, "update")],
            responses: status("200", "OK"),
        }),
        delete: Some(Operation {
            summary: format!("Delete a {name}"),
            operation_id: format!("delete{name}"),
            parameters: vec![id_parameter(&name, "delete")],
            responses: status("204", "No Content"),
        }),
        ..PathItem::default()
    };

    [(collection_path, collection), (item_path, item)]
}

fn id_parameter(name: &str, action: &str) -> OperationParameter {
    OperationParameter::Path(PathParameter {
        name: "id".to_string(),
        location: ParameterLocation::Path,
        description: format!("ID of the {name} to {action}"),
        required: true,
        param_type: SchemaType::Integer,
    })
}

fn status(code: &str, description: &str) -> IndexMap<String, StatusResponse> {
    IndexMap::from([(
        code.to_string(),
        StatusResponse {
            description: description.to_string(),
        },
    )])
}
