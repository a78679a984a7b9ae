use mysql_to_openapi::generator::assembler::{assemble, DocumentAssembler};
use mysql_to_openapi::generator::document::{OperationParameter, SchemaType};
use mysql_to_openapi::schema::column::ColumnDescriptor;

mod support;

#[test]
fn widget_table_definition() {
    let doc = assemble("shop", &support::widget_rows());
    insta::assert_json_snapshot!(doc.definitions["Widget"], @r#"
    {
      "type": "object",
      "properties": {
        "ID": {
          "type": "integer"
        },
        "Name": {
          "type": "string",
          "x-nullable": true
        }
      }
    }
    "#);
}

#[test]
fn widget_request_envelope() {
    let doc = assemble("shop", &support::widget_rows());
    insta::assert_json_snapshot!(doc.definitions["WidgetRequest"], @r##"
    {
      "type": "object",
      "description": "An array of Widget objects",
      "properties": {
        "Data": {
          "type": "array",
          "items": {
            "$ref": "#/definitions/Widget"
          }
        }
      }
    }
    "##);
    assert_eq!(
        doc.definitions["WidgetResponse"],
        doc.definitions["WidgetRequest"]
    );
}

#[test]
fn widget_paths_cover_crud() {
    let doc = assemble("shop", &support::widget_rows());

    let collection = &doc.paths["/widgets"];
    assert!(collection.get.is_some());
    assert!(collection.post.is_some());
    assert!(collection.put.is_none());
    assert!(collection.delete.is_none());

    let item = &doc.paths["/widgets/{id}"];
    assert!(item.get.is_some());
    assert!(item.post.is_none());
    assert!(item.put.is_some());
    assert!(item.delete.is_some());
}

#[test]
fn path_creation_is_idempotent_per_table() {
    let rows: Vec<ColumnDescriptor> = (0..10)
        .map(|i| ColumnDescriptor::new("gadget", format!("col_{i}"), "int", false))
        .collect();
    let doc = assemble("shop", &rows);

    assert_eq!(doc.paths.len(), 2);
    assert_eq!(doc.definitions["Gadget"].properties.len(), 10);
}

#[test]
fn property_order_follows_row_order() {
    let names = ["zeta", "alpha", "mu", "beta"];
    let rows: Vec<ColumnDescriptor> = names
        .iter()
        .map(|name| ColumnDescriptor::new("sample", *name, "varchar", false))
        .collect();
    let doc = assemble("shop", &rows);

    assert_eq!(
        doc.definitions["Sample"]
            .properties
            .keys()
            .collect::<Vec<_>>(),
        vec!["Zeta", "Alpha", "Mu", "Beta"]
    );
}

#[test]
fn tables_appear_in_row_order_across_maps() {
    let rows = vec![
        ColumnDescriptor::new("account", "id", "int", false),
        ColumnDescriptor::new("widget", "id", "int", false),
    ];
    let doc = assemble("shop", &rows);

    assert_eq!(
        doc.definitions.keys().collect::<Vec<_>>(),
        vec![
            "Account",
            "AccountRequest",
            "AccountResponse",
            "Widget",
            "WidgetRequest",
            "WidgetResponse",
        ]
    );
    assert_eq!(
        doc.paths.keys().collect::<Vec<_>>(),
        vec!["/accounts", "/accounts/{id}", "/widgets", "/widgets/{id}"]
    );
    assert_eq!(
        doc.parameters.keys().collect::<Vec<_>>(),
        vec!["AccountRequest", "WidgetRequest"]
    );
    assert_eq!(
        doc.responses.keys().collect::<Vec<_>>(),
        vec!["AccountResponse", "WidgetResponse"]
    );
}

#[test]
fn every_reference_resolves() {
    let doc = support::fixture_document("shop");

    for (name, param) in &doc.parameters {
        let target = param.schema.target.trim_start_matches("#/definitions/");
        assert!(doc.definitions.contains_key(target), "{name} -> {target}");
    }
    for (name, response) in &doc.responses {
        let target = response.schema.target.trim_start_matches("#/definitions/");
        assert!(doc.definitions.contains_key(target), "{name} -> {target}");
    }
    for (path, item) in &doc.paths {
        for op in [&item.get, &item.post, &item.put, &item.delete]
            .into_iter()
            .flatten()
        {
            for param in &op.parameters {
                if let OperationParameter::Reference(reference) = param {
                    let target = reference.target.trim_start_matches("#/parameters/");
                    assert!(doc.parameters.contains_key(target), "{path} -> {target}");
                }
            }
        }
    }
}

#[test]
fn nullability_maps_to_vendor_extension() {
    let doc = support::fixture_document("shop");
    let customer = &doc.definitions["Customer"];

    assert!(!customer.properties["ID"].nullable);
    assert!(!customer.properties["Email"].nullable);
    assert!(customer.properties["Phone"].nullable);
    assert!(customer.properties["HomeAddress"].nullable);
    assert!(customer.properties["ModifiedBy"].nullable);
}

#[test]
fn assembler_can_be_driven_row_by_row() {
    let mut assembler = DocumentAssembler::new();
    for row in support::widget_rows() {
        assembler.push(&row);
    }
    let doc = assembler.finish("inventory");

    assert_eq!(doc.info.title, "inventory OpenAPI 2.0 generated by mysql-to-openapi");
    assert_eq!(
        doc.definitions["Widget"].properties["ID"].schema_type,
        SchemaType::Integer
    );
}

#[test]
fn tables_sharing_a_route_keep_first_position_and_last_content() {
    let rows = vec![
        ColumnDescriptor::new("widget", "id", "int", false),
        ColumnDescriptor::new("widgets", "id", "int", false),
    ];
    let doc = assemble("shop", &rows);

    assert_eq!(
        doc.paths.keys().collect::<Vec<_>>(),
        vec!["/widgets", "/widgets/{id}"]
    );
    let collection = &doc.paths["/widgets"];
    assert_eq!(
        collection.post.as_ref().unwrap().operation_id,
        "createWidgets"
    );
    let item = &doc.paths["/widgets/{id}"];
    assert_eq!(item.delete.as_ref().unwrap().operation_id, "deleteWidgets");

    // Definitions are keyed by normalized name, so both tables still get one.
    assert!(doc.definitions.contains_key("Widget"));
    assert!(doc.definitions.contains_key("Widgets"));
}

#[test]
fn table_named_like_an_envelope_extends_it() {
    let rows = vec![
        ColumnDescriptor::new("widget", "id", "int", false),
        ColumnDescriptor::new("widget_request", "note", "varchar", true),
    ];
    let doc = assemble("shop", &rows);

    assert_eq!(
        doc.definitions.keys().collect::<Vec<_>>(),
        vec![
            "Widget",
            "WidgetRequest",
            "WidgetResponse",
            "WidgetRequestRequest",
            "WidgetRequestResponse",
        ]
    );

    let envelope = &doc.definitions["WidgetRequest"];
    assert_eq!(
        envelope.description.as_deref(),
        Some("An array of Widget objects")
    );
    assert_eq!(
        envelope.properties.keys().collect::<Vec<_>>(),
        vec!["Data", "Note"]
    );
    assert_eq!(envelope.properties["Note"].schema_type, SchemaType::String);
    assert!(envelope.properties["Note"].nullable);

    assert_eq!(
        doc.paths.keys().collect::<Vec<_>>(),
        vec![
            "/widgets",
            "/widgets/{id}",
            "/widget_requests",
            "/widget_requests/{id}",
        ]
    );
}
