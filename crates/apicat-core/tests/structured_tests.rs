use apicat_core::{
    HttpMethod, ParamType, ParameterLocation, ParseError, SourceKind, parse_document,
};
use serde_json::json;

const SWAGGER_USERS: &str = include_str!("fixtures/swagger2-users.json");
const OPENAPI_ORDERS: &str = include_str!("fixtures/openapi3-orders.yaml");

#[test]
fn minimal_swagger_document() {
    let doc = r#"{"swagger":"2.0","paths":{"/users":{"get":{"summary":"List"}}}}"#;
    let catalog = parse_document(doc, "json").expect("should parse");
    assert_eq!(catalog.schema_version, "2.0");
    assert_eq!(catalog.source, SourceKind::Swagger2);
    assert_eq!(catalog.len(), 1);

    let list = &catalog.interfaces[0];
    assert_eq!(list.id, "100000");
    assert_eq!(list.method, HttpMethod::Get);
    assert_eq!(list.path, "/users");
    assert_eq!(list.summary, "List");
    assert!(list.parameters.is_empty());
    assert!(list.request_body.is_none());
}

#[test]
fn single_get_scenario() {
    let doc = r#"{"swagger": "2.0", "paths": {"/users": {"get": {"responses": {"200": {"description": "ok"}}}}}}"#;
    let catalog = parse_document(doc, "json").expect("should parse");
    assert_eq!(catalog.len(), 1);

    let get = &catalog.interfaces[0];
    assert_eq!(
        (get.path.as_str(), get.method, get.id.as_str()),
        ("/users", HttpMethod::Get, "100000")
    );
    assert_eq!(get.responses["200"].description, "ok");
}

#[test]
fn swagger_document_meta() {
    let catalog = parse_document(SWAGGER_USERS, "json").expect("should parse");
    assert_eq!(catalog.title, "User Service");
    assert_eq!(catalog.description, "Accounts and roles");
    assert_eq!(catalog.base_url, "https://api.example.com:8080/v1");
}

#[test]
fn swagger_interfaces_in_source_order() {
    let catalog = parse_document(SWAGGER_USERS, "json").expect("should parse");
    let listing: Vec<(&str, &str, &str)> = catalog
        .interfaces
        .iter()
        .map(|i| (i.id.as_str(), i.method.as_str(), i.path.as_str()))
        .collect();
    assert_eq!(
        listing,
        [
            ("100000", "GET", "/users"),
            ("100001", "POST", "/users"),
            ("100002", "GET", "/users/{id}"),
            ("100003", "DELETE", "/users/{id}"),
        ]
    );
}

#[test]
fn swagger_body_parameter_becomes_request_body() {
    let catalog = parse_document(SWAGGER_USERS, "json").expect("should parse");
    let create = &catalog.interfaces[1];

    assert!(
        create
            .parameters
            .iter()
            .all(|p| p.location != ParameterLocation::Body)
    );
    assert_eq!(create.parameters.len(), 1);
    assert_eq!(create.parameters[0].location, ParameterLocation::Header);

    let body = create.request_body.as_ref().expect("should have a body");
    assert!(body.required);
    assert_eq!(body.description, "New user");
    assert_eq!(body.content_types, ["application/json"]);
    assert_eq!(body.schema_ref.as_deref(), Some("#/definitions/User"));
}

#[test]
fn swagger_parameters_and_inheritance() {
    let catalog = parse_document(SWAGGER_USERS, "json").expect("should parse");
    let list = &catalog.interfaces[0];

    let page = &list.parameters[0];
    assert_eq!(page.param_type, ParamType::Primitive("integer".into()));
    assert_eq!(page.format.as_deref(), Some("int32"));
    assert_eq!(page.default, Some(json!(1)));
    assert!(!page.required);

    let status = &list.parameters[1];
    assert_eq!(status.param_type, ParamType::Array("string".into()));
    assert_eq!(status.enum_values, [json!("active"), json!("locked")]);

    // Path-level `id` reaches both operations under /users/{id}.
    for op in &catalog.interfaces[2..] {
        assert_eq!(op.parameters.len(), 1);
        assert_eq!(op.parameters[0].name, "id");
        assert_eq!(op.parameters[0].location, ParameterLocation::Path);
        assert!(op.parameters[0].required);
    }
}

#[test]
fn swagger_tags_consumes_produces() {
    let catalog = parse_document(SWAGGER_USERS, "json").expect("should parse");

    let create = &catalog.interfaces[1];
    let tags: Vec<&String> = create.tags.iter().collect();
    assert_eq!(tags, ["user", "admin"]);
    assert_eq!(create.consumes, ["application/json"]);

    let get = &catalog.interfaces[2];
    assert_eq!(get.produces, ["application/xml"]);
    assert_eq!(get.consumes, ["application/json"]);

    let delete = &catalog.interfaces[3];
    assert!(delete.deprecated);
    assert!(!get.deprecated);
}

#[test]
fn swagger_responses() {
    let catalog = parse_document(SWAGGER_USERS, "json").expect("should parse");
    let list = &catalog.interfaces[0];
    let statuses: Vec<&String> = list.responses.keys().collect();
    assert_eq!(statuses, ["200", "401"]);
    assert_eq!(
        list.responses["200"].schema,
        Some(json!({"$ref": "#/definitions/UserPage"}))
    );
    assert!(list.responses["200"].content.is_empty());
}

#[test]
fn openapi3_document_meta() {
    let catalog = parse_document(OPENAPI_ORDERS, "yaml").expect("should parse");
    assert_eq!(catalog.schema_version, "3.0.3");
    assert_eq!(catalog.source, SourceKind::OpenApi3);
    assert_eq!(catalog.title, "Order Service");
    assert_eq!(catalog.base_url, "https://orders.example.com/api");
}

#[test]
fn openapi3_skips_non_verb_keys() {
    let catalog = parse_document(OPENAPI_ORDERS, "yml").expect("should parse");
    let methods: Vec<HttpMethod> = catalog.interfaces.iter().map(|i| i.method).collect();
    assert_eq!(
        methods,
        [HttpMethod::Get, HttpMethod::Post, HttpMethod::Patch]
    );
    assert_eq!(catalog.interfaces[2].id, "100002");
}

#[test]
fn openapi3_schema_parameters() {
    let catalog = parse_document(OPENAPI_ORDERS, "yaml").expect("should parse");
    let list = &catalog.interfaces[0];

    let limit = &list.parameters[0];
    assert_eq!(limit.param_type, ParamType::Primitive("integer".into()));
    assert_eq!(limit.format.as_deref(), Some("int64"));
    assert_eq!(limit.default, Some(json!(20)));

    assert_eq!(list.parameters[1].param_type, ParamType::Array("integer".into()));
    assert_eq!(list.parameters[2].location, ParameterLocation::Cookie);
    assert!(list.consumes.is_empty());
}

#[test]
fn openapi3_request_body() {
    let catalog = parse_document(OPENAPI_ORDERS, "yaml").expect("should parse");
    let place = &catalog.interfaces[1];
    let body = place.request_body.as_ref().expect("should have a body");

    assert!(body.required);
    assert_eq!(body.description, "The order to place");
    assert_eq!(body.content_types, ["application/json", "application/xml"]);
    assert_eq!(
        body.schema,
        Some(json!({"$ref": "#/components/schemas/Order"}))
    );
    assert_eq!(body.example, Some(json!({"sku": "ABC-1", "quantity": 2})));

    let statuses: Vec<&String> = place.responses.keys().collect();
    assert_eq!(statuses, ["201", "default"]);
}

#[test]
fn openapi3_operation_parameter_overrides_path_level() {
    let catalog = parse_document(OPENAPI_ORDERS, "yaml").expect("should parse");
    let update = &catalog.interfaces[2];

    assert_eq!(update.parameters.len(), 1);
    assert_eq!(update.parameters[0].format.as_deref(), Some("uuid"));
    assert_eq!(
        update.parameters[0].description,
        "Overrides the path-level definition"
    );

    let body = update.request_body.as_ref().expect("should have a body");
    assert!(!body.required);
    assert_eq!(body.content_types, ["application/merge-patch+json"]);
}

#[test]
fn openapi3_response_content() {
    let catalog = parse_document(OPENAPI_ORDERS, "yaml").expect("should parse");
    let ok = &catalog.interfaces[0].responses["200"];
    let media = &ok.content["application/json"];
    assert_eq!(
        media.schema,
        Some(json!({"$ref": "#/components/schemas/OrderList"}))
    );
    assert_eq!(media.example, Some(json!({"items": []})));
}

#[test]
fn yaml_swagger_with_numeric_version_and_integer_status_keys() {
    let yaml = r#"
swagger: 2.0
info:
  title: Numbers
paths:
  /ping:
    head:
      responses:
        200:
          description: alive
"#;
    let catalog = parse_document(yaml, "yaml").expect("should parse");
    assert_eq!(catalog.schema_version, "2.0");
    assert_eq!(catalog.interfaces[0].method, HttpMethod::Head);
    assert_eq!(catalog.interfaces[0].responses["200"].description, "alive");
}

#[test]
fn yaml_merge_keys_contribute_operations() {
    let yaml = r#"
openapi: 3.0.0
x-common: &common
  get:
    summary: Shared read
    responses:
      "200":
        description: OK
paths:
  /a:
    <<: *common
    post:
      summary: Create
      responses:
        "201":
          description: Created
"#;
    let catalog = parse_document(yaml, "yaml").expect("should parse");
    let mut listing: Vec<String> = catalog
        .interfaces
        .iter()
        .map(|i| format!("{} {} {}", i.method, i.path, i.summary))
        .collect();
    listing.sort();
    assert_eq!(listing, ["GET /a Shared read", "POST /a Create"]);
}

#[test]
fn missing_info_and_paths() {
    let catalog = parse_document("openapi: 3.1.0\n", "yaml").expect("should parse");
    assert_eq!(catalog.title, "Untitled API");
    assert!(catalog.is_empty());
}

#[test]
fn missing_version_is_invalid() {
    let err = parse_document(r#"{"paths": {}}"#, "json").unwrap_err();
    assert!(matches!(err, ParseError::InvalidDocument));
}

#[test]
fn paths_must_be_a_mapping() {
    let err = parse_document(r#"{"openapi": "3.0.0", "paths": ["/a"]}"#, "json").unwrap_err();
    match err {
        ParseError::Malformed(msg) => assert!(msg.contains("paths")),
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn responses_must_be_a_mapping() {
    let doc = r#"{"openapi": "3.0.0", "paths": {"/a": {"get": {"responses": "none"}}}}"#;
    let err = parse_document(doc, "json").unwrap_err();
    assert!(err.to_string().contains("paths./a.get.responses"));
}

#[test]
fn root_must_be_a_mapping() {
    let err = parse_document("- a\n- b\n", "yaml").unwrap_err();
    assert!(matches!(err, ParseError::Malformed(_)));
}

#[test]
fn parsing_is_repeatable() {
    let first = parse_document(SWAGGER_USERS, "json").expect("should parse");
    let second = parse_document(SWAGGER_USERS, "json").expect("should parse");
    assert_eq!(first, second);
    assert_eq!(second.interfaces[0].id, "100000");
}

#[test]
fn catalog_serializes_with_wire_names() {
    let catalog = parse_document(SWAGGER_USERS, "json").expect("should parse");
    let value = serde_json::to_value(&catalog).expect("should serialize");

    assert_eq!(value["source"], "swagger2");
    let status = &value["interfaces"][0]["parameters"][1];
    assert_eq!(status["in"], "query");
    assert_eq!(status["type"], "array<string>");
    assert_eq!(value["interfaces"][1]["method"], "POST");
}
