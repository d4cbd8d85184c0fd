use super::parameter::{merge_parameters, normalize_parameter, parameter_objects, split_body};
use super::request_body::{from_mapping, parse_request_body};
use super::response::parse_responses;
use super::value::{Mapping, bool_at, mapping, string_at, strings};
use crate::error::ParseError;
use crate::model::{IdAllocator, Interface, InterfaceDraft};

/// Document-level lists that Swagger 2 operations inherit.
struct Inherited {
    consumes: Vec<String>,
    produces: Vec<String>,
}

/// Walk `paths` in source order and emit one interface per HTTP verb key.
/// Keys outside the verb set (`parameters`, `summary`, `$ref`, ...) are skipped.
pub fn extract_interfaces(
    root: &Mapping,
    ids: &mut IdAllocator,
) -> Result<Vec<Interface>, ParseError> {
    let Some(paths) = mapping(root.get("paths"), "paths")? else {
        return Ok(Vec::new());
    };

    let inherited = Inherited {
        consumes: root.get("consumes").map(strings).unwrap_or_default(),
        produces: root.get("produces").map(strings).unwrap_or_default(),
    };

    let mut interfaces = Vec::new();
    for (path, item) in paths {
        let Some(item) = item.as_object() else {
            log::debug!("skipping path {path}: item is not a mapping");
            continue;
        };
        let shared_params = item
            .get("parameters")
            .map(parameter_objects)
            .unwrap_or_default();

        for (key, details) in item {
            let Some(draft) = InterfaceDraft::new(path, key) else {
                continue;
            };
            let Some(details) = details.as_object() else {
                log::debug!("skipping {key} {path}: operation is not a mapping");
                continue;
            };
            let location = format!("paths.{path}.{key}");
            let draft = fill_operation(draft, details, &shared_params, &inherited, &location)?;
            interfaces.push(draft.build(ids));
        }
    }

    Ok(interfaces)
}

fn fill_operation(
    mut draft: InterfaceDraft,
    details: &Mapping,
    shared_params: &[&Mapping],
    inherited: &Inherited,
    location: &str,
) -> Result<InterfaceDraft, ParseError> {
    let own_params = details
        .get("parameters")
        .map(parameter_objects)
        .unwrap_or_default();
    let params = merge_parameters(shared_params, &own_params);
    let (body_param, others) = split_body(&params);

    // An explicit `requestBody` key wins, even when it resolves to nothing.
    draft.request_body = match details.get("requestBody") {
        Some(request_body) => parse_request_body(request_body),
        None => body_param.and_then(from_mapping),
    };
    draft.parameters = others.into_iter().map(normalize_parameter).collect();

    draft.summary = string_at(details, "summary");
    draft.description = string_at(details, "description");
    draft.tags = details
        .get("tags")
        .map(strings)
        .unwrap_or_default()
        .into_iter()
        .collect();
    draft.operation_id = string_at(details, "operationId");
    draft.deprecated = bool_at(details, "deprecated");
    draft.consumes = match details.get("consumes") {
        Some(list) => strings(list),
        None => inherited.consumes.clone(),
    };
    draft.produces = match details.get("produces") {
        Some(list) => strings(list),
        None => inherited.produces.clone(),
    };
    draft.responses = parse_responses(details.get("responses"), &format!("{location}.responses"))?;

    Ok(draft)
}
