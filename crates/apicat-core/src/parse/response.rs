use indexmap::IndexMap;
use serde_json::Value;

use super::value::{Mapping, mapping, present, string_at};
use crate::error::ParseError;
use crate::model::{MediaContent, ResponseSpec};

/// Parse an operation's `responses`, keyed by status code in source order.
/// Non-mapping entries are skipped.
pub fn parse_responses(
    value: Option<&Value>,
    location: &str,
) -> Result<IndexMap<String, ResponseSpec>, ParseError> {
    let Some(responses) = mapping(value, location)? else {
        return Ok(IndexMap::new());
    };

    Ok(responses
        .iter()
        .filter_map(|(status, details)| {
            let details = details.as_object()?;
            Some((status.clone(), parse_response(details)))
        })
        .collect())
}

fn parse_response(details: &Mapping) -> ResponseSpec {
    let content: IndexMap<String, MediaContent> = details
        .get("content")
        .and_then(Value::as_object)
        .map(|content| {
            content
                .iter()
                .map(|(content_type, media)| {
                    let media = MediaContent {
                        schema: present(media.get("schema")),
                        example: present(media.get("example")),
                    };
                    (content_type.clone(), media)
                })
                .collect()
        })
        .unwrap_or_default();

    ResponseSpec {
        description: string_at(details, "description"),
        content,
        schema: present(details.get("schema")),
        examples: present(details.get("examples")),
        schema_ref: None,
    }
}
