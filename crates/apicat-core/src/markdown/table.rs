//! Pipe-delimited tables under bold labels: request parameters, response
//! fields, and response status codes.

use indexmap::IndexMap;

use super::anchors::is_label_line;
use crate::model::builder::{compose_type, response_spec, strip_nesting};
use crate::model::{Parameter, ParameterLocation, ResponseField, ResponseSpec};

pub const REQUEST_PARAMETERS: &str = "请求参数";
pub const RESPONSE_PARAMETERS: &str = "响应参数";
pub const RESPONSE_STATUS: &str = "响应状态";

/// A table's first row and the data rows below it. Alignment rows are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Locate the table under `**label**`: blank lines after the label are skipped,
/// then rows run until the next blank line or the next label line.
pub fn find_table(lines: &[&str], label: &str) -> Option<PipeTable> {
    let marker = format!("**{label}**");
    let start = lines.iter().position(|line| line.contains(&marker))?;

    let mut table: Option<PipeTable> = None;
    let block = lines[start + 1..]
        .iter()
        .map(|line| line.trim())
        .skip_while(|line| line.is_empty())
        .take_while(|line| !line.is_empty() && !is_label_line(line));

    for line in block {
        let Some(cells) = split_row(line) else {
            continue;
        };
        if is_alignment_row(&cells) {
            continue;
        }
        match table.as_mut() {
            None => {
                table = Some(PipeTable {
                    header: cells,
                    rows: Vec::new(),
                })
            }
            Some(table) => table.rows.push(cells),
        }
    }
    table
}

fn split_row(line: &str) -> Option<Vec<String>> {
    let inner = line.strip_prefix('|')?;
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    Some(inner.split('|').map(|cell| cell.trim().to_string()).collect())
}

/// `|---|:---:|` style rows.
fn is_alignment_row(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells
            .iter()
            .all(|cell| !cell.is_empty() && cell.chars().all(|c| c == '-' || c == ':'))
}

fn cell(row: &[String], index: usize) -> Option<&str> {
    row.get(index).map(String::as_str).filter(|c| !c.is_empty())
}

/// Request parameter rows: `name, description, in, required, type, schema`.
/// Rows shorter than the header or with a blank name are skipped.
pub fn request_parameters(table: &PipeTable) -> Vec<Parameter> {
    table
        .rows
        .iter()
        .filter_map(|row| parameter_row(row, table.header.len()))
        .collect()
}

fn parameter_row(row: &[String], width: usize) -> Option<Parameter> {
    if row.len() < width {
        log::debug!("skipping short parameter row {row:?}");
        return None;
    }
    let (name, is_nested) = strip_nesting(cell(row, 0)?);
    if name.is_empty() {
        return None;
    }
    let schema = cell(row, 5);

    Some(Parameter {
        name,
        location: ParameterLocation::from(cell(row, 2).unwrap_or("body")),
        required: cell(row, 3).is_some_and(|c| c.eq_ignore_ascii_case("true")),
        param_type: compose_type(cell(row, 4).unwrap_or("string"), schema),
        description: cell(row, 1).unwrap_or_default().to_string(),
        schema_ref: schema.map(String::from),
        is_nested,
        example: None,
        default: None,
        enum_values: Vec::new(),
        format: None,
    })
}

/// Response field rows: `name, description, type, schema`. At least three
/// cells are required.
pub fn response_fields(table: &PipeTable) -> Vec<ResponseField> {
    table
        .rows
        .iter()
        .filter_map(|row| {
            if row.len() < 3 {
                log::debug!("skipping short response row {row:?}");
                return None;
            }
            let (name, is_nested) = strip_nesting(cell(row, 0)?);
            if name.is_empty() {
                return None;
            }
            Some(ResponseField {
                name,
                description: cell(row, 1).unwrap_or_default().to_string(),
                field_type: cell(row, 2).unwrap_or("string").to_string(),
                schema: cell(row, 3).map(String::from),
                is_nested,
            })
        })
        .collect()
}

/// Schema name the dialect gives the success response body.
pub const RESPONSE_BODY_SCHEMA: &str = "响应消息体";

/// Status codes from the status table, in table order. Rows whose first cell
/// is not an integer (the header among them) are skipped; business codes such
/// as `-1` are kept. Without any usable row the interface documents a single
/// `200: OK`.
pub fn status_codes(table: Option<&PipeTable>) -> IndexMap<String, ResponseSpec> {
    let mut responses = IndexMap::new();

    if let Some(table) = table {
        for row in std::iter::once(&table.header).chain(&table.rows) {
            if row.len() < 2 {
                continue;
            }
            let Ok(code) = row[0].parse::<i64>() else {
                continue;
            };
            responses.insert(code.to_string(), response_spec(&row[1]));
        }
    }

    if responses.is_empty() {
        responses.insert("200".to_string(), response_spec("OK"));
    }
    if let Some(ok) = responses.get_mut("200") {
        ok.schema_ref = Some(RESPONSE_BODY_SCHEMA.to_string());
    }
    responses
}
