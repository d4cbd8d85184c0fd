//! Bold-label anchors (`**接口地址**: `/x``) and labeled fenced code blocks.
//!
//! Values are read from the label's own line; a label with nothing after it
//! yields `None` rather than swallowing the next line.

use std::sync::LazyLock;

use regex::Regex;

/// `**label**: value` (ASCII or full-width colon), value to end of line.
fn labeled_text(label: &str) -> Regex {
    Regex::new(&format!(r"\*\*{}\*\*[:：][ \t]*(.*)", regex::escape(label))).unwrap()
}

/// `**label**: `value``, value inside the first backtick pair.
fn labeled_code(label: &str) -> Regex {
    Regex::new(&format!(r"\*\*{}\*\*[:：][ \t]*`([^`\n]+)`", regex::escape(label))).unwrap()
}

// -- Document level -----------------------------------------------------------

static RE_DOC_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| labeled_text("简介"));
static RE_HOST: LazyLock<Regex> = LazyLock::new(|| labeled_text("HOST"));
static RE_VERSION: LazyLock<Regex> = LazyLock::new(|| labeled_text("Version"));

// -- Interface section --------------------------------------------------------

static RE_PATH: LazyLock<Regex> = LazyLock::new(|| labeled_code("接口地址"));
static RE_METHOD: LazyLock<Regex> = LazyLock::new(|| labeled_code("请求方式"));
static RE_REQUEST_TYPE: LazyLock<Regex> = LazyLock::new(|| labeled_code("请求数据类型"));
static RE_RESPONSE_TYPE: LazyLock<Regex> = LazyLock::new(|| labeled_code("响应数据类型"));
static RE_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| labeled_text("接口描述"));

pub const REQUEST_EXAMPLE: &str = "请求示例";
pub const RESPONSE_EXAMPLE: &str = "响应示例";

fn capture(re: &Regex, text: &str) -> Option<String> {
    let value = re.captures(text)?.get(1)?.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn doc_description(text: &str) -> Option<String> {
    capture(&RE_DOC_DESCRIPTION, text)
}

pub fn host(text: &str) -> Option<String> {
    capture(&RE_HOST, text)
}

pub fn version(text: &str) -> Option<String> {
    capture(&RE_VERSION, text)
}

pub fn path(section: &str) -> Option<String> {
    capture(&RE_PATH, section)
}

pub fn method(section: &str) -> Option<String> {
    capture(&RE_METHOD, section).map(|m| m.to_uppercase())
}

pub fn request_content_type(section: &str) -> Option<String> {
    capture(&RE_REQUEST_TYPE, section)
}

pub fn response_content_type(section: &str) -> Option<String> {
    capture(&RE_RESPONSE_TYPE, section)
}

pub fn description(section: &str) -> Option<String> {
    capture(&RE_DESCRIPTION, section)
}

/// A line that opens another labeled block.
pub(crate) fn is_label_line(line: &str) -> bool {
    line.trim_start().starts_with("**")
}

/// Body of the first fenced block after `**label**:`, trimmed. The fence must
/// open before the next label; an unterminated fence yields `None`.
pub fn code_block(lines: &[&str], label: &str) -> Option<String> {
    let marker = format!("**{label}**");
    let start = lines.iter().position(|line| line.contains(&marker))?;
    let mut rest = lines[start + 1..].iter();

    loop {
        let line = rest.next()?;
        if line.trim_start().starts_with("```") {
            break;
        }
        if is_label_line(line) {
            return None;
        }
    }

    let mut body = Vec::new();
    for line in rest {
        if line.trim_start().starts_with("```") {
            let text = body.join("\n");
            let text = text.trim();
            return (!text.is_empty()).then(|| text.to_string());
        }
        body.push(*line);
    }
    None
}
