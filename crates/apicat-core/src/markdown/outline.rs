//! Two-level section scanner: `#` headings track the current module, `##`
//! headings open interface sections.

use std::sync::LazyLock;

use regex::Regex;

static RE_MODULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s+[^#]").unwrap());

static RE_INTERFACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^##\s+").unwrap());

/// Lines belonging to one `##` heading, up to the next `#` or `##` heading.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    /// Heading text with the markers stripped.
    pub summary: String,
    /// The module heading in effect when the section opened.
    pub category: Option<String>,
    pub lines: Vec<&'a str>,
}

impl Section<'_> {
    /// The section as text, heading line first.
    pub fn text(&self) -> String {
        let mut text = self.summary.clone();
        for line in &self.lines {
            text.push('\n');
            text.push_str(line);
        }
        text
    }
}

#[derive(Debug, Default)]
pub struct Outline<'a> {
    /// Text of the first `#` heading.
    pub title: Option<String>,
    pub sections: Vec<Section<'a>>,
}

enum Heading<'a> {
    Module(&'a str),
    Interface(&'a str),
}

fn heading(line: &str) -> Option<Heading<'_>> {
    let text = line.trim_start_matches('#').trim();
    if RE_MODULE.is_match(line) {
        Some(Heading::Module(text))
    } else if RE_INTERFACE.is_match(line) {
        Some(Heading::Interface(text))
    } else {
        None
    }
}

/// Whether a `#` heading names a module rather than the document itself.
///
/// Headings mentioning "文档" (document) are treated as document titles unless
/// they also mention "服务" (service). Known limitation: a module whose name
/// really contains "文档" without "服务" is misread as a title and does not
/// become a category.
pub fn is_module_heading(text: &str) -> bool {
    !text.contains("文档") || text.contains("服务")
}

/// Split a document into interface sections. Lines inside fenced code blocks
/// never count as headings.
pub fn scan(content: &str) -> Outline<'_> {
    let mut outline = Outline::default();
    let mut category: Option<String> = None;
    let mut current: Option<Section<'_>> = None;
    let mut in_fence = false;

    for line in content.lines() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
        }
        let kind = if in_fence { None } else { heading(line) };

        match kind {
            Some(Heading::Module(text)) => {
                outline.sections.extend(current.take());
                if outline.title.is_none() {
                    outline.title = Some(text.to_string());
                } else if is_module_heading(text) {
                    category = Some(text.to_string());
                }
            }
            Some(Heading::Interface(text)) => {
                outline.sections.extend(current.take());
                current = Some(Section {
                    summary: text.to_string(),
                    category: category.clone(),
                    lines: Vec::new(),
                });
            }
            None => {
                if let Some(section) = current.as_mut() {
                    section.lines.push(line);
                }
            }
        }
    }
    outline.sections.extend(current);

    outline
}
