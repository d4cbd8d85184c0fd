use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::format::DocumentFormat;

/// Project configuration loaded from `.apicat.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApicatConfig {
    /// Document to parse when `--input` is not given.
    pub input: String,
    /// Format hint overriding the input's extension.
    pub format: Option<String>,
    pub emit: EmitFormat,
    /// Write the catalog here instead of stdout.
    pub output: Option<String>,
    pub pretty: bool,
}

impl Default for ApicatConfig {
    fn default() -> Self {
        Self {
            input: "api.yaml".to_string(),
            format: None,
            emit: EmitFormat::Json,
            output: None,
            pretty: true,
        }
    }
}

impl ApicatConfig {
    /// The configured format hint, if any, resolved to a pipeline.
    pub fn document_format(&self) -> Option<Result<DocumentFormat, crate::ParseError>> {
        self.format.as_deref().map(DocumentFormat::from_hint)
    }
}

/// Serialization of an emitted catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmitFormat {
    #[default]
    Json,
    Yaml,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".apicat.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<ApicatConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: ApicatConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# apicat configuration
input: api.yaml
# format: md          # json | yaml | yml | md | markdown (defaults to the input's extension)
emit: json            # json | yaml
# output: catalog.json
pretty: true
"#
}
