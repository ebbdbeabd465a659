//! Result rendering for stdout

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

/// Output format: json (default) or yaml
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    #[value(alias = "yml")]
    Yaml,
}

/// Render a value. JSON is 2-space indented unless `compact`; `compact`
/// has no effect on YAML. No trailing newline.
pub fn render<T: Serialize>(value: &T, format: OutputFormat, compact: bool) -> Result<String> {
    let rendered = match (format, compact) {
        (OutputFormat::Json, false) => serde_json::to_string_pretty(value)?,
        (OutputFormat::Json, true) => serde_json::to_string(value)?,
        (OutputFormat::Yaml, _) => serde_yaml::to_string(value)
            .context("Failed to serialize results as YAML")?
            .trim_end()
            .to_string(),
    };
    Ok(rendered)
}
