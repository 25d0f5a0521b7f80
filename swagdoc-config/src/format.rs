// Configuration document formats

use crate::{LoadError, Result};
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Supported configuration document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
    Yaml,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            "yaml" | "yml" => Some(FileFormat::Yaml),
            _ => None,
        }
    }

    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                LoadError::UnsupportedFormat(format!("no file extension on {}", path.display()))
            })?;

        Self::from_extension(ext).ok_or_else(|| LoadError::UnsupportedFormat(ext.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Json => "json",
            FileFormat::Toml => "toml",
            FileFormat::Yaml => "yaml",
        }
    }

    /// Parse a document into an untyped value.
    ///
    /// Blank content is treated as "no configuration" and yields `null`.
    /// TOML datetimes become strings in their RFC 3339 form.
    pub fn parse(&self, content: &str) -> Result<Value> {
        if content.trim().is_empty() {
            return Ok(Value::Null);
        }

        match self {
            FileFormat::Json => serde_json::from_str(content).map_err(|e| self.parse_error(e)),
            FileFormat::Toml => {
                let table: toml::Table = toml::from_str(content).map_err(|e| self.parse_error(e))?;
                toml_to_json(toml::Value::Table(table)).map_err(|e| self.parse_error(e))
            }
            FileFormat::Yaml => serde_yaml::from_str(content).map_err(|e| self.parse_error(e)),
        }
    }

    fn parse_error(&self, err: impl fmt::Display) -> LoadError {
        LoadError::Parse {
            format: *self,
            message: err.to_string(),
        }
    }
}

fn toml_to_json(value: toml::Value) -> std::result::Result<Value, String> {
    Ok(match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .ok_or_else(|| format!("non-finite number {} has no JSON form", f))?,
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(toml_to_json)
                .collect::<std::result::Result<Vec<_>, _>>()?,
        ),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| Ok((key, toml_to_json(value)?)))
                .collect::<std::result::Result<serde_json::Map<_, _>, String>>()?,
        ),
    })
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
