// Environment variable source

use crate::{FileFormat, LoadError, Result};
use serde_json::Value;
use std::env::VarError;
use swagdoc_openapi::BASE_DIR_FIELD;

/// Prefix used when none is configured
pub const DEFAULT_ENV_PREFIX: &str = "SWAGDOC";

/// Reads a configuration document from environment variables.
///
/// With the default prefix:
/// - `SWAGDOC_CONFIG` holds the whole document
/// - `SWAGDOC_CONFIG_FORMAT` names its format (`json` unless set)
/// - `SWAGDOC_BASE_DIR` overrides `baseDir` on top of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().trim_end_matches('_').to_uppercase(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn config_var(&self) -> String {
        format!("{}_CONFIG", self.prefix)
    }

    pub fn format_var(&self) -> String {
        format!("{}_CONFIG_FORMAT", self.prefix)
    }

    pub fn base_dir_var(&self) -> String {
        format!("{}_BASE_DIR", self.prefix)
    }

    /// Read from the process environment
    pub fn read_process_env(&self) -> Result<Value> {
        self.read(|key| std::env::var(key))
    }

    /// Read using an arbitrary lookup. Unset variables yield `null`.
    pub fn read<F>(&self, lookup: F) -> Result<Value>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let format = match optional(lookup(&self.format_var()))? {
            Some(name) => {
                FileFormat::from_extension(name.trim()).ok_or(LoadError::UnsupportedFormat(name))?
            }
            None => FileFormat::Json,
        };

        let mut value = match optional(lookup(&self.config_var()))? {
            Some(content) => format.parse(&content)?,
            None => Value::Null,
        };

        if let Some(base_dir) = optional(lookup(&self.base_dir_var()))? {
            if value.is_null() {
                value = Value::Object(serde_json::Map::new());
            }
            if let Value::Object(object) = &mut value {
                object.insert(BASE_DIR_FIELD.to_string(), Value::String(base_dir));
            }
        }

        Ok(value)
    }
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_PREFIX)
    }
}

fn optional(result: std::result::Result<String, VarError>) -> Result<Option<String>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(LoadError::Env(err)),
    }
}
