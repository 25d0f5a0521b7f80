// Docs configuration loader

use crate::{EnvSource, FileFormat, LoadError, Result};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use swagdoc_log::{debug, error, info, warn};
use swagdoc_openapi::{DocsConfig, resolve_value};

const LOG_TARGET: &str = "swagdoc::config";

/// Where a configuration document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// No caller configuration; the built-in defaults apply
    Defaults,
    /// A file whose format is taken from its extension
    File(PathBuf),
    /// A document held in memory
    Inline { format: FileFormat, content: String },
    /// Environment variables, see [`EnvSource`]
    Env,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Defaults => f.write_str("built-in defaults"),
            ConfigSource::File(path) => write!(f, "file {}", path.display()),
            ConfigSource::Inline { format, .. } => write!(f, "inline {} document", format),
            ConfigSource::Env => f.write_str("environment"),
        }
    }
}

/// Loads and resolves a [`DocsConfig`] at startup.
///
/// Every call either returns a fully validated configuration or an error
/// the caller should treat as fatal.
#[derive(Debug, Clone, Default)]
pub struct DocsConfigLoader {
    env: EnvSource,
}

impl DocsConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `<prefix>_CONFIG` and friends instead of `SWAGDOC_*`
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env = EnvSource::new(prefix);
        self
    }

    pub fn env_source(&self) -> &EnvSource {
        &self.env
    }

    /// Load, resolve and log the outcome.
    pub fn load(&self, source: &ConfigSource) -> Result<DocsConfig> {
        debug!(target: LOG_TARGET, "Loading docs configuration from {}", source);

        let result = self
            .read(source)
            .and_then(|value| resolve_value(value).map_err(LoadError::from));

        match &result {
            Ok(config) => {
                info!(
                    target: LOG_TARGET,
                    "Docs configuration ready: baseDir={}, {} security scheme(s)",
                    config.base_dir(),
                    config.security_schemes().len()
                );
                if !config.has_security_schemes() {
                    debug!(target: LOG_TARGET, "No security schemes declared");
                }
            }
            Err(err) => {
                error!(
                    target: LOG_TARGET,
                    "Docs configuration from {} rejected: {}", source, err
                );
            }
        }

        result
    }

    pub fn load_defaults(&self) -> Result<DocsConfig> {
        self.load(&ConfigSource::Defaults)
    }

    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<DocsConfig> {
        self.load(&ConfigSource::File(path.as_ref().to_path_buf()))
    }

    pub fn load_str(&self, format: FileFormat, content: impl Into<String>) -> Result<DocsConfig> {
        self.load(&ConfigSource::Inline {
            format,
            content: content.into(),
        })
    }

    pub fn load_env(&self) -> Result<DocsConfig> {
        self.load(&ConfigSource::Env)
    }

    /// Load a `.env` file into the process environment, then [`load_env`](Self::load_env).
    ///
    /// Without a path a missing `.env` in the working directory is not an error.
    pub fn load_dotenv(&self, path: Option<&Path>) -> Result<DocsConfig> {
        match path {
            Some(path) => {
                dotenvy::from_path(path).map_err(|e| LoadError::Dotenv(e.to_string()))?;
            }
            None => {
                if let Err(err) = dotenvy::dotenv() {
                    if !err.not_found() {
                        return Err(LoadError::Dotenv(err.to_string()));
                    }
                    warn!(target: LOG_TARGET, "No .env file found, using process environment");
                }
            }
        }

        self.load_env()
    }

    fn read(&self, source: &ConfigSource) -> Result<Value> {
        match source {
            ConfigSource::Defaults => Ok(Value::Null),
            ConfigSource::File(path) => {
                let format = FileFormat::from_path(path)?;
                let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
                    path: path.clone(),
                    source,
                })?;
                format.parse(&content)
            }
            ConfigSource::Inline { format, content } => format.parse(content),
            ConfigSource::Env => self.env.read_process_env(),
        }
    }
}
