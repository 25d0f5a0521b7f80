// Error types for configuration loading

use crate::FileFormat;
use std::path::PathBuf;
use swagdoc_openapi::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {format} configuration: {message}")]
    Parse { format: FileFormat, message: String },

    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),

    #[error("Failed to load .env file: {0}")]
    Dotenv(String),

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

impl LoadError {
    /// The validation error, when loading failed on the configuration's content
    pub fn config_error(&self) -> Option<&ConfigError> {
        match self {
            LoadError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
