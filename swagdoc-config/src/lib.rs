// Startup loading of swagdoc documentation configuration
//
// Reads a partial configuration from a file, an inline document or the
// environment, resolves it against the defaults and logs the outcome. The
// returned `DocsConfig` is handed explicitly to whatever needs it.

pub mod env;
pub mod error;
pub mod format;
pub mod loader;

pub use env::{DEFAULT_ENV_PREFIX, EnvSource};
pub use error::{LoadError, Result};
pub use format::FileFormat;
pub use loader::{ConfigSource, DocsConfigLoader};

use swagdoc_openapi::DocsConfig;

/// Resolve the configuration from `SWAGDOC_*` environment variables.
pub fn load_from_env() -> Result<DocsConfig> {
    DocsConfigLoader::new().load_env()
}

/// Resolve the configuration from a JSON, TOML or YAML file.
pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<DocsConfig> {
    DocsConfigLoader::new().load_file(path)
}
