// Swagdoc - validated configuration for OpenAPI documentation generation
//
// The core crate resolves caller overrides against the defaults and validates
// the declared security schemes. The optional crates load that configuration
// at startup and log the outcome.

// Re-export the configuration model
pub use swagdoc_openapi::*;

// Re-export optional crates
#[cfg(feature = "config")]
pub use swagdoc_config;

#[cfg(feature = "log")]
pub use swagdoc_log;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ApiKeyLocation,
        ConfigError,
        DocsConfig,
        DocsConfigBuilder,
        HttpAuthScheme,
        OAuthFlow,
        OAuthFlows,
        PartialDocsConfig,
        SecurityScheme,
        SecuritySchemeMap,
        default_config,
        resolve,
        resolve_value,
    };

    #[cfg(feature = "config")]
    pub use swagdoc_config::{ConfigSource, DocsConfigLoader, FileFormat, LoadError};
}
