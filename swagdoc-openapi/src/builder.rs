//! Builder for documentation configurations

use crate::config::{DocsConfig, PartialDocsConfig, resolve};
use crate::error::Result;
use crate::scheme::{ApiKeyLocation, OAuthFlows, SecurityScheme, SecuritySchemeMap};

/// Fluent builder that validates on [`build`](DocsConfigBuilder::build).
#[derive(Debug, Clone, Default)]
pub struct DocsConfigBuilder {
    partial: PartialDocsConfig,
}

impl DocsConfigBuilder {
    /// Start from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: DocsConfig) -> Self {
        Self {
            partial: config.into(),
        }
    }

    /// Set the output directory
    pub fn base_dir(mut self, base_dir: impl Into<String>) -> Self {
        self.partial.base_dir = Some(base_dir.into());
        self
    }

    /// Add a security scheme, replacing any scheme with the same name
    pub fn security_scheme(mut self, name: impl Into<String>, scheme: SecurityScheme) -> Self {
        self.partial
            .security_schemes
            .get_or_insert_with(SecuritySchemeMap::new)
            .insert(name.into(), scheme);
        self
    }

    /// Replace the whole scheme map
    pub fn security_schemes(mut self, schemes: SecuritySchemeMap) -> Self {
        self.partial.security_schemes = Some(schemes);
        self
    }

    /// Validate and produce the configuration
    pub fn build(self) -> Result<DocsConfig> {
        resolve(self.partial)
    }
}

/// Shortcuts for common schemes
impl DocsConfigBuilder {
    /// Add Bearer JWT authentication
    pub fn add_bearer_auth(self, name: impl Into<String>) -> Self {
        self.security_scheme(name, SecurityScheme::bearer_with_format("JWT"))
    }

    /// Add HTTP basic authentication
    pub fn add_basic_auth(self, name: impl Into<String>) -> Self {
        self.security_scheme(name, SecurityScheme::basic())
    }

    /// Add API key authentication
    pub fn add_api_key_auth(
        self,
        name: impl Into<String>,
        key_name: impl Into<String>,
        location: ApiKeyLocation,
    ) -> Self {
        self.security_scheme(name, SecurityScheme::api_key(key_name, location))
    }

    /// Add OAuth2 authentication
    pub fn add_oauth2(self, name: impl Into<String>, flows: OAuthFlows) -> Self {
        self.security_scheme(name, SecurityScheme::oauth2(flows))
    }

    /// Add OpenID Connect discovery
    pub fn add_openid_connect(self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.security_scheme(name, SecurityScheme::open_id_connect(url))
    }
}
