//! Validated configuration for OpenAPI documentation generation
//!
//! This crate defines the configuration a documentation generator reads at
//! startup: the directory generated artifacts are written to, and the
//! security schemes advertised under `components.securitySchemes`.
//!
//! ## Features
//!
//! - 📁 **Defaults** - `baseDir = "/docs"`, no security schemes
//! - 🔀 **Shallow merge** - Caller overrides replace defaults field by field
//! - 🔐 **Auth Schemes** - API key, HTTP (bearer, basic, ...), OAuth2, OpenID Connect
//! - ✅ **Validation** - Every malformed scheme is reported in one error
//! - 📤 **Embedding** - Schemes serialize in the OpenAPI 3 shape
//!
//! ## Quick Start - Defaults and Overrides
//!
//! ```
//! use swagdoc_openapi::{default_config, resolve, PartialDocsConfig};
//!
//! let config = resolve(PartialDocsConfig::new()).unwrap();
//! assert_eq!(config, default_config());
//! assert_eq!(config.base_dir(), "/docs");
//!
//! let config = resolve(PartialDocsConfig::new().with_base_dir("/api-docs")).unwrap();
//! assert_eq!(config.base_dir(), "/api-docs");
//! ```
//!
//! ## Adding Authentication
//!
//! ```
//! use swagdoc_openapi::{ApiKeyLocation, DocsConfigBuilder};
//!
//! let config = DocsConfigBuilder::new()
//!     .add_bearer_auth("bearerAuth")
//!     .add_api_key_auth("apiKeyAuth", "X-API-Key", ApiKeyLocation::Header)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.security_schemes().contains_key("bearerAuth"));
//! assert!(config.security_schemes().contains_key("apiKeyAuth"));
//! ```
//!
//! ## Loosely-typed Input
//!
//! ```
//! use serde_json::json;
//! use swagdoc_openapi::{resolve_value, ConfigError};
//!
//! let err = resolve_value(json!({
//!     "securitySchemes": {
//!         "apiKeyAuth": { "type": "apiKey", "in": "sidebar" }
//!     }
//! }))
//! .unwrap_err();
//!
//! assert!(matches!(err, ConfigError::InvalidSecurityScheme(_)));
//! assert_eq!(err.scheme_names(), vec!["apiKeyAuth"]);
//!
//! let err = resolve_value(json!({ "extra": true })).unwrap_err();
//! assert!(matches!(err, ConfigError::UnknownField(_)));
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod scheme;
pub mod validation;

pub use builder::*;
pub use config::*;
pub use error::{ConfigError, Result, SchemeIssue};
pub use scheme::*;
