//! Documentation configuration: defaults, merge and validation

use crate::error::{ConfigError, Result, SchemeIssue, json_type_name};
use crate::scheme::{SecurityRequirement, SecurityScheme, SecuritySchemeMap};
use crate::validation;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Directory used when the caller does not supply `baseDir`.
pub const DEFAULT_BASE_DIR: &str = "/docs";

/// Field name of the output directory
pub const BASE_DIR_FIELD: &str = "baseDir";

/// Field name of the scheme map
pub const SECURITY_SCHEMES_FIELD: &str = "securitySchemes";

const KNOWN_FIELDS: [&str; 2] = [BASE_DIR_FIELD, SECURITY_SCHEMES_FIELD];

/// Validated documentation configuration.
///
/// Values only come out of [`default_config`], [`resolve`], [`resolve_value`]
/// or deserialization (which runs [`resolve_value`]), so every instance has a
/// non-empty `baseDir` and well-formed security schemes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "serde_json::Value")]
pub struct DocsConfig {
    base_dir: String,
    security_schemes: SecuritySchemeMap,
}

impl DocsConfig {
    /// Where generated documentation is written. Never checked against the filesystem.
    pub fn base_dir(&self) -> &str {
        &self.base_dir
    }

    /// `base_dir` as a path
    pub fn base_dir_path(&self) -> &Path {
        Path::new(&self.base_dir)
    }

    /// Declared security schemes, ordered by name
    pub fn security_schemes(&self) -> &SecuritySchemeMap {
        &self.security_schemes
    }

    /// Look up a scheme by name
    pub fn security_scheme(&self, name: &str) -> Option<&SecurityScheme> {
        self.security_schemes.get(name)
    }

    pub fn has_security_schemes(&self) -> bool {
        !self.security_schemes.is_empty()
    }

    /// Security requirement object referencing a declared scheme.
    ///
    /// Scopes are dropped for schemes that do not support them. Returns
    /// `None` when `name` is not declared.
    pub fn security_requirement(&self, name: &str, scopes: &[&str]) -> Option<SecurityRequirement> {
        let scheme = self.security_scheme(name)?;
        let scopes = if scheme.supports_scopes() {
            scopes.iter().map(|scope| scope.to_string()).collect()
        } else {
            Vec::new()
        };

        let mut requirement = SecurityRequirement::new();
        requirement.insert(name.to_string(), scopes);
        Some(requirement)
    }

    /// Fragment to merge into an OpenAPI `components` object.
    ///
    /// `securitySchemes` is omitted when no scheme is declared.
    pub fn components_json(&self) -> Value {
        let mut components = serde_json::Map::new();
        if self.has_security_schemes() {
            components.insert(
                SECURITY_SCHEMES_FIELD.to_string(),
                serde_json::json!(self.security_schemes),
            );
        }
        Value::Object(components)
    }

    /// Export as pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Export as YAML
    pub fn to_yaml(&self) -> std::result::Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        default_config()
    }
}

impl TryFrom<Value> for DocsConfig {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self> {
        resolve_value(value)
    }
}

/// Caller-supplied overrides. Absent fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialDocsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_schemes: Option<SecuritySchemeMap>,
}

impl PartialDocsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<String>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn with_security_schemes(mut self, schemes: SecuritySchemeMap) -> Self {
        self.security_schemes = Some(schemes);
        self
    }
}

impl From<DocsConfig> for PartialDocsConfig {
    fn from(config: DocsConfig) -> Self {
        Self {
            base_dir: Some(config.base_dir),
            security_schemes: Some(config.security_schemes),
        }
    }
}

/// Built-in configuration: `baseDir = "/docs"`, no security schemes.
pub fn default_config() -> DocsConfig {
    DocsConfig {
        base_dir: DEFAULT_BASE_DIR.to_string(),
        security_schemes: SecuritySchemeMap::new(),
    }
}

/// Merge `partial` onto [`default_config`] and validate the result.
///
/// The merge is shallow: a supplied scheme map replaces the default map
/// wholesale. Every malformed scheme is reported, not just the first.
pub fn resolve(partial: PartialDocsConfig) -> Result<DocsConfig> {
    finish(partial.base_dir, partial.security_schemes, Vec::new())
}

/// Resolve a loosely-typed configuration value, as read from a file or
/// environment variable.
///
/// `null` stands for "no configuration" at the top level and for "use the
/// default" on either field.
///
/// A `Value` cannot hold duplicate keys: when a JSON document repeats a scheme
/// name, `serde_json` has already kept the last occurrence. YAML documents
/// with duplicate keys fail to parse instead.
pub fn resolve_value(value: Value) -> Result<DocsConfig> {
    let mut object = match value {
        Value::Null => serde_json::Map::new(),
        Value::Object(object) => object,
        other => {
            return Err(ConfigError::InvalidShape {
                field: "configuration".to_string(),
                expected: "an object",
                found: json_type_name(&other),
            });
        }
    };

    let mut unknown: Vec<String> = object
        .keys()
        .filter(|key| !KNOWN_FIELDS.contains(&key.as_str()))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        unknown.sort();
        return Err(ConfigError::UnknownField(unknown));
    }

    let base_dir = match object.remove(BASE_DIR_FIELD) {
        None | Some(Value::Null) => None,
        Some(Value::String(base_dir)) => Some(base_dir),
        Some(other) => {
            return Err(ConfigError::InvalidBaseDir(format!(
                "must be a string, got {}",
                json_type_name(&other)
            )));
        }
    };

    let entries = match object.remove(SECURITY_SCHEMES_FIELD) {
        None | Some(Value::Null) => None,
        Some(Value::Object(entries)) => Some(entries),
        Some(other) => {
            return Err(ConfigError::InvalidShape {
                field: SECURITY_SCHEMES_FIELD.to_string(),
                expected: "an object",
                found: json_type_name(&other),
            });
        }
    };

    let mut issues = Vec::new();
    let security_schemes = entries.map(|entries| {
        let mut schemes = SecuritySchemeMap::new();
        for (name, entry) in entries {
            match validation::decode_scheme(entry) {
                Ok(scheme) => {
                    schemes.insert(name, scheme);
                }
                Err(detail) => issues.push(SchemeIssue::new(name, detail)),
            }
        }
        schemes
    });

    finish(base_dir, security_schemes, issues)
}

fn finish(
    base_dir: Option<String>,
    security_schemes: Option<SecuritySchemeMap>,
    mut issues: Vec<SchemeIssue>,
) -> Result<DocsConfig> {
    let base_dir = base_dir.unwrap_or_else(|| DEFAULT_BASE_DIR.to_string());
    if base_dir.is_empty() {
        return Err(ConfigError::InvalidBaseDir(
            "must not be empty".to_string(),
        ));
    }

    let security_schemes = security_schemes.unwrap_or_default();
    issues.extend(validation::validate_schemes(&security_schemes));
    if !issues.is_empty() {
        issues.sort_by(|a, b| a.scheme_name.cmp(&b.scheme_name));
        return Err(ConfigError::InvalidSecurityScheme(issues));
    }

    Ok(DocsConfig {
        base_dir,
        security_schemes,
    })
}
