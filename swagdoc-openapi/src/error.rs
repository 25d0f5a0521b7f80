//! Configuration validation errors

use std::fmt;
use thiserror::Error;

/// Result type for configuration resolution.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// One rejected security scheme entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeIssue {
    /// Key of the entry under `securitySchemes`
    pub scheme_name: String,
    /// What is wrong with it
    pub detail: String,
}

impl SchemeIssue {
    pub fn new(scheme_name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            scheme_name: scheme_name.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for SchemeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`: {}", self.scheme_name, self.detail)
    }
}

/// Errors produced while resolving a documentation configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `baseDir` is empty or not a string.
    #[error("Invalid baseDir: {0}")]
    InvalidBaseDir(String),

    /// One or more security scheme entries are malformed.
    #[error("Invalid security scheme(s): {}", join_issues(.0))]
    InvalidSecurityScheme(Vec<SchemeIssue>),

    /// The configuration has keys other than `baseDir` and `securitySchemes`.
    #[error("Unknown configuration field(s): {}", .0.join(", "))]
    UnknownField(Vec<String>),

    /// The configuration, or its scheme map, is not an object.
    #[error("Invalid configuration: `{field}` must be {expected}, got {found}")]
    InvalidShape {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

fn join_issues(issues: &[SchemeIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ConfigError {
    /// Scheme issues carried by an `InvalidSecurityScheme` error.
    pub fn issues(&self) -> &[SchemeIssue] {
        match self {
            ConfigError::InvalidSecurityScheme(issues) => issues,
            _ => &[],
        }
    }

    /// Names of the rejected schemes, in report order.
    pub fn scheme_names(&self) -> Vec<&str> {
        self.issues()
            .iter()
            .map(|issue| issue.scheme_name.as_str())
            .collect()
    }

    /// Short machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigError::InvalidBaseDir(_) => "invalid_base_dir",
            ConfigError::InvalidSecurityScheme(_) => "invalid_security_scheme",
            ConfigError::UnknownField(_) => "unknown_field",
            ConfigError::InvalidShape { .. } => "invalid_shape",
        }
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        let mut report = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });

        match self {
            ConfigError::InvalidSecurityScheme(issues) => {
                report["schemes"] = issues
                    .iter()
                    .map(|issue| {
                        serde_json::json!({
                            "name": issue.scheme_name,
                            "detail": issue.detail,
                        })
                    })
                    .collect();
            }
            ConfigError::UnknownField(fields) => {
                report["fields"] = serde_json::json!(fields);
            }
            _ => {}
        }

        report
    }
}

/// JSON type name used in shape errors
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_every_scheme() {
        let err = ConfigError::InvalidSecurityScheme(vec![
            SchemeIssue::new("apiKeyAuth", "bad `in`"),
            SchemeIssue::new("oidc", "missing url"),
        ]);
        let message = err.to_string();

        assert!(message.contains("`apiKeyAuth`: bad `in`"));
        assert!(message.contains("`oidc`: missing url"));
        assert_eq!(err.scheme_names(), vec!["apiKeyAuth", "oidc"]);
    }

    #[test]
    fn test_unknown_field_display() {
        let err = ConfigError::UnknownField(vec!["extra".to_string(), "other".to_string()]);
        assert_eq!(err.to_string(), "Unknown configuration field(s): extra, other");
        assert!(err.issues().is_empty());
    }

    #[test]
    fn test_to_json() {
        let err = ConfigError::InvalidSecurityScheme(vec![SchemeIssue::new("a", "broken")]);
        let json = err.to_json();

        assert_eq!(json["kind"], "invalid_security_scheme");
        assert_eq!(json["schemes"][0]["name"], "a");
        assert_eq!(json["schemes"][0]["detail"], "broken");

        let json = ConfigError::UnknownField(vec!["extra".to_string()]).to_json();
        assert_eq!(json["fields"][0], "extra");
    }

    #[test]
    fn test_shape_display() {
        let err = ConfigError::InvalidShape {
            field: "securitySchemes".to_string(),
            expected: "an object",
            found: json_type_name(&serde_json::json!([1, 2])),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: `securitySchemes` must be an object, got an array"
        );
    }
}
