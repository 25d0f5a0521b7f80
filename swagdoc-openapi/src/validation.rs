//! Security scheme validation

use crate::error::{SchemeIssue, json_type_name};
use crate::scheme::{
    HttpAuthScheme, OAuthFlow, OAuthFlowKind, SCHEME_TYPES, SecurityScheme, SecuritySchemeMap,
};
use serde_json::Value;

/// Collects the problems found in one scheme entry.
#[derive(Debug, Default)]
struct SchemeValidator {
    problems: Vec<String>,
}

impl SchemeValidator {
    fn not_empty(&mut self, value: &str, field: &str) {
        if value.is_empty() {
            self.problems.push(format!("`{}` must not be empty", field));
        }
    }

    fn optional_not_empty(&mut self, value: Option<&str>, field: &str) {
        if let Some(value) = value {
            self.not_empty(value, field);
        }
    }

    fn required(&mut self, value: Option<&str>, field: &str) {
        match value {
            Some(value) => self.not_empty(value, field),
            None => self.problems.push(format!("`{}` is required", field)),
        }
    }

    fn check(&mut self, scheme: &SecurityScheme) {
        match scheme {
            SecurityScheme::ApiKey { name, .. } => self.not_empty(name, "name"),
            SecurityScheme::Http {
                scheme,
                bearer_format,
                ..
            } => {
                if let Some(format) = bearer_format {
                    if *scheme != HttpAuthScheme::Bearer {
                        self.problems.push(format!(
                            "`bearerFormat` only applies to the bearer scheme, not `{}`",
                            scheme
                        ));
                    } else {
                        self.not_empty(format, "bearerFormat");
                    }
                }
            }
            SecurityScheme::OAuth2 { flows, .. } => {
                if flows.is_empty() {
                    self.problems
                        .push("`flows` must declare at least one flow".to_string());
                }
                for (kind, flow) in flows.iter() {
                    self.check_flow(kind, flow);
                }
            }
            SecurityScheme::OpenIdConnect {
                open_id_connect_url,
                ..
            } => self.not_empty(open_id_connect_url, "openIdConnectUrl"),
        }
    }

    fn check_flow(&mut self, kind: OAuthFlowKind, flow: &OAuthFlow) {
        let prefix = format!("flows.{}", kind.as_str());
        let authorization = format!("{}.authorizationUrl", prefix);
        let token = format!("{}.tokenUrl", prefix);

        if kind.requires_authorization_url() {
            self.required(flow.authorization_url.as_deref(), &authorization);
        } else {
            self.optional_not_empty(flow.authorization_url.as_deref(), &authorization);
        }

        if kind.requires_token_url() {
            self.required(flow.token_url.as_deref(), &token);
        } else {
            self.optional_not_empty(flow.token_url.as_deref(), &token);
        }

        self.optional_not_empty(
            flow.refresh_url.as_deref(),
            &format!("{}.refreshUrl", prefix),
        );

        if flow.scopes.keys().any(|scope| scope.is_empty()) {
            self.problems
                .push(format!("`{}.scopes` contains an empty scope name", prefix));
        }
    }

    fn finish(self, name: &str) -> Option<SchemeIssue> {
        if self.problems.is_empty() {
            None
        } else {
            Some(SchemeIssue::new(name, self.problems.join("; ")))
        }
    }
}

/// Check one typed scheme entry.
pub fn validate_scheme(name: &str, scheme: &SecurityScheme) -> Option<SchemeIssue> {
    let mut validator = SchemeValidator::default();
    if name.is_empty() {
        validator
            .problems
            .push("scheme name must not be empty".to_string());
    }
    validator.check(scheme);
    validator.finish(name)
}

/// Check every entry of a scheme map, reporting issues in name order.
pub fn validate_schemes(schemes: &SecuritySchemeMap) -> Vec<SchemeIssue> {
    schemes
        .iter()
        .filter_map(|(name, scheme)| validate_scheme(name, scheme))
        .collect()
}

/// Decode a loosely-typed scheme entry into a [`SecurityScheme`].
///
/// The error is a human-readable detail for a [`SchemeIssue`].
pub fn decode_scheme(entry: Value) -> std::result::Result<SecurityScheme, String> {
    let Some(object) = entry.as_object() else {
        return Err(format!(
            "entry must be an object, got {}",
            json_type_name(&entry)
        ));
    };

    match object.get("type") {
        None | Some(Value::Null) => {
            return Err(format!(
                "`type` is required, expected one of {}",
                SCHEME_TYPES.join(", ")
            ));
        }
        Some(Value::String(tag)) if !SCHEME_TYPES.contains(&tag.as_str()) => {
            return Err(format!(
                "unknown type `{}`, expected one of {}",
                tag,
                SCHEME_TYPES.join(", ")
            ));
        }
        Some(Value::String(_)) => {}
        Some(other) => {
            return Err(format!(
                "`type` must be a string, got {}",
                json_type_name(other)
            ));
        }
    }

    serde_json::from_value(entry).map_err(|e| e.to_string())
}
