//! OpenAPI 3 security scheme types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Security schemes keyed by name, as found under `components.securitySchemes`.
pub type SecuritySchemeMap = BTreeMap<String, SecurityScheme>;

/// Security requirement (scheme name -> required scopes)
pub type SecurityRequirement = BTreeMap<String, Vec<String>>;

/// Values accepted for the `type` tag of a security scheme.
pub const SCHEME_TYPES: [&str; 4] = ["apiKey", "http", "oauth2", "openIdConnect"];

/// Security scheme
///
/// Keys that belong to no field of the tagged variant are rejected, so a
/// misspelt `bearerFormat` or an `apiKey` entry carrying `scheme` fails to
/// decode instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", deny_unknown_fields)]
pub enum SecurityScheme {
    #[serde(rename = "apiKey")]
    ApiKey {
        name: String,
        #[serde(rename = "in")]
        location: ApiKeyLocation,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    #[serde(rename = "http", rename_all = "camelCase")]
    Http {
        scheme: HttpAuthScheme,
        #[serde(skip_serializing_if = "Option::is_none")]
        bearer_format: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    #[serde(rename = "oauth2")]
    OAuth2 {
        flows: Box<OAuthFlows>,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    #[serde(rename = "openIdConnect", rename_all = "camelCase")]
    OpenIdConnect {
        open_id_connect_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl SecurityScheme {
    /// HTTP bearer authentication without a format hint
    pub fn bearer() -> Self {
        SecurityScheme::Http {
            scheme: HttpAuthScheme::Bearer,
            bearer_format: None,
            description: None,
        }
    }

    /// HTTP bearer authentication with a format hint such as `JWT`
    pub fn bearer_with_format(format: impl Into<String>) -> Self {
        SecurityScheme::Http {
            scheme: HttpAuthScheme::Bearer,
            bearer_format: Some(format.into()),
            description: None,
        }
    }

    /// HTTP basic authentication
    pub fn basic() -> Self {
        SecurityScheme::Http {
            scheme: HttpAuthScheme::Basic,
            bearer_format: None,
            description: None,
        }
    }

    /// API key passed in a query parameter, header or cookie
    pub fn api_key(name: impl Into<String>, location: ApiKeyLocation) -> Self {
        SecurityScheme::ApiKey {
            name: name.into(),
            location,
            description: None,
        }
    }

    /// OAuth2 with the given flows
    pub fn oauth2(flows: OAuthFlows) -> Self {
        SecurityScheme::OAuth2 {
            flows: Box::new(flows),
            description: None,
        }
    }

    /// OpenID Connect discovery
    pub fn open_id_connect(url: impl Into<String>) -> Self {
        SecurityScheme::OpenIdConnect {
            open_id_connect_url: url.into(),
            description: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        let slot = match &mut self {
            SecurityScheme::ApiKey { description, .. }
            | SecurityScheme::Http { description, .. }
            | SecurityScheme::OAuth2 { description, .. }
            | SecurityScheme::OpenIdConnect { description, .. } => description,
        };
        *slot = Some(text.into());
        self
    }

    /// The `type` tag this scheme serializes with.
    pub fn type_name(&self) -> &'static str {
        match self {
            SecurityScheme::ApiKey { .. } => "apiKey",
            SecurityScheme::Http { .. } => "http",
            SecurityScheme::OAuth2 { .. } => "oauth2",
            SecurityScheme::OpenIdConnect { .. } => "openIdConnect",
        }
    }

    /// Description, if any
    pub fn description(&self) -> Option<&str> {
        match self {
            SecurityScheme::ApiKey { description, .. }
            | SecurityScheme::Http { description, .. }
            | SecurityScheme::OAuth2 { description, .. }
            | SecurityScheme::OpenIdConnect { description, .. } => description.as_deref(),
        }
    }

    /// Whether security requirements on this scheme may list scopes
    pub fn supports_scopes(&self) -> bool {
        matches!(
            self,
            SecurityScheme::OAuth2 { .. } | SecurityScheme::OpenIdConnect { .. }
        )
    }
}

/// API key location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    Query,
    Header,
    Cookie,
}

impl ApiKeyLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiKeyLocation::Query => "query",
            ApiKeyLocation::Header => "header",
            ApiKeyLocation::Cookie => "cookie",
        }
    }
}

impl fmt::Display for ApiKeyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP authentication scheme from the IANA registry.
///
/// Names are matched case-insensitively and always serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HttpAuthScheme {
    Basic,
    Bearer,
    Digest,
    Dpop,
    Gnap,
    Hoba,
    Mutual,
    Negotiate,
    OAuth,
    PrivateToken,
    ScramSha1,
    ScramSha256,
    Vapid,
}

impl HttpAuthScheme {
    pub const ALL: [HttpAuthScheme; 13] = [
        HttpAuthScheme::Basic,
        HttpAuthScheme::Bearer,
        HttpAuthScheme::Digest,
        HttpAuthScheme::Dpop,
        HttpAuthScheme::Gnap,
        HttpAuthScheme::Hoba,
        HttpAuthScheme::Mutual,
        HttpAuthScheme::Negotiate,
        HttpAuthScheme::OAuth,
        HttpAuthScheme::PrivateToken,
        HttpAuthScheme::ScramSha1,
        HttpAuthScheme::ScramSha256,
        HttpAuthScheme::Vapid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpAuthScheme::Basic => "basic",
            HttpAuthScheme::Bearer => "bearer",
            HttpAuthScheme::Digest => "digest",
            HttpAuthScheme::Dpop => "dpop",
            HttpAuthScheme::Gnap => "gnap",
            HttpAuthScheme::Hoba => "hoba",
            HttpAuthScheme::Mutual => "mutual",
            HttpAuthScheme::Negotiate => "negotiate",
            HttpAuthScheme::OAuth => "oauth",
            HttpAuthScheme::PrivateToken => "privatetoken",
            HttpAuthScheme::ScramSha1 => "scram-sha-1",
            HttpAuthScheme::ScramSha256 => "scram-sha-256",
            HttpAuthScheme::Vapid => "vapid",
        }
    }
}

impl fmt::Display for HttpAuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an HTTP auth scheme name outside the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHttpScheme(pub String);

impl fmt::Display for UnknownHttpScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected: Vec<&str> = HttpAuthScheme::ALL.iter().map(|s| s.as_str()).collect();
        write!(
            f,
            "unsupported http auth scheme `{}`, expected one of {}",
            self.0,
            expected.join(", ")
        )
    }
}

impl std::error::Error for UnknownHttpScheme {}

impl FromStr for HttpAuthScheme {
    type Err = UnknownHttpScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpAuthScheme::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownHttpScheme(s.to_string()))
    }
}

impl TryFrom<String> for HttpAuthScheme {
    type Error = UnknownHttpScheme;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HttpAuthScheme> for String {
    fn from(scheme: HttpAuthScheme) -> Self {
        scheme.as_str().to_string()
    }
}

/// OAuth flows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OAuthFlows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_credentials: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<OAuthFlow>,
}

impl OAuthFlows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn implicit(mut self, flow: OAuthFlow) -> Self {
        self.implicit = Some(flow);
        self
    }

    pub fn password(mut self, flow: OAuthFlow) -> Self {
        self.password = Some(flow);
        self
    }

    pub fn client_credentials(mut self, flow: OAuthFlow) -> Self {
        self.client_credentials = Some(flow);
        self
    }

    pub fn authorization_code(mut self, flow: OAuthFlow) -> Self {
        self.authorization_code = Some(flow);
        self
    }

    /// True when no flow is declared
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Declared flows with their OpenAPI field names, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (OAuthFlowKind, &OAuthFlow)> {
        [
            (OAuthFlowKind::Implicit, self.implicit.as_ref()),
            (OAuthFlowKind::Password, self.password.as_ref()),
            (OAuthFlowKind::ClientCredentials, self.client_credentials.as_ref()),
            (OAuthFlowKind::AuthorizationCode, self.authorization_code.as_ref()),
        ]
        .into_iter()
        .filter_map(|(kind, flow)| flow.map(|flow| (kind, flow)))
    }
}

/// Which OAuth flow a [`OAuthFlow`] describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthFlowKind {
    Implicit,
    Password,
    ClientCredentials,
    AuthorizationCode,
}

impl OAuthFlowKind {
    /// Field name under `flows`
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthFlowKind::Implicit => "implicit",
            OAuthFlowKind::Password => "password",
            OAuthFlowKind::ClientCredentials => "clientCredentials",
            OAuthFlowKind::AuthorizationCode => "authorizationCode",
        }
    }

    pub fn requires_authorization_url(&self) -> bool {
        matches!(
            self,
            OAuthFlowKind::Implicit | OAuthFlowKind::AuthorizationCode
        )
    }

    pub fn requires_token_url(&self) -> bool {
        !matches!(self, OAuthFlowKind::Implicit)
    }
}

/// OAuth flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OAuthFlow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,
    pub scopes: BTreeMap<String, String>,
}

impl OAuthFlow {
    fn empty() -> Self {
        Self {
            authorization_url: None,
            token_url: None,
            refresh_url: None,
            scopes: BTreeMap::new(),
        }
    }

    /// Flow for `flows.implicit`
    pub fn implicit(authorization_url: impl Into<String>) -> Self {
        Self {
            authorization_url: Some(authorization_url.into()),
            ..Self::empty()
        }
    }

    /// Flow for `flows.password`
    pub fn password(token_url: impl Into<String>) -> Self {
        Self {
            token_url: Some(token_url.into()),
            ..Self::empty()
        }
    }

    /// Flow for `flows.clientCredentials`
    pub fn client_credentials(token_url: impl Into<String>) -> Self {
        Self::password(token_url)
    }

    /// Flow for `flows.authorizationCode`
    pub fn authorization_code(
        authorization_url: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        Self {
            authorization_url: Some(authorization_url.into()),
            token_url: Some(token_url.into()),
            ..Self::empty()
        }
    }

    pub fn refresh_url(mut self, url: impl Into<String>) -> Self {
        self.refresh_url = Some(url.into());
        self
    }

    pub fn scope(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.scopes.insert(name.into(), description.into());
        self
    }
}
