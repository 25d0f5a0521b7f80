//! Integration tests for swagdoc-openapi

use serde_json::json;
use std::sync::Arc;
use swagdoc_openapi::*;

#[test]
fn test_resolve_empty_object() {
    let config = resolve_value(json!({})).unwrap();

    assert_eq!(config, default_config());
    assert_eq!(
        serde_json::to_value(&config).unwrap(),
        json!({"baseDir": "/docs", "securitySchemes": {}})
    );
}

#[test]
fn test_resolve_empty_base_dir() {
    let err = resolve_value(json!({"baseDir": ""})).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBaseDir(_)));
}

#[test]
fn test_resolve_base_dir_only() {
    let config = resolve_value(json!({"baseDir": "/api-docs"})).unwrap();

    assert_eq!(
        serde_json::to_value(&config).unwrap(),
        json!({"baseDir": "/api-docs", "securitySchemes": {}})
    );
}

#[test]
fn test_resolve_bearer_scheme() {
    let config = resolve_value(json!({
        "securitySchemes": {
            "bearerAuth": {"type": "http", "scheme": "bearer"}
        }
    }))
    .unwrap();

    assert_eq!(
        serde_json::to_value(&config).unwrap(),
        json!({
            "baseDir": "/docs",
            "securitySchemes": {
                "bearerAuth": {"type": "http", "scheme": "bearer"}
            }
        })
    );
}

#[test]
fn test_resolve_bad_api_key_location() {
    let err = resolve_value(json!({
        "securitySchemes": {
            "apiKeyAuth": {"type": "apiKey", "in": "sidebar"}
        }
    }))
    .unwrap_err();

    match err {
        ConfigError::InvalidSecurityScheme(issues) => {
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].scheme_name, "apiKeyAuth");
            assert!(issues[0].detail.contains("sidebar"));
        }
        other => panic!("expected InvalidSecurityScheme, got {:?}", other),
    }
}

#[test]
fn test_resolve_unknown_field() {
    let err = resolve_value(json!({"extra": true})).unwrap_err();
    assert_eq!(err, ConfigError::UnknownField(vec!["extra".to_string()]));
}

#[test]
fn test_every_failing_scheme_reported() {
    let err = resolve_value(json!({
        "securitySchemes": {
            "c": {"type": "oauth2", "flows": {}},
            "a": {"type": "unknown"},
            "ok": {"type": "http", "scheme": "basic"},
            "b": {"type": "apiKey", "name": "", "in": "header"}
        }
    }))
    .unwrap_err();

    assert_eq!(err.scheme_names(), vec!["a", "b", "c"]);
    let message = err.to_string();
    assert!(message.contains("`a`"));
    assert!(message.contains("`b`"));
    assert!(message.contains("`c`"));
    assert!(!message.contains("`ok`"));
}

#[test]
fn test_unknown_scheme_keys_rejected() {
    let err = resolve_value(json!({
        "securitySchemes": {
            "bearerAuth": {"type": "http", "scheme": "bearer", "bearerFormt": "JWT"},
            "apiKeyAuth": {"type": "apiKey", "name": "X", "in": "header", "scheme": "bearer"},
            "basicAuth": {"type": "http", "scheme": "basic"}
        }
    }))
    .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidSecurityScheme(_)));
    assert_eq!(err.scheme_names(), vec!["apiKeyAuth", "bearerAuth"]);
    assert!(err.issues()[1].detail.contains("bearerFormt"));
}

#[test]
fn test_typed_overrides_reject_unknown_scheme_keys() {
    let result: std::result::Result<PartialDocsConfig, _> = serde_json::from_value(json!({
        "securitySchemes": {
            "bearerAuth": {"type": "http", "scheme": "bearer", "bearerFormt": "JWT"}
        }
    }));
    assert!(result.is_err());
}

#[test]
fn test_duplicate_json_scheme_name_keeps_last() {
    let raw = r#"{"securitySchemes": {
        "auth": {"type": "http", "scheme": "basic"},
        "auth": {"type": "http", "scheme": "bearer"}
    }}"#;
    let value: serde_json::Value = serde_json::from_str(raw).unwrap();

    let config = resolve_value(value).unwrap();
    assert_eq!(config.security_schemes().len(), 1);
    assert_eq!(config.security_scheme("auth"), Some(&SecurityScheme::bearer()));
}

#[test]
fn test_supplied_schemes_replace_defaults() {
    let base = DocsConfigBuilder::new()
        .add_bearer_auth("bearerAuth")
        .build()
        .unwrap();

    let mut replacement = SecuritySchemeMap::new();
    replacement.insert("basic".to_string(), SecurityScheme::basic());
    let partial = PartialDocsConfig::from(base).with_security_schemes(replacement.clone());

    let config = resolve(partial).unwrap();
    assert_eq!(config.security_schemes(), &replacement);
}

#[test]
fn test_empty_scheme_map_is_kept() {
    let config = resolve_value(json!({"securitySchemes": {}})).unwrap();
    assert!(!config.has_security_schemes());
}

#[test]
fn test_full_document_round_trip() {
    let document = json!({
        "baseDir": "./generated/docs",
        "securitySchemes": {
            "apiKeyAuth": {"type": "apiKey", "name": "X-API-Key", "in": "header", "description": "Service key"},
            "bearerAuth": {"type": "http", "scheme": "bearer", "bearerFormat": "JWT"},
            "oauth": {
                "type": "oauth2",
                "flows": {
                    "authorizationCode": {
                        "authorizationUrl": "https://auth.example.com/authorize",
                        "tokenUrl": "https://auth.example.com/token",
                        "refreshUrl": "https://auth.example.com/refresh",
                        "scopes": {"read": "Read access", "write": "Write access"}
                    }
                }
            },
            "oidc": {"type": "openIdConnect", "openIdConnectUrl": "https://id.example.com/.well-known/openid-configuration"}
        }
    });

    let config = resolve_value(document.clone()).unwrap();
    assert_eq!(serde_json::to_value(&config).unwrap(), document);

    let again = resolve_value(serde_json::to_value(&config).unwrap()).unwrap();
    assert_eq!(again, config);
}

#[test]
fn test_deserialize_from_yaml() {
    let yaml = r#"
baseDir: /srv/docs
securitySchemes:
  bearerAuth:
    type: http
    scheme: bearer
"#;
    let config: DocsConfig = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(config.base_dir(), "/srv/docs");
    assert_eq!(
        config.security_scheme("bearerAuth"),
        Some(&SecurityScheme::bearer())
    );
}

#[test]
fn test_config_shared_across_threads() {
    let config = Arc::new(
        DocsConfigBuilder::new()
            .base_dir("/shared")
            .add_bearer_auth("bearerAuth")
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = Arc::clone(&config);
            std::thread::spawn(move || config.base_dir().to_string())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "/shared");
    }
}

#[test]
fn test_concurrent_resolve() {
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| scope.spawn(move || resolve(PartialDocsConfig::new().with_base_dir(format!("/docs/{}", i)))))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, result) in results.into_iter().enumerate() {
        assert_eq!(result.unwrap().base_dir(), format!("/docs/{}", i));
    }
}
