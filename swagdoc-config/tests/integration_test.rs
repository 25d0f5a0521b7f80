//! Integration tests for swagdoc-config

use std::io::Write;
use swagdoc_config::*;
use swagdoc_openapi::{ApiKeyLocation, ConfigError, SecurityScheme, default_config};
use tempfile::{Builder, NamedTempFile};

fn config_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_json_file() {
    let file = config_file(
        ".json",
        r#"{
            "baseDir": "/api-docs",
            "securitySchemes": {
                "bearerAuth": {"type": "http", "scheme": "bearer", "bearerFormat": "JWT"}
            }
        }"#,
    );

    let config = load_from_file(file.path()).unwrap();

    assert_eq!(config.base_dir(), "/api-docs");
    assert_eq!(
        config.security_scheme("bearerAuth"),
        Some(&SecurityScheme::bearer_with_format("JWT"))
    );
}

#[test]
fn test_load_toml_file() {
    let file = config_file(
        ".toml",
        r#"
        [securitySchemes.apiKeyAuth]
        type = "apiKey"
        name = "X-API-Key"
        in = "header"
        "#,
    );

    let config = DocsConfigLoader::new().load_file(file.path()).unwrap();

    assert_eq!(config.base_dir(), "/docs");
    assert_eq!(
        config.security_scheme("apiKeyAuth"),
        Some(&SecurityScheme::api_key("X-API-Key", ApiKeyLocation::Header))
    );
}

#[test]
fn test_load_yaml_file() {
    let file = config_file(
        ".yml",
        "baseDir: /yaml-docs\nsecuritySchemes:\n  basicAuth:\n    type: http\n    scheme: basic\n",
    );

    let config = DocsConfigLoader::new().load_file(file.path()).unwrap();

    assert_eq!(config.base_dir(), "/yaml-docs");
    assert_eq!(config.security_scheme("basicAuth"), Some(&SecurityScheme::basic()));
}

#[test]
fn test_empty_file_gives_defaults() {
    let file = config_file(".json", "");
    let config = load_from_file(file.path()).unwrap();
    assert_eq!(config, default_config());
}

#[test]
fn test_unsupported_extension() {
    let file = config_file(".ini", "baseDir=/docs");
    let err = load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedFormat(ext) if ext == "ini"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_malformed_document() {
    let file = config_file(".json", "{\"baseDir\": ");
    let err = load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Parse { format: FileFormat::Json, .. }));
}

#[test]
fn test_invalid_configuration_is_fatal() {
    let file = config_file(
        ".json",
        r#"{
            "baseDir": "",
            "securitySchemes": {"bearerAuth": {"type": "http", "scheme": "bearer"}}
        }"#,
    );

    let err = load_from_file(file.path()).unwrap_err();
    assert!(matches!(err.config_error(), Some(ConfigError::InvalidBaseDir(_))));
}

#[test]
fn test_invalid_scheme_names_every_offender() {
    let err = DocsConfigLoader::new()
        .load_str(
            FileFormat::Json,
            r#"{"securitySchemes": {
                "zeta": {"type": "apiKey", "in": "header"},
                "alpha": {"type": "carrier-pigeon"},
                "ok": {"type": "http", "scheme": "basic"}
            }}"#,
        )
        .unwrap_err();

    let config_err = err.config_error().unwrap();
    assert_eq!(config_err.scheme_names(), vec!["alpha", "zeta"]);
}

#[test]
fn test_defaults_source() {
    let config = DocsConfigLoader::new().load(&ConfigSource::Defaults).unwrap();
    assert_eq!(config, default_config());
}

#[test]
fn test_dotenv_file() {
    let file = config_file(
        ".env",
        "SWAGDOC_DOTENV_TEST_BASE_DIR=/dotenv-docs\n\
         SWAGDOC_DOTENV_TEST_CONFIG_FORMAT=yaml\n",
    );

    let config = DocsConfigLoader::new()
        .with_env_prefix("SWAGDOC_DOTENV_TEST")
        .load_dotenv(Some(file.path()))
        .unwrap();

    assert_eq!(config.base_dir(), "/dotenv-docs");
    assert!(!config.has_security_schemes());
}

#[test]
fn test_missing_dotenv_path_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DocsConfigLoader::new()
        .with_env_prefix("SWAGDOC_DOTENV_MISSING")
        .load_dotenv(Some(&dir.path().join(".env")))
        .unwrap_err();
    assert!(matches!(err, LoadError::Dotenv(_)));
}

#[test]
fn test_dotenv_config_document_reaches_process_env() {
    let file = config_file(
        ".env",
        "SWAGDOC_CONFIG='{\"baseDir\": \"/from-document\", \"securitySchemes\": {\"bearerAuth\": {\"type\": \"http\", \"scheme\": \"bearer\", \"bearerFormat\": \"JWT\"}}}'\n\
         SWAGDOC_BASE_DIR=/from-variable\n",
    );

    let loaded = DocsConfigLoader::new()
        .load_dotenv(Some(file.path()))
        .unwrap();

    assert_eq!(loaded.base_dir(), "/from-variable");
    assert_eq!(
        loaded.security_scheme("bearerAuth"),
        Some(&SecurityScheme::bearer_with_format("JWT"))
    );

    assert_eq!(
        std::env::var("SWAGDOC_BASE_DIR").as_deref(),
        Ok("/from-variable")
    );
    let from_env = load_from_env().unwrap();
    assert_eq!(from_env, loaded);
}
