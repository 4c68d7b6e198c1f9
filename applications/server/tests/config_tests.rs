//! Configuration loading tests
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;
use verse_server::{ServerConfig, ServerError};

fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
    vars.iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn database_env() -> HashMap<String, String> {
    env(&[
        ("DB_HOST", "db.internal"),
        ("DB_USER", "verse"),
        ("DB_PASSWORD", "hunter2"),
        ("DB_NAME", "songs"),
    ])
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_defaults() {
    let config = ServerConfig::from_sources(None, &HashMap::new()).unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.database.port, 5432);
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.genius.api_base_url, verse_genius::DEFAULT_API_BASE_URL);
    assert!(!config.genius.has_token());
    assert!(!config.enrichment.strict);
}

#[test]
fn test_database_env_vars() {
    let mut vars = database_env();
    vars.insert("DB_PORT".to_string(), "6543".to_string());
    vars.insert("GENIUS_ACCESS_TOKEN".to_string(), "token-abc".to_string());

    let config = ServerConfig::from_sources(None, &vars).unwrap();

    assert_eq!(config.database.host, "db.internal");
    assert_eq!(config.database.user, "verse");
    assert_eq!(config.database.password, "hunter2");
    assert_eq!(config.database.name, "songs");
    assert_eq!(config.database.port, 6543);
    assert_eq!(config.genius.access_token.as_deref(), Some("token-abc"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_db_port() {
    let mut vars = database_env();
    vars.insert("DB_PORT".to_string(), "not-a-port".to_string());

    let err = ServerConfig::from_sources(None, &vars).unwrap_err();

    assert!(matches!(err, ServerError::Config(_)));
    assert!(err.to_string().contains("DB_PORT"));
}

#[test]
fn test_config_file_with_env_overrides() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[server]
host = "127.0.0.1"
port = 9000

[database]
host = "file-host"
user = "file-user"
name = "file-db"

[enrichment]
strict = true
"#,
    );

    let vars = env(&[
        ("DB_HOST", "env-host"),
        ("VERSE__SERVER__PORT", "9100"),
        ("VERSE__GENIUS__TIMEOUT_SECS", "5"),
    ]);
    let config = ServerConfig::from_sources(Some(&path), &vars).unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9100);
    assert_eq!(config.database.host, "env-host");
    assert_eq!(config.database.user, "file-user");
    assert_eq!(config.database.name, "file-db");
    assert_eq!(config.genius.timeout_secs, 5);
    assert!(config.enrichment.strict);
}

#[test]
fn test_missing_config_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let result = ServerConfig::from_sources(Some(&path), &HashMap::new());

    assert!(matches!(result, Err(ServerError::Config(_))));
}

#[test]
fn test_validate_requires_database_settings() {
    let config = ServerConfig::from_sources(None, &HashMap::new()).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("DB_HOST"));

    let mut vars = database_env();
    vars.remove("DB_NAME");
    let config = ServerConfig::from_sources(None, &vars).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("DB_NAME"));
}

#[test]
fn test_validate_rejects_zero_pool_size() {
    let mut vars = database_env();
    vars.insert(
        "VERSE__DATABASE__MAX_CONNECTIONS".to_string(),
        "0".to_string(),
    );
    let config = ServerConfig::from_sources(None, &vars).unwrap();

    assert!(config.validate().is_err());
}

#[test]
fn test_missing_token_is_not_fatal() {
    let config = ServerConfig::from_sources(None, &database_env()).unwrap();

    assert!(!config.genius.has_token());
    assert!(config.validate().is_ok());
}

#[test]
fn test_debug_redacts_password() {
    let config = ServerConfig::from_sources(None, &database_env()).unwrap();
    let debug = format!("{:?}", config.database);

    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn test_genius_client_config() {
    let vars = env(&[
        ("GENIUS_ACCESS_TOKEN", "token-abc"),
        ("VERSE__GENIUS__API_BASE_URL", "http://localhost:9999"),
        ("VERSE__GENIUS__CONNECT_TIMEOUT_SECS", "2"),
    ]);
    let config = ServerConfig::from_sources(None, &vars).unwrap();
    let client = config.genius.client_config();

    assert_eq!(client.access_token.as_deref(), Some("token-abc"));
    assert_eq!(client.api_base_url, "http://localhost:9999");
    assert_eq!(client.connect_timeout, std::time::Duration::from_secs(2));
}
