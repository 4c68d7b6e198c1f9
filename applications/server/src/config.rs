/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use verse_genius::GeniusConfig;
use verse_storage::PgConnectOptions;

/// Plain environment variable names and the config keys they set
///
/// These are applied last, so they win over the file and over
/// `VERSE__*` variables.
const LEGACY_ENV_VARS: &[(&str, &str)] = &[
    ("DB_HOST", "database.host"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
    ("GENIUS_ACCESS_TOKEN", "genius.access_token"),
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub genius: GeniusSettings,

    #[serde(default)]
    pub enrichment: EnrichmentSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct DatabaseSettings {
    #[serde(default)]
    pub host: String,

    #[serde(default = "default_database_port")]
    pub port: u16,

    #[serde(default)]
    pub user: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub name: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeniusSettings {
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default = "default_genius_url")]
    pub api_base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EnrichmentSettings {
    /// Abort song creation when the lyrics page cannot be scraped.
    ///
    /// Off by default: the song is saved without lyrics and the failure is
    /// reported in the response.
    #[serde(default)]
    pub strict: bool,
}

impl ServerConfig {
    /// Load configuration from file and the process environment
    ///
    /// Without an explicit path, `config.toml` in the working directory is
    /// used when it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::from_sources(path, &env)
    }

    /// Load configuration from an optional file and an explicit environment
    pub fn from_sources(path: Option<&Path>, env: &HashMap<String, String>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from("config.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (VERSE__SECTION__KEY)
        settings = settings.add_source(
            config::Environment::with_prefix("VERSE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(Some(env.clone())),
        );

        for (var, key) in LEGACY_ENV_VARS {
            if let Some(value) = env.get(*var) {
                settings = settings.set_override(*key, value.clone())?;
            }
        }

        if let Some(port) = env.get("DB_PORT") {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| ServerError::Config(format!("DB_PORT is not a valid port: {port}")))?;
            settings = settings.set_override("database.port", i64::from(port))?;
        }

        let config = settings.build()?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let db = &self.database;

        for (value, var) in [(&db.host, "DB_HOST"), (&db.user, "DB_USER"), (&db.name, "DB_NAME")] {
            if value.trim().is_empty() {
                return Err(ServerError::Config(format!(
                    "Database setting missing (set {var})"
                )));
            }
        }

        if db.port == 0 {
            return Err(ServerError::Config(
                "Database port must be non-zero (set DB_PORT)".to_string(),
            ));
        }

        if db.max_connections == 0 {
            return Err(ServerError::Config(
                "database.max_connections must be at least 1".to_string(),
            ));
        }

        if !self.genius.has_token() {
            tracing::warn!("GENIUS_ACCESS_TOKEN not set; song creation will fail until it is");
        }

        Ok(())
    }
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> PgConnectOptions {
        verse_storage::connect_options(
            &self.host,
            self.port,
            &self.user,
            &self.password,
            &self.name,
        )
    }
}

impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl GeniusSettings {
    pub fn has_token(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn client_config(&self) -> GeniusConfig {
        let mut config = GeniusConfig::new(self.access_token.clone())
            .with_base_url(self.api_base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs));
        config.connect_timeout = Duration::from_secs(self.connect_timeout_secs);
        config
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_database_port() -> u16 {
    5432
}

fn default_max_connections() -> u32 {
    5
}

fn default_genius_url() -> String {
    verse_genius::DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_database_port(),
            user: String::new(),
            password: String::new(),
            name: String::new(),
            max_connections: default_max_connections(),
        }
    }
}

impl Default for GeniusSettings {
    fn default() -> Self {
        Self {
            access_token: None,
            api_base_url: default_genius_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            database: DatabaseSettings::default(),
            genius: GeniusSettings::default(),
            enrichment: EnrichmentSettings::default(),
        }
    }
}
