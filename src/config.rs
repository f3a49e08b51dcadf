//! Runtime configuration
//!
//! Settings are layered: an optional `ecotour.toml` file, then `ECOTOUR_*`
//! environment variables (e.g. `ECOTOUR_STORE__QUERY_URL`). Every field has
//! a default so the server runs against a local Fuseki with no config at all.

use serde::Deserialize;

/// Top-level application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Triple store endpoint settings
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    /// SPARQL query endpoint
    #[serde(default = "default_query_url")]
    pub query_url: String,

    /// SPARQL update endpoint
    #[serde(default = "default_update_url")]
    pub update_url: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_query_url() -> String {
    "http://localhost:3030/eco_db/query".to_string()
}

fn default_update_url() -> String {
    "http://localhost:3030/eco_db/update".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            query_url: default_query_url(),
            update_url: default_update_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Settings {
    /// Load settings from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("ecotour").required(false))
            .add_source(config::Environment::with_prefix("ECOTOUR").separator("__"))
            .build()?
            .try_deserialize()
    }
}
