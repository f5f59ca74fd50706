use crate::PhotoConstants;
use serde::Deserialize;
use std::path::PathBuf;

/// Settings exactly as they appear in `config/settings.yaml` and `APP__*` env vars.
#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub logging: LoggingSettings,
    pub api: RawApiSettings,
    pub secrets: SecretSettings,
    pub database: RawDatabaseSettings,
    #[serde(default)]
    pub photos: PhotoConstants,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct RawApiSettings {
    pub host: String,
    pub port: u32,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Externally reachable base URL of the Lychee media server.
    pub media_base_url: String,
    /// Folder with the built web UI. Not served when absent.
    pub frontend_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SecretSettings {
    pub database_url: String,
}

/// Connection pool tuning. Durations are in seconds unless stated otherwise.
#[derive(Debug, Deserialize, Clone)]
pub struct RawDatabaseSettings {
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: u64,
    pub idle_timeout: u64,
    pub acquire_timeout: u64,
    pub query_timeout_ms: u64,
}
