use crate::{LoggingSettings, PhotoConstants, RawApiSettings, RawDatabaseSettings, RawSettings, SecretSettings};
use color_eyre::eyre::{Report, WrapErr, bail, eyre};
use common_types::Dialect;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub logging: LoggingSettings,
    pub api: ApiSettings,
    pub secrets: SecretSettings,
    pub database: DatabaseSettings,
    pub photos: PhotoConstants,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub media_base_url: String,
    pub frontend_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy)]
pub struct DatabaseSettings {
    pub dialect: Dialect,
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: Duration,
    pub idle_timeout: Duration,
    pub acquire_timeout: Duration,
    pub query_timeout: Duration,
}

impl TryFrom<RawSettings> for AppSettings {
    type Error = Report;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        let api = ApiSettings::try_from(raw.api)?;
        let database = DatabaseSettings::from_raw(&raw.database, &raw.secrets.database_url)?;
        validate_photo_constants(&raw.photos)?;

        Ok(Self {
            logging: raw.logging,
            api,
            secrets: raw.secrets,
            database,
            photos: raw.photos,
        })
    }
}

impl TryFrom<RawApiSettings> for ApiSettings {
    type Error = Report;

    fn try_from(raw: RawApiSettings) -> Result<Self, Self::Error> {
        let port = u16::try_from(raw.port)
            .ok()
            .filter(|port| *port != 0)
            .ok_or_else(|| eyre!("api.port must be between 1 and 65535, got {}", raw.port))?;

        validate_http_url(&raw.media_base_url).wrap_err("api.media_base_url is invalid")?;
        for origin in &raw.allowed_origins {
            validate_http_url(origin)
                .wrap_err_with(|| format!("api.allowed_origins contains an invalid origin: {origin}"))?;
        }

        Ok(Self {
            host: raw.host,
            port,
            allowed_origins: raw.allowed_origins,
            media_base_url: raw.media_base_url,
            frontend_dir: raw.frontend_dir,
        })
    }
}

impl DatabaseSettings {
    fn from_raw(raw: &RawDatabaseSettings, database_url: &str) -> color_eyre::Result<Self> {
        let Some(dialect) = Dialect::from_url(database_url) else {
            bail!("secrets.database_url must start with mysql://, mariadb://, postgres://, postgresql:// or sqlite:");
        };
        if raw.max_connections == 0 {
            bail!("database.max_connections must be at least 1");
        }
        if raw.min_connections > raw.max_connections {
            bail!(
                "database.min_connections ({}) exceeds database.max_connections ({})",
                raw.min_connections,
                raw.max_connections
            );
        }
        if raw.query_timeout_ms == 0 {
            bail!("database.query_timeout_ms must be positive");
        }

        Ok(Self {
            dialect,
            max_connections: raw.max_connections,
            min_connections: raw.min_connections,
            max_lifetime: Duration::from_secs(raw.max_lifetime),
            idle_timeout: Duration::from_secs(raw.idle_timeout),
            acquire_timeout: Duration::from_secs(raw.acquire_timeout),
            query_timeout: Duration::from_millis(raw.query_timeout_ms),
        })
    }
}

fn validate_http_url(value: &str) -> color_eyre::Result<Url> {
    let url = Url::parse(value)?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("scheme must be http or https, got {}", url.scheme());
    }
    if url.host_str().is_none_or(str::is_empty) {
        bail!("URL has no host");
    }
    Ok(url)
}

fn validate_photo_constants(photos: &PhotoConstants) -> color_eyre::Result<()> {
    if photos.max_page_size < 1 {
        bail!("photos.max_page_size must be at least 1");
    }
    if !(1..=photos.max_page_size).contains(&photos.default_page_size) {
        bail!(
            "photos.default_page_size must be between 1 and photos.max_page_size ({})",
            photos.max_page_size
        );
    }
    if photos.max_id_length == 0 {
        bail!("photos.max_id_length must be at least 1");
    }
    Ok(())
}
