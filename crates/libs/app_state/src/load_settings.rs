use crate::{AppSettings, RawSettings};
use color_eyre::eyre::{Result, WrapErr};
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config/settings.yaml";

/// Loads settings from `config/settings.yaml` (or `APP_CONFIG_PATH`), overridden by
/// `APP__SECTION__KEY` environment variables. A `.env` file is read first.
pub fn load_app_settings() -> Result<AppSettings> {
    // Need to load from dotenv to get it to overwrite the db url from env.
    dotenv::from_path(".env").ok();
    let config_path = std::env::var("APP_CONFIG_PATH")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    load_app_settings_from(&config_path)
}

pub fn load_app_settings_from(path: &Path) -> Result<AppSettings> {
    let config_path = path
        .canonicalize()
        .wrap_err_with(|| format!("Cannot find settings file at {}", path.display()))?;
    debug!("Loading settings from {}", config_path.display());

    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

    let raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    AppSettings::try_from(raw_settings)
}
