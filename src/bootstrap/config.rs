//! # Configuration Loader
//!
//! Reads the TOML file into the [`AppConfig`] DTO and layers environment
//! overrides on top. No validation and no defaults: an empty Supabase URL is
//! a fact the wiring step interprets, not an error.

use std::path::PathBuf;

use anyhow::Context;
use fh_core::AppConfig;

pub const ENV_SUPABASE_URL: &str = "FEEDHOPE_SUPABASE_URL";
pub const ENV_SUPABASE_ANON_KEY: &str = "FEEDHOPE_SUPABASE_ANON_KEY";
pub const ENV_REDIRECT_URL: &str = "FEEDHOPE_REDIRECT_URL";
pub const ENV_LOG_DIR: &str = "FEEDHOPE_LOG_DIR";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Overrides config values with non-empty entries returned by `lookup`.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(url) = get(ENV_SUPABASE_URL) {
        config.supabase_url = url;
    }
    if let Some(key) = get(ENV_SUPABASE_ANON_KEY) {
        config.supabase_anon_key = key;
    }
    if let Some(redirect) = get(ENV_REDIRECT_URL) {
        config.auth_redirect_url = redirect;
    }
    if let Some(dir) = get(ENV_LOG_DIR) {
        config.log_dir = PathBuf::from(dir);
    }
}

/// Loads `config_path` when given, then the process environment (after a
/// `.env` file in the working directory, if any).
pub fn load_config_with_env(config_path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e).context("Failed to read .env file"),
    }

    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => AppConfig::empty(),
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}
