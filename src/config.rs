//! Runtime configuration resolved from the environment.

use crate::error::{CarotError, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const API_BASE_URL_ENV_VAR: &str = "CAROT_API_BASE_URL";
pub const API_KEY_ENV_VAR: &str = "BALLDONTLIE_API_KEY";
pub const DB_PATH_ENV_VAR: &str = "CAROT_DB_PATH";
pub const SEARCH_DEBOUNCE_ENV_VAR: &str = "CAROT_SEARCH_DEBOUNCE_MS";

pub const DEFAULT_API_BASE_URL: &str = "https://api.balldontlie.io/v1";
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(333);

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub api_key: Option<String>,
    pub db_path: PathBuf,
    pub search_debounce: Duration,
}

impl Config {
    /// Read every setting from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup(API_BASE_URL_ENV_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let api_key = lookup(API_KEY_ENV_VAR).filter(|v| !v.trim().is_empty());

        let db_path = match lookup(DB_PATH_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => default_db_path()?,
        };

        let search_debounce = match lookup(SEARCH_DEBOUNCE_ENV_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| CarotError::InvalidConfig {
                    key: SEARCH_DEBOUNCE_ENV_VAR.to_string(),
                    value: raw.clone(),
                })?,
            None => DEFAULT_SEARCH_DEBOUNCE,
        };

        Ok(Self {
            api_base_url,
            api_key,
            db_path,
            search_debounce,
        })
    }
}

/// Path: <cache_dir>/carot/picks.db
pub fn default_db_path() -> Result<PathBuf> {
    let cache_dir = dirs::cache_dir().ok_or_else(|| CarotError::Storage {
        message: "Could not determine cache directory".to_string(),
    })?;
    Ok(cache_dir.join("carot").join("picks.db"))
}
