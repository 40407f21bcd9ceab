use crate::errors::ServerError;
use crate::i18n::Locale;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Where listing details and their event history are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Api,
    Sqlite,
}

impl SourceKind {
    pub fn parse(raw: &str) -> Result<Self, ServerError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "api" => Ok(SourceKind::Api),
            "sqlite" => Ok(SourceKind::Sqlite),
            other => Err(ServerError::Config(format!(
                "HISTORY_SOURCE must be 'api' or 'sqlite', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub source: SourceKind,
    pub api_base_url: String,
    pub api_timeout_secs: u64,
    pub sqlite_path: String,
    pub schema_path: String,
    pub default_locale: Locale,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            source: SourceKind::Api,
            api_base_url: "https://api.dev.aura-historia.com".to_string(),
            api_timeout_secs: 30,
            sqlite_path: "storefront.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            default_locale: Locale::De,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Build the config from environment variables, falling back to defaults.
    /// Call `dotenv::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, with the variable lookup injected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .parse::<SocketAddr>()
                .map_err(|e| ServerError::Config(format!("BIND_ADDR '{raw}': {e}")))?,
            None => defaults.bind_addr,
        };

        let max_workers = parse_number(&lookup, "MAX_WORKERS", defaults.max_workers)?;
        if max_workers == 0 {
            return Err(ServerError::Config(
                "MAX_WORKERS must be greater than 0".to_string(),
            ));
        }

        let source = match lookup("HISTORY_SOURCE") {
            Some(raw) => SourceKind::parse(&raw)?,
            None => defaults.source,
        };

        let api_base_url = lookup("API_BASE_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);
        url::Url::parse(&api_base_url)
            .map_err(|e| ServerError::Config(format!("API_BASE_URL '{api_base_url}': {e}")))?;

        let api_timeout_secs =
            parse_number(&lookup, "API_TIMEOUT_SECS", defaults.api_timeout_secs)?;

        let default_locale = match lookup("DEFAULT_LOCALE") {
            Some(raw) => Locale::from_tag(&raw).ok_or_else(|| {
                ServerError::Config(format!("DEFAULT_LOCALE '{raw}' is not supported"))
            })?,
            None => defaults.default_locale,
        };

        Ok(Self {
            bind_addr,
            max_workers,
            source,
            api_base_url,
            api_timeout_secs,
            sqlite_path: lookup("SQLITE_PATH").unwrap_or(defaults.sqlite_path),
            schema_path: lookup("SCHEMA_PATH").unwrap_or(defaults.schema_path),
            default_locale,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_secs)
    }
}

fn parse_number<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ServerError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ServerError::Config(format!("{key} '{raw}': {e}"))),
        None => Ok(default),
    }
}
