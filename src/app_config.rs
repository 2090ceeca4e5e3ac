use crate::error::ConfigError;
use axum::http::HeaderValue;
use std::net::{IpAddr, Ipv4Addr};
use tracing::Level;

/// which origins may call the backend from a browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// wildcard `*`, fine for local testing but should be narrowed when deployed
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: Level,
    pub cors_allowed_origins: CorsOrigins,
}

pub fn read_log_level(value: Option<String>) -> Level {
    let log_level = value.unwrap_or_else(|| "INFO".to_string());
    let log_level = match log_level.as_str() {
        "DEBUG" => Level::DEBUG,
        "INFO" => Level::INFO,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        "TRACE" => Level::TRACE,
        _ => Level::INFO,
    };
    log_level
}

/// `*` (or nothing) means any origin, otherwise a comma separated list of exact origins
pub fn read_cors_origins(value: Option<String>) -> Result<CorsOrigins, ConfigError> {
    let value = match value {
        Some(value) if !value.trim().is_empty() && value.trim() != "*" => value,
        _ => return Ok(CorsOrigins::Any),
    };
    let origins: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect();
    // an empty list or a wildcard anywhere in it still means any origin
    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }
    let origins = origins
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsOrigins::List(origins))
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// unset variables keep the values of `AppConfig::default()`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();
        let host = match lookup("BACKEND_HOST") {
            Some(host) => host
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(host))?,
            None => defaults.host,
        };
        let port = match lookup("BACKEND_PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port))?,
            None => defaults.port,
        };
        let log_level = read_log_level(lookup("LOG_LEVEL"));
        let cors_allowed_origins = read_cors_origins(lookup("CORS_ALLOWED_ORIGINS"))?;
        Ok(AppConfig {
            host,
            port,
            log_level,
            cors_allowed_origins,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
            log_level: Level::INFO,
            cors_allowed_origins: CorsOrigins::Any,
        }
    }
}
