use std::{str::FromStr, time::Duration};

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://newprod-api.bestcoastpairings.com/v1";
const DEFAULT_UPSTREAM_CLIENT_ID: &str = "web-app";
const DEFAULT_THROTTLE_INTERVAL_MS: u64 = 3000;

/// Process-wide configuration, read once at startup and passed explicitly to each component.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,

    pub upstream_base_url: Url,
    pub upstream_client_id: String,
    pub upstream_timeout: Option<Duration>,

    pub throttle_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Every variable is optional and falls back to its default; a variable that is
    /// present but cannot be parsed aborts with `ConfigError::InvalidEnvVar`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let upstream_base_url = match lookup("UPSTREAM_BASE_URL") {
            Some(value) => parse_base_url("UPSTREAM_BASE_URL", value)?,
            None => parse_base_url("UPSTREAM_BASE_URL", DEFAULT_UPSTREAM_BASE_URL.to_string())?,
        };

        let throttle_ms: u64 = parse_or(&lookup, "THROTTLE_INTERVAL_MS", DEFAULT_THROTTLE_INTERVAL_MS)?;
        let timeout_secs: Option<u64> = parse_optional(&lookup, "UPSTREAM_TIMEOUT_SECS")?;

        Ok(Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            upstream_base_url,
            upstream_client_id: lookup("UPSTREAM_CLIENT_ID")
                .unwrap_or_else(|| DEFAULT_UPSTREAM_CLIENT_ID.to_string()),
            upstream_timeout: timeout_secs.map(Duration::from_secs),
            throttle_interval: Duration::from_millis(throttle_ms),
        })
    }
}

fn parse_base_url(name: &str, value: String) -> Result<Url, ConfigError> {
    let url = Url::parse(&value).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.clone(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: "URL cannot be used as a base".to_string(),
        });
    }

    Ok(url)
}

fn parse_optional<F, T>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(name)
        .map(|value| {
            value.trim().parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            })
        })
        .transpose()
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Ok(parse_optional(lookup, name)?.unwrap_or(default))
}
