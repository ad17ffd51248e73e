use std::env;
use std::str::FromStr;
use tracing::warn;

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub bind_host: String,
    pub http_port: u16,
    pub max_markets_per_request: usize,
    pub max_outcomes_per_market: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            http_port: 8082,
            max_markets_per_request: 200,
            max_outcomes_per_market: 500,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to the default
    /// with a warning; zero limits are rejected.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            bind_host: lookup("BIND_HOST").unwrap_or(defaults.bind_host),
            http_port: parse_or(&lookup, "HTTP_PORT", defaults.http_port),
            max_markets_per_request: parse_or(
                &lookup,
                "MAX_MARKETS_PER_REQUEST",
                defaults.max_markets_per_request,
            ),
            max_outcomes_per_market: parse_or(
                &lookup,
                "MAX_OUTCOMES_PER_MARKET",
                defaults.max_outcomes_per_market,
            ),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_markets_per_request == 0 {
            return Err(ConfigError::InvalidValue {
                field: "MAX_MARKETS_PER_REQUEST",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_outcomes_per_market == 0 {
            return Err(ConfigError::InvalidValue {
                field: "MAX_OUTCOMES_PER_MARKET",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.bind_host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "BIND_HOST",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.http_port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid {} '{}', defaulting to {}", key, raw, default);
            default
        }),
        None => default,
    }
}
