//! Storefront configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use handloom_catalog::{BackoffStrategy, RetryPolicy};
use handloom_commerce::search::{Filters, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};
use handloom_commerce::Money;
use handloom_observability::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Errors from parsing or validating a config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("filters.min_price ({min}) exceeds filters.max_price ({max})")]
    InvalidPriceRange { min: u64, max: u64 },
}

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog source configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Initial listing filters.
    #[serde(default)]
    pub filters: FilterConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path))
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.initial_filters().map(|_| ())
    }

    /// Filters the store starts with.
    pub fn initial_filters(&self) -> Result<Filters, ConfigError> {
        let FilterConfig { min_price, max_price } = self.filters;
        Filters::with_price_range(Money::new(min_price), Money::new(max_price))
            .map_err(|_| ConfigError::InvalidPriceRange {
                min: min_price,
                max: max_price,
            })
    }
}

/// Catalog source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Simulated latency of the mock catalog in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Retries after a failed fetch (default: none).
    #[serde(default)]
    pub max_retries: u32,

    /// Initial retry backoff in milliseconds; doubles per attempt.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

fn default_delay_ms() -> u64 {
    700
}

fn default_retry_backoff_ms() -> u64 {
    50
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            max_retries: 0,
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

impl CatalogConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Retry policy for the catalog source.
    pub fn retry_policy(&self) -> RetryPolicy {
        let base = Duration::from_millis(self.retry_backoff_ms);
        RetryPolicy::new(self.max_retries).with_backoff(BackoffStrategy::Exponential {
            base,
            max: base.saturating_mul(10),
        })
    }
}

/// Initial price bounds for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_min_price")]
    pub min_price: u64,

    #[serde(default = "default_max_price")]
    pub max_price: u64,
}

fn default_min_price() -> u64 {
    DEFAULT_MIN_PRICE.amount()
}

fn default_max_price() -> u64 {
    DEFAULT_MAX_PRICE.amount()
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_price: default_min_price(),
            max_price: default_max_price(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handloom_observability::{LogFormat, LogLevel};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.catalog.delay(), Duration::from_millis(700));
        assert_eq!(config.catalog.retry_policy().max_retries, 0);
        assert_eq!(config.initial_filters().unwrap(), Filters::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            [catalog]
            delay_ms = 0
            max_retries = 2
            retry_backoff_ms = 10

            [filters]
            max_price = 5000

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.delay(), Duration::ZERO);
        assert_eq!(
            config.catalog.retry_policy().backoff,
            BackoffStrategy::Exponential {
                base: Duration::from_millis(10),
                max: Duration::from_millis(100),
            }
        );
        assert_eq!(config.filters.min_price, 0);
        assert_eq!(config.initial_filters().unwrap().max_price, Money::new(5000));
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_inverted_price_range_rejected() {
        let err = StorefrontConfig::from_toml_str("[filters]\nmin_price = 900\nmax_price = 100\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPriceRange { min: 900, max: 100 }));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = StorefrontConfig::from_toml_str("[catalog\ndelay_ms = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = StorefrontConfig::load("/nonexistent/storefront.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
