//! Client configuration
//!
//! Everything has a working default. The API root can be overridden from
//! the environment; the remaining settings are set in code.

use std::time::Duration;

use catalog_core::{CatalogError, CatalogResult};
use tracing::info;

/// Public Rick and Morty API
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How long a fetched character stays cached, in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Maximum number of cached characters
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Environment variable overriding the API root
pub const ENV_BASE_URL: &str = "CATALOG_API_BASE_URL";

/// Settings for [`crate::CatalogClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without a trailing slash
    pub base_url: String,
    pub timeout: Duration,
    pub cache_ttl: Duration,
    pub cache_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl ClientConfig {
    /// Load from the process environment
    pub fn from_env() -> CatalogResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables. Only the API root is
    /// environment-driven; everything else keeps its default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CatalogResult<Self> {
        let base_url = match lookup(ENV_BASE_URL) {
            Some(raw) => raw,
            None => {
                info!("{ENV_BASE_URL} not set, using default: {DEFAULT_BASE_URL}");
                DEFAULT_BASE_URL.to_string()
            }
        };

        let config = Self::default().with_base_url(base_url);
        config.validate()?;
        Ok(config)
    }

    /// Use a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().trim_end_matches('/').to_string();
        self
    }

    /// Use a different request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Keep cached characters for `ttl`
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Cache at most `capacity` characters
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Check the values make sense together
    pub fn validate(&self) -> CatalogResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(CatalogError::invalid_config(format!(
                "{ENV_BASE_URL} must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(CatalogError::invalid_config(
                "request timeout must be greater than zero",
            ));
        }
        if self.cache_capacity == 0 {
            return Err(CatalogError::invalid_config(
                "cache capacity must be greater than zero",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn test_base_url_override() {
        let config = ClientConfig::from_lookup(lookup_from(&[(
            ENV_BASE_URL,
            "http://localhost:9000/api/",
        )]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:9000/api");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.cache_ttl, Duration::from_secs(DEFAULT_CACHE_TTL_SECS));
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_only_base_url_is_read_from_environment() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("CATALOG_HTTP_TIMEOUT_SECS", "5"),
            ("CATALOG_CACHE_TTL_SECS", "7"),
            ("CATALOG_CACHE_CAPACITY", "16"),
        ]))
        .unwrap();

        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_builder_setters() {
        let config = ClientConfig::default()
            .with_timeout(Duration::from_secs(5))
            .with_cache_ttl(Duration::from_secs(60))
            .with_cache_capacity(16);

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.cache_capacity, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_base_url_is_invalid_config() {
        let err = ClientConfig::from_lookup(lookup_from(&[(ENV_BASE_URL, "not a url")]))
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidConfig(_)));
        assert!(err.to_string().contains(ENV_BASE_URL));
    }

    #[test]
    fn test_non_http_base_url_rejected() {
        let err = ClientConfig::from_lookup(lookup_from(&[(ENV_BASE_URL, "ftp://example.com")]))
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = ClientConfig::default().with_cache_capacity(0);
        assert!(config.validate().is_err());
    }
}
