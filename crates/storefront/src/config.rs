//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STORE_API_URL` - Catalog service base URL (default: <https://api.escuelajs.co/api/v1>)
//! - `STORE_DATA_DIR` - Directory holding the persisted cart (default: `.product-store`)
//! - `STORE_CACHE_TTL_SECS` - Catalog response cache lifetime (default: 300)
//! - `STORE_HTTP_TIMEOUT_SECS` - Catalog request timeout (default: 10)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "https://api.escuelajs.co/api/v1";
const DEFAULT_DATA_DIR: &str = ".product-store";
const DEFAULT_CACHE_TTL_SECS: &str = "300";
const DEFAULT_HTTP_TIMEOUT_SECS: &str = "10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Product store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Catalog service configuration
    pub catalog: CatalogConfig,
    /// Directory for locally persisted state (the cart)
    pub data_dir: PathBuf,
}

/// Remote catalog service configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL; `/products` and `/products/{id}` are resolved against it
    pub base_url: Url,
    /// How long fetched products stay cached
    pub cache_ttl: Duration,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog = CatalogConfig::from_env()?;
        let data_dir = PathBuf::from(get_env_or_default("STORE_DATA_DIR", DEFAULT_DATA_DIR));

        Ok(Self { catalog, data_dir })
    }
}

impl CatalogConfig {
    /// Create a catalog configuration with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `base_url` is not an http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("STORE_API_URL", base_url)?,
            cache_ttl: Duration::from_secs(300),
            request_timeout: Duration::from_secs(10),
        })
    }

    fn from_env() -> Result<Self, ConfigError> {
        let base_url = parse_base_url(
            "STORE_API_URL",
            &get_env_or_default("STORE_API_URL", DEFAULT_API_URL),
        )?;
        let cache_ttl = get_duration_secs("STORE_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?;
        let request_timeout =
            get_duration_secs("STORE_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;

        Ok(Self {
            base_url,
            cache_ttl,
            request_timeout,
        })
    }

    /// Replace the base URL, keeping the timeouts.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `base_url` is not an http(s) URL.
    pub fn with_base_url(self, base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("STORE_API_URL", base_url)?,
            ..self
        })
    }

    /// URL of the product list endpoint.
    #[must_use]
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url.as_str().trim_end_matches('/'))
    }

    /// URL of a single product endpoint.
    #[must_use]
    pub fn product_url(&self, id: product_store_core::ProductId) -> String {
        format!("{}/{id}", self.products_url())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a whole number of seconds as a `Duration`.
fn get_duration_secs(key: &str, default: &str) -> Result<Duration, ConfigError> {
    get_env_or_default(key, default)
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse and validate a service base URL.
fn parse_base_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use product_store_core::ProductId;

    use super::*;

    #[test]
    fn test_parse_base_url_rejects_non_http() {
        let result = parse_base_url("STORE_API_URL", "ftp://example.com/api");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(parse_base_url("STORE_API_URL", "not a url").is_err());
    }

    #[test]
    fn test_product_urls() {
        let config = CatalogConfig::new("https://api.example.com/api/v1/").unwrap();
        assert_eq!(
            config.products_url(),
            "https://api.example.com/api/v1/products"
        );
        assert_eq!(
            config.product_url(ProductId::new(4)),
            "https://api.example.com/api/v1/products/4"
        );
    }

    #[test]
    fn test_default_catalog_config() {
        let config = CatalogConfig::new(DEFAULT_API_URL).unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.escuelajs.co/api/v1");
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_with_base_url_keeps_timeouts() {
        let mut config = CatalogConfig::new(DEFAULT_API_URL).unwrap();
        config.request_timeout = Duration::from_secs(3);

        let config = config.with_base_url("http://localhost:8080/api/v1").unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/api/v1");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert!(config.with_base_url("file:///tmp").is_err());
    }

    #[test]
    fn test_get_duration_secs_default() {
        let ttl = get_duration_secs("STORE_TEST_UNSET_DURATION", "42").unwrap();
        assert_eq!(ttl, Duration::from_secs(42));
    }
}
