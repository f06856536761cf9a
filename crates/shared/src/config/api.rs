use anyhow::{Context, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the storefront REST backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn init() -> Result<Self> {
        let base_url = std::env::var("STOREFRONT_API_URL")
            .context("Missing environment variable: STOREFRONT_API_URL")?;

        let timeout_secs = match std::env::var("STOREFRONT_API_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("STOREFRONT_API_TIMEOUT_SECS must be a valid u64 integer")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout_secs,
        })
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Joins a relative path onto the configured base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_duplicate_slashes() {
        let config = ApiConfig::new("http://localhost:8080/");
        assert_eq!(
            config.endpoint("/api/products"),
            "http://localhost:8080/api/products"
        );
        assert_eq!(
            config.endpoint("api/cart"),
            "http://localhost:8080/api/cart"
        );
    }

    #[test]
    fn test_default_timeout() {
        let config = ApiConfig::new("http://localhost:8080");
        assert_eq!(config.timeout_secs, 30);
    }
}
