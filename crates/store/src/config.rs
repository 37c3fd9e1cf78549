//! Store configuration.

use reqwest::Url;
use thiserror::Error;

/// Environment variable holding the catalog service base URL.
pub const API_URL_VAR: &str = "GROCER_API_URL";

/// Base URL used when [`API_URL_VAR`] is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API URL {0:?}: {1}")]
    InvalidUrl(String, String),
    #[error("unsupported API URL scheme {0:?} (expected http or https)")]
    UnsupportedScheme(String),
}

/// Where the remote catalog lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    api_url: Url,
}

impl StoreConfig {
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(api_url.trim())
            .map_err(|e| ConfigError::InvalidUrl(api_url.to_string(), e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }

        Ok(Self { api_url: url })
    }

    /// Read the base URL from `GROCER_API_URL`, falling back to
    /// `http://localhost:3000`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = std::env::var(API_URL_VAR).unwrap_or_else(|_| {
            tracing::info!("{API_URL_VAR} not set, using default: {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_string()
        });
        Self::new(&api_url)
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// URL of `segments` below the base, e.g. `["products", "7"]`.
    ///
    /// Segments are percent-encoded; a trailing slash on the base is ignored.
    pub fn endpoint<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.api_url.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_segments_under_the_base() {
        let config = StoreConfig::new("http://localhost:3000").unwrap();
        assert_eq!(
            config.endpoint(["products"]).as_str(),
            "http://localhost:3000/products"
        );

        let nested = StoreConfig::new("https://api.example.com/v1/").unwrap();
        assert_eq!(
            nested.endpoint(["products", "12"]).as_str(),
            "https://api.example.com/v1/products/12"
        );
    }

    #[test]
    fn endpoint_encodes_textual_ids() {
        let config = StoreConfig::new(DEFAULT_API_URL).unwrap();
        assert_eq!(
            config.endpoint(["products", "a b/c"]).as_str(),
            "http://localhost:3000/products/a%20b%2Fc"
        );
    }

    #[test]
    fn rejects_malformed_and_non_http_urls() {
        assert!(matches!(
            StoreConfig::new("not a url"),
            Err(ConfigError::InvalidUrl(..))
        ));
        assert!(matches!(
            StoreConfig::new("ftp://example.com"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            StoreConfig::new("mailto:shop@example.com"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }
}
