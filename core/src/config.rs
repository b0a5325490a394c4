//! Client configuration.

/// Base address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the store's base address.
pub const BASE_URL_ENV: &str = "CAMPUSTRADE_API_URL";

/// Where the product store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read [`BASE_URL_ENV`], falling back to [`DEFAULT_BASE_URL`] when it is
    /// unset or blank.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(BASE_URL_ENV) {
            Some(url) if !url.trim().is_empty() => Self {
                base_url: url.trim().to_string(),
            },
            _ => Self::default(),
        }
    }
}
