use std::env;

/// Used when [`API_URL_VAR`] is unset, matching the backend's dev default.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

const API_URL_VAR: &str = "ROOMCRAFT_API_URL";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    /// Read the API base URL from the environment, honoring a `.env` file.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let base_url =
            env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_trimmed() {
        let config = ClientConfig::with_base_url("http://example.com/api///");
        assert_eq!(config.base_url, "http://example.com/api");
    }

    #[test]
    fn test_plain_url_untouched() {
        let config = ClientConfig::with_base_url(DEFAULT_API_URL);
        assert_eq!(config.base_url, "http://localhost:5000/api");
    }
}
