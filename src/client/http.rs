//! Base HTTP client wrapper around reqwest.

use std::time::Duration;

use reqwest::Client;

use crate::constants::HTTP_TIMEOUT;

/// Thin wrapper owning the reqwest client and the backend base URL.
///
/// All requests are JSON; the base URL already carries the `/api` prefix.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        // Pooled connections keep the 30s probe cadence cheap
        let inner = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(HTTP_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            inner,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The configured base URL, without a trailing slash.
    #[must_use]
    #[allow(dead_code)] // Part of the client API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a GET request for an endpoint path (e.g. `/clients`).
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.inner
            .get(self.url(path))
            .header("accept", "application/json")
    }

    /// Build a POST request for an endpoint path.
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.inner
            .post(self.url(path))
            .header("accept", "application/json")
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let http = HttpClient::new("http://localhost:8000/api/");
        assert_eq!(http.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_url_joins_path() {
        let http = HttpClient::new("http://localhost:8000/api");
        assert_eq!(http.url("/clients"), "http://localhost:8000/api/clients");
    }
}
