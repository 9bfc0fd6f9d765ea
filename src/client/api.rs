//! Typed request functions for the invoicing backend.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::HttpClient;
use crate::domain::{ApiError, Client, ClientDraft, HealthStatus, Invoice, InvoiceDraft};

/// Client for the invoicing REST API.
///
/// Cheap to clone; background tasks receive their own copy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `http://localhost:8000/api`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(base_url),
        }
    }

    /// The configured base URL.
    #[must_use]
    #[allow(dead_code)] // Part of the client API
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// Probe backend health.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers non-2xx,
    /// or the payload does not decode.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/health").await
    }

    // ========================================================================
    // Clients
    // ========================================================================

    /// Fetch all clients.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not decode.
    pub async fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        self.get_json("/clients").await
    }

    /// Fetch a single client by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not decode.
    #[allow(dead_code)] // Part of the backend surface, no view needs it yet
    pub async fn get_client(&self, id: i64) -> Result<Client, ApiError> {
        self.get_json(&format!("/clients/{id}")).await
    }

    /// Create a client from a draft; returns the created record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not decode.
    pub async fn create_client(&self, draft: &ClientDraft) -> Result<Client, ApiError> {
        self.post_json("/clients", draft).await
    }

    // ========================================================================
    // Invoices
    // ========================================================================

    /// Fetch all invoices.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not decode.
    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        self.get_json("/invoices").await
    }

    /// Fetch a single invoice by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not decode.
    #[allow(dead_code)] // Part of the backend surface, no view needs it yet
    pub async fn get_invoice(&self, id: i64) -> Result<Invoice, ApiError> {
        self.get_json(&format!("/invoices/{id}")).await
    }

    /// Create an invoice from a draft; returns the created record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not decode.
    pub async fn create_invoice(&self, draft: &InvoiceDraft) -> Result<Invoice, ApiError> {
        self.post_json("/invoices", draft).await
    }

    // ========================================================================
    // Request plumbing
    // ========================================================================

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(path)
            .send()
            .await
            .inspect_err(|e| tracing::debug!("GET {path} failed: {e}"))
            .map_err(ApiError::Network)?;

        Self::decode(path, response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(path)
            .json(body)
            .send()
            .await
            .inspect_err(|e| tracing::debug!("POST {path} failed: {e}"))
            .map_err(ApiError::Network)?;

        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{path} returned HTTP {status}");
            return Err(ApiError::Http { status });
        }

        response
            .json::<T>()
            .await
            .inspect_err(|e| tracing::debug!("{path} JSON decode error: {e}"))
            .map_err(ApiError::Decode)
    }
}

// ============================================================================
// Tests
// ============================================================================
