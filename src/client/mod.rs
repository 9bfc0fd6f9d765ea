//! HTTP data access layer for the invoicing backend.
//!
//! One typed request function per backend operation; each performs exactly
//! one HTTP call and returns a decoded payload or an [`ApiError`].

pub mod api;
pub mod http;

pub use api::ApiClient;
pub use http::HttpClient;
