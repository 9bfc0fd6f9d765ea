//! Domain types shared across the application.
//!
//! Everything the backend speaks JSON about lives here: clients, invoices,
//! the health payload, and the error taxonomy for failed requests.

mod client;
mod error;
mod health;
mod invoice;

pub use client::{Client, ClientDraft};
pub use error::ApiError;
pub use health::{ConnectivityState, HealthStatus};
pub use invoice::{Invoice, InvoiceDraft, InvoiceItem, InvoiceStatus};
