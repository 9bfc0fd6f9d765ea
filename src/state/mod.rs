//! Application state for the lazyinvoice TUI.
//!
//! The state is decomposed by concern:
//!
//! - [`View`] - the closed set of screens and their loader contracts
//! - [`LoadState`] - per-view data/loading/error lifecycle
//! - [`ClientForm`] / [`InvoiceForm`] - drafts and submission flags
//! - [`App`] - the single state owner tying it all together
//!
//! # Architecture
//!
//! The `App` is the only writer of its state. Background work (health
//! probes, view loads, create submissions, the post-submit redirect delay)
//! runs in spawned tokio tasks that complete into an [`AppMessage`] sent
//! over an unbounded mpsc channel; the main loop drains the channel every
//! tick and applies each message as a pure state transition. Tasks never
//! hold references into `App` - they own a cloned [`ApiClient`] and a
//! sender handle, nothing else.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::ApiClient;
use crate::domain::{Client, ConnectivityState, HealthStatus, Invoice};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_actions;
mod app_lifecycle;
mod app_messages;

pub mod form;
pub mod load;
pub mod view;

// ============================================================================
// Re-exports
// ============================================================================

pub use form::{ClientForm, InvoiceForm};
pub use load::LoadState;
pub use view::{DataRequirement, View};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main app loop.
///
/// Load completions carry the request token issued by
/// [`LoadState::begin`]; stale tokens are dropped on application.
#[derive(Debug)]
pub enum AppMessage {
    /// A health probe resolved.
    HealthChecked(Result<HealthStatus, String>),
    /// The clients list fetch resolved.
    ClientsLoaded {
        seq: u64,
        result: Result<Vec<Client>, String>,
    },
    /// The invoices list fetch resolved.
    InvoicesLoaded {
        seq: u64,
        result: Result<Vec<Invoice>, String>,
    },
    /// The dashboard's joined fetch resolved (all-or-nothing).
    DashboardLoaded {
        seq: u64,
        result: Result<DashboardData, String>,
    },
    /// The create-client submission resolved.
    ClientCreated(Result<Client, String>),
    /// The create-invoice submission resolved.
    InvoiceCreated(Result<Invoice, String>),
    /// The post-submit redirect delay elapsed.
    RedirectDue(View),
}

// ============================================================================
// Data State
// ============================================================================

/// Payload of the dashboard's joined fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub clients: Vec<Client>,
    pub invoices: Vec<Invoice>,
}

/// Per-view load states. Each view owns its slot exclusively and reloads
/// independently; there is no cross-view caching.
#[derive(Debug, Default)]
pub struct DataState {
    pub clients: LoadState<Vec<Client>>,
    pub invoices: LoadState<Vec<Invoice>>,
    pub dashboard: LoadState<DashboardData>,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container and single source of truth for
/// what is rendered.
#[derive(Debug)]
pub struct App {
    /// The current view. Written only by [`App::navigate`].
    view: View,

    /// Backend reachability from the periodic health probe.
    pub connectivity: ConnectivityState,

    /// Last successfully decoded health payload, for the header line.
    pub health: Option<HealthStatus>,

    /// Per-view load states.
    pub data: DataState,

    /// Create-client draft and submission flags.
    pub client_form: ClientForm,

    /// Create-invoice draft and submission flags.
    pub invoice_form: InvoiceForm,

    /// Whether the application should exit.
    pub exit: bool,

    // ========================================================================
    // Async Communication
    // ========================================================================
    // Channel sends use `let _ = tx.send(...)`: the receiver may be dropped
    // during shutdown and those errors must not propagate.
    /// Sender for app messages (cloned into background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages, drained by the main loop.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    // ========================================================================
    // Backend Client
    // ========================================================================
    /// API client for backend requests.
    pub(crate) client: ApiClient,

    // ========================================================================
    // Owned Timers
    // ========================================================================
    /// Handle of the recurring health probe task; aborted on teardown.
    pub(crate) health_task: Option<JoinHandle<()>>,

    /// Handle of the pending post-submit redirect; aborted on teardown or
    /// when a manual navigation supersedes it.
    pub(crate) redirect_task: Option<JoinHandle<()>>,
}

impl App {
    /// The currently presented view.
    #[must_use]
    pub fn current_view(&self) -> View {
        self.view
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
