//! Backend health payload and the derived connectivity state.

use serde::{Deserialize, Serialize};

/// Payload of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// Backend reachability as observed by the periodic health probe.
///
/// Starts at `Checking` and moves to `Online`/`Offline` when the first
/// probe resolves; it never returns to `Checking` afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityState {
    #[default]
    Checking,
    Online,
    Offline,
}

impl ConnectivityState {
    /// Header label for the indicator.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Checking => "CHECKING",
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
        }
    }

    /// Returns `true` once the first probe has resolved either way.
    #[must_use]
    #[allow(dead_code)] // Part of the connectivity API
    pub const fn is_settled(self) -> bool {
        !matches!(self, Self::Checking)
    }
}

// ============================================================================
// Tests
// ============================================================================
