//! Timing constants and application defaults.

use std::time::Duration;

/// Default backend base URL, including the `/api` prefix.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// How often the health probe runs after the immediate first probe.
pub const HEALTH_CHECK_INTERVAL: Duration = Duration::from_secs(30);

/// Delay between a successful create and the redirect back to the list.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// UI tick rate; messages are drained and the frame redrawn at this cadence.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Timeout applied to every backend request.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Rows shown in the dashboard's recent-clients / recent-invoices panels.
pub const DASHBOARD_RECENT_ROWS: usize = 5;
