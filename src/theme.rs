//! Styling constants shared by the UI layer.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning indicator color (offline banner, overdue rows).
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Informational accent (sent invoices).
pub const INFO_COLOR: Color = Color::Blue;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for the active view's block.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Style for table header rows.
pub const TABLE_HEADER_STYLE: Style = Style::new()
    .fg(PRIMARY_COLOR)
    .add_modifier(Modifier::BOLD);

/// Style for the focused form field.
pub const FOCUSED_FIELD_STYLE: Style = Style::new()
    .fg(PRIMARY_COLOR)
    .add_modifier(Modifier::BOLD);
