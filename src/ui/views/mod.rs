//! Per-view renderers.

pub mod client_form;
pub mod clients;
pub mod dashboard;
pub mod invoice_form;
pub mod invoices;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::theme::{ERROR_COLOR, MUTED_COLOR};

/// One-line load status above a list: the error banner when the last fetch
/// failed, a loading hint while one is in flight, otherwise blank. The data
/// below stays rendered either way.
pub(super) fn render_load_banner(
    frame: &mut Frame,
    area: Rect,
    loading: bool,
    error: Option<&str>,
) {
    let line = if let Some(message) = error {
        Line::styled(format!(" {message}"), Style::default().fg(ERROR_COLOR))
    } else if loading {
        Line::styled(" Loading...", Style::default().fg(MUTED_COLOR))
    } else {
        Line::raw("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Centered empty-state message inside an already-rendered block.
pub(super) fn render_empty_state(frame: &mut Frame, area: Rect, message: &str) {
    if area.height == 0 {
        return;
    }
    let centered = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
        centered,
    );
}
