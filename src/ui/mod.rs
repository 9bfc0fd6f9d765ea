//! UI rendering: the main entry point plus the per-view renderers.
//!
//! This layer only reads state; every mutation goes through the key
//! handler and the app's own methods.

pub mod footer;
pub mod header;
pub mod helpers;
pub mod views;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::state::{App, View};

/// Height of the header bar including its border.
const HEADER_HEIGHT: u16 = 3;

/// Main render function: header, current view, footer.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(size);

    header::render(frame, chunks[0], app);
    render_current_view(app, frame, chunks[1]);
    footer::render(frame, chunks[2], app);
}

fn render_current_view(app: &App, frame: &mut Frame, area: ratatui::layout::Rect) {
    match app.current_view() {
        View::Dashboard => views::dashboard::render(frame, area, app),
        View::Clients => views::clients::render(frame, area, app),
        View::Invoices => views::invoices::render(frame, area, app),
        View::CreateClient => views::client_form::render(frame, area, app),
        View::CreateInvoice => views::invoice_form::render(frame, area, app),
    }
}
