//! Footer bar with per-view key hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::Paragraph,
};

use crate::state::{App, View};
use crate::theme::MUTED_COLOR;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.current_view() {
        View::Dashboard | View::Clients | View::Invoices => {
            " q quit | d dashboard | c clients | i invoices | n new | r refresh"
        }
        View::CreateClient | View::CreateInvoice => {
            " Esc back | Tab/Shift-Tab move | Enter submit"
        }
    };

    let footer = Paragraph::new(hints).style(Style::default().fg(MUTED_COLOR));
    frame.render_widget(footer, area);
}
