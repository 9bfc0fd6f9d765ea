//! Create-invoice form.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::state::App;
use crate::state::form::INVOICE_FORM_FIELDS;
use crate::theme::{ERROR_COLOR, MUTED_COLOR, SUCCESS_COLOR};
use crate::ui::helpers::bordered_block;

use super::client_form::field_line;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    render_banner(frame, chunks[0], app);

    let block = bordered_block("Create New Invoice", true);
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let form = &app.invoice_form;
    let lines: Vec<Line> = INVOICE_FORM_FIELDS
        .iter()
        .enumerate()
        .map(|(i, label)| field_line(label, form.field(i), i == form.focus))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_banner(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.invoice_form;
    let line = if let Some(error) = &form.error {
        Line::styled(format!(" {error}"), Style::default().fg(ERROR_COLOR))
    } else if form.success {
        Line::styled(
            " Invoice created successfully! Redirecting...",
            Style::default().fg(SUCCESS_COLOR),
        )
    } else if form.submitting {
        Line::styled(" Creating...", Style::default().fg(MUTED_COLOR))
    } else {
        Line::raw("")
    };
    frame.render_widget(Paragraph::new(line), area);
}
