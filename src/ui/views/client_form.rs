//! Create-client form.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::state::form::CLIENT_FORM_FIELDS;
use crate::theme::{ERROR_COLOR, FOCUSED_FIELD_STYLE, MUTED_COLOR, SUCCESS_COLOR};
use crate::ui::helpers::bordered_block;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    render_banner(frame, chunks[0], app);

    let block = bordered_block("Create New Client", true);
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let form = &app.client_form;
    let lines: Vec<Line> = CLIENT_FORM_FIELDS
        .iter()
        .enumerate()
        .map(|(i, label)| field_line(label, form.field(i), i == form.focus))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_banner(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.client_form;
    let line = if let Some(error) = &form.error {
        Line::styled(format!(" {error}"), Style::default().fg(ERROR_COLOR))
    } else if form.success {
        Line::styled(
            " Client created successfully! Redirecting...",
            Style::default().fg(SUCCESS_COLOR),
        )
    } else if form.submitting {
        Line::styled(" Creating...", Style::default().fg(MUTED_COLOR))
    } else {
        Line::raw("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

pub(super) fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        FOCUSED_FIELD_STYLE
    } else {
        Style::default().fg(MUTED_COLOR)
    };
    let mut spans = vec![
        Span::styled(format!(" {label:<22}"), label_style),
        Span::raw(value),
    ];
    if focused {
        spans.push(Span::styled("█", FOCUSED_FIELD_STYLE));
    }
    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================
