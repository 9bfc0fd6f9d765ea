//! Client list table.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Cell, Row, Table},
};

use crate::state::App;
use crate::theme::{MUTED_COLOR, SUCCESS_COLOR, TABLE_HEADER_STYLE};
use crate::ui::helpers::{bordered_block, format_date, or_dash};

use super::{render_empty_state, render_load_banner};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let load = &app.data.clients;
    render_load_banner(frame, chunks[0], load.is_loading(), load.error());

    let block = bordered_block("Clients", true);
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let clients = load.data();
    if clients.is_empty() {
        if !load.is_loading() {
            render_empty_state(frame, inner, "No clients found. Create your first client!");
        }
        return;
    }

    let header = Row::new(vec!["Name", "Company", "Email", "Phone", "Status", "Created"])
        .style(TABLE_HEADER_STYLE);

    let rows = clients.iter().map(|client| {
        let (status, status_color) = if client.is_active {
            ("Active", SUCCESS_COLOR)
        } else {
            ("Inactive", MUTED_COLOR)
        };
        Row::new(vec![
            Cell::from(client.name.clone()),
            Cell::from(or_dash(client.company_name.as_deref()).to_string()),
            Cell::from(or_dash(client.email.as_deref()).to_string()),
            Cell::from(or_dash(client.phone.as_deref()).to_string()),
            Cell::from(status).style(Style::default().fg(status_color)),
            Cell::from(format_date(&client.created_at)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Min(14),
            Constraint::Min(18),
            Constraint::Min(12),
            Constraint::Length(8),
            Constraint::Length(11),
        ],
    )
    .header(header)
    .column_spacing(1);

    frame.render_widget(table, inner);
}
