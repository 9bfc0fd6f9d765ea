//! Dashboard: stat cards plus recent invoices and clients.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::DASHBOARD_RECENT_ROWS;
use crate::domain::InvoiceStatus;
use crate::state::App;
use crate::theme::MUTED_COLOR;
use crate::ui::helpers::{bordered_block, format_amount, or_dash};

use super::{invoices::status_color, render_empty_state, render_load_banner};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(5),
        ])
        .split(area);

    let load = &app.data.dashboard;
    if load.is_loading() || load.error().is_some() {
        render_load_banner(frame, chunks[0], load.is_loading(), load.error());
    } else if let Some(health) = &app.health {
        let line = Line::styled(
            format!(" Backend Status: {} - {}", health.status, health.message),
            Style::default().fg(MUTED_COLOR),
        );
        frame.render_widget(Paragraph::new(line), chunks[0]);
    }

    render_stat_cards(frame, chunks[1], app);
    render_recent_panels(frame, chunks[2], app);
}

fn render_stat_cards(frame: &mut Frame, area: Rect, app: &App) {
    let data = app.data.dashboard.data();
    let paid = count_by_status(&data.invoices, &InvoiceStatus::Paid);
    let draft = count_by_status(&data.invoices, &InvoiceStatus::Draft);

    let cards = [
        ("Total Clients", data.clients.len()),
        ("Total Invoices", data.invoices.len()),
        ("Paid Invoices", paid),
        ("Draft Invoices", draft),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (i, (label, value)) in cards.iter().enumerate() {
        let block = bordered_block("", false);
        let inner = block.inner(columns[i]);
        frame.render_widget(block, columns[i]);
        let line = Line::from(vec![
            Span::styled(format!("{value} "), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(*label, Style::default().fg(MUTED_COLOR)),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), inner);
    }
}

fn render_recent_panels(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    let data = app.data.dashboard.data();

    // Recent invoices
    let block = bordered_block("Recent Invoices", false);
    let inner = block.inner(columns[0]);
    frame.render_widget(block, columns[0]);
    if data.invoices.is_empty() {
        render_empty_state(frame, inner, "No invoices yet");
    } else {
        let lines: Vec<Line> = data
            .invoices
            .iter()
            .take(DASHBOARD_RECENT_ROWS)
            .map(|invoice| {
                Line::from(vec![
                    Span::raw(format!("#{}  ", invoice.invoice_number)),
                    Span::styled(
                        invoice.status.as_str().to_string(),
                        Style::default().fg(status_color(&invoice.status)),
                    ),
                    Span::styled(
                        format!("  {}", format_amount(invoice.total_amount)),
                        Style::default().fg(MUTED_COLOR),
                    ),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    // Recent clients
    let block = bordered_block("Recent Clients", false);
    let inner = block.inner(columns[1]);
    frame.render_widget(block, columns[1]);
    if data.clients.is_empty() {
        render_empty_state(frame, inner, "No clients yet");
    } else {
        let lines: Vec<Line> = data
            .clients
            .iter()
            .take(DASHBOARD_RECENT_ROWS)
            .map(|client| {
                Line::from(vec![
                    Span::raw(client.name.clone()),
                    Span::styled(
                        format!("  {}", or_dash(client.company_name.as_deref())),
                        Style::default().fg(MUTED_COLOR),
                    ),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn count_by_status(invoices: &[crate::domain::Invoice], status: &InvoiceStatus) -> usize {
    invoices.iter().filter(|i| &i.status == status).count()
}

// ============================================================================
// Tests
// ============================================================================
