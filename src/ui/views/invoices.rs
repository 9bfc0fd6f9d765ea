//! Invoice list table.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Cell, Row, Table},
};

use crate::domain::InvoiceStatus;
use crate::state::App;
use crate::theme::{ERROR_COLOR, INFO_COLOR, MUTED_COLOR, SUCCESS_COLOR, TABLE_HEADER_STYLE};
use crate::ui::helpers::{bordered_block, format_amount, format_date, or_dash};

use super::{render_empty_state, render_load_banner};

/// Chip color for an invoice status.
pub fn status_color(status: &InvoiceStatus) -> Color {
    match status {
        InvoiceStatus::Paid => SUCCESS_COLOR,
        InvoiceStatus::Sent => INFO_COLOR,
        InvoiceStatus::Overdue => ERROR_COLOR,
        InvoiceStatus::Draft | InvoiceStatus::Other(_) => MUTED_COLOR,
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let load = &app.data.invoices;
    render_load_banner(frame, chunks[0], load.is_loading(), load.error());

    let block = bordered_block("Invoices", true);
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let invoices = load.data();
    if invoices.is_empty() {
        if !load.is_loading() {
            render_empty_state(frame, inner, "No invoices found. Create your first invoice!");
        }
        return;
    }

    let header = Row::new(vec!["Invoice #", "Status", "Amount", "Due Date", "Created"])
        .style(TABLE_HEADER_STYLE);

    let rows = invoices.iter().map(|invoice| {
        Row::new(vec![
            Cell::from(format!("#{}", invoice.invoice_number)),
            Cell::from(invoice.status.as_str().to_uppercase())
                .style(Style::default().fg(status_color(&invoice.status))),
            Cell::from(format_amount(invoice.total_amount)),
            Cell::from(
                invoice
                    .due_date
                    .as_deref()
                    .map(format_date)
                    .unwrap_or_else(|| or_dash(None).to_string()),
            ),
            Cell::from(format_date(&invoice.created_at)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(12),
            Constraint::Length(9),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(11),
        ],
    )
    .header(header)
    .column_spacing(1);

    frame.render_widget(table, inner);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors_match_severity() {
        assert_eq!(status_color(&InvoiceStatus::Paid), SUCCESS_COLOR);
        assert_eq!(status_color(&InvoiceStatus::Sent), INFO_COLOR);
        assert_eq!(status_color(&InvoiceStatus::Overdue), ERROR_COLOR);
        assert_eq!(status_color(&InvoiceStatus::Draft), MUTED_COLOR);
        assert_eq!(
            status_color(&InvoiceStatus::Other("void".to_string())),
            MUTED_COLOR
        );
    }
}
