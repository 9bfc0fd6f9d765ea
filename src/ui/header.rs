//! Header bar: logo, current view title, connectivity indicator.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::domain::ConnectivityState;
use crate::state::App;
use crate::theme::{MUTED_COLOR, SUCCESS_COLOR, WARNING_COLOR};

use super::helpers::bordered_block;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = bordered_block("", false);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let logo = Line::from(vec![
        "[".into(),
        "lazy".green().bold(),
        "invoice".cyan().bold(),
        "]".into(),
        Span::raw("  "),
        Span::styled(
            app.current_view().title(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    let title_area = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        1,
    );
    frame.render_widget(Paragraph::new(logo).alignment(Alignment::Left), title_area);

    if area.width > 30 {
        render_status_indicator(frame, area, app.connectivity);
    }
}

/// Right-aligned backend indicator. Offline is a warning, never an error
/// popup - the rest of the app keeps working on whatever data it has.
fn render_status_indicator(frame: &mut Frame, area: Rect, connectivity: ConnectivityState) {
    let style = match connectivity {
        ConnectivityState::Checking => Style::default().fg(MUTED_COLOR),
        ConnectivityState::Online => Style::default().fg(SUCCESS_COLOR),
        ConnectivityState::Offline => Style::default()
            .fg(WARNING_COLOR)
            .add_modifier(Modifier::BOLD),
    };

    let label = Paragraph::new(format!("● {}", connectivity.label()))
        .style(style)
        .alignment(Alignment::Right);

    let width = 14.min(area.width.saturating_sub(4));
    let status_area = Rect::new(
        area.right().saturating_sub(width + 2),
        area.y + 1,
        width,
        1,
    );
    frame.render_widget(label, status_area);
}
