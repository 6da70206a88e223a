//! Header rendering: application title and the resolved API endpoint.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::MUTED_COLOR;

use super::helpers::create_border_block;

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let title = Line::from(vec![
        "[".into(),
        "lazy".green().bold(),
        "ledger".blue().bold(),
        "]".into(),
    ]);
    let title_paragraph = Paragraph::new(title).alignment(Alignment::Left);

    let title_area = Rect::new(
        area.x + 2,
        area.y + 1,
        14.min(area.width.saturating_sub(2)),
        1,
    );
    frame.render_widget(title_paragraph, title_area);

    // API endpoint on the right, when there is room
    if area.width > 40 {
        let endpoint = Paragraph::new(app.config.base_url.as_str())
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Right);

        let width = (app.config.base_url.len() as u16).min(area.width.saturating_sub(20));
        let endpoint_area = Rect::new(area.right().saturating_sub(width + 2), area.y + 1, width, 1);
        frame.render_widget(endpoint, endpoint_area);
    }
}
