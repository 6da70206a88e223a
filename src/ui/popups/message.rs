//! Message/notification popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::MUTED_COLOR;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

/// Render a blocking notification on top of everything else.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let width = (message.chars().count() as u16 + 6).clamp(24, 60);
    let popup_area = centered_popup_area(area, width, 6);
    let popup_block = create_popup_block("Notice");

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner = popup_block.inner(popup_area);
    let body = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::styled("Enter/Esc: Dismiss", Style::default().fg(MUTED_COLOR)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(body, inner);
}
