//! Footer rendering: keyboard shortcut hints.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::MUTED_COLOR;

/// Renders the footer bar with keyboard shortcuts for the active context.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer_text = if app.ui.is_form_open() {
        "Enter:Save  Tab/Down:Next  Up:Prev  Left/Right:Change  Esc:Cancel"
    } else {
        "q:Quit  r:Reload  a:Add Transaction  v:Month/Year  Up/Down:Select"
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
