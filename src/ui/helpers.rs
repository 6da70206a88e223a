//! UI helper functions for creating styled blocks.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE};

/// Creates a bordered block, styled by whether the element is active.
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'_> {
    let (border_style, title_style) = if focused {
        (FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE)
    } else {
        (
            BORDER_STYLE,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    };

    let display_title = if title.is_empty() {
        String::new()
    } else {
        format!(" {title} ")
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border::ROUNDED)
        .border_style(border_style)
}

/// Creates a popup-style block with a centered title.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(FOCUSED_BORDER_STYLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn blocks_render_their_titles() {
        let mut terminal = Terminal::new(TestBackend::new(40, 9)).unwrap();

        terminal
            .draw(|frame| {
                let areas = ratatui::layout::Layout::default()
                    .constraints([
                        ratatui::layout::Constraint::Length(3),
                        ratatui::layout::Constraint::Length(3),
                        ratatui::layout::Constraint::Length(3),
                    ])
                    .split(frame.area());

                frame.render_widget(create_border_block("Transactions", false), areas[0]);
                frame.render_widget(create_border_block("Summary", true), areas[1]);
                frame.render_widget(create_popup_block("Add Transaction"), areas[2]);
            })
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("Transactions"));
        assert!(content.contains("Summary"));
        assert!(content.contains("Add Transaction"));
    }
}
