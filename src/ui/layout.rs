//! Layout calculations for the LazyLedger TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Constants
// ============================================================================

/// Height of the header area in terminal rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the summary panel (three stat cells plus borders).
pub const SUMMARY_HEIGHT: u16 = 6;

/// Height of the inline notice line between summary and table.
pub const NOTICE_HEIGHT: u16 = 1;

/// Height of the footer area in terminal rows.
pub const FOOTER_HEIGHT: u16 = 1;

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Header area (title, API endpoint).
    pub header: Rect,
    /// Summary panel (stat cells, status pill).
    pub summary: Rect,
    /// Inline notice line (batch error).
    pub notice: Rect,
    /// Transaction table area.
    pub content: Rect,
    /// Footer area (keybinding hints).
    pub footer: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area.
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SUMMARY_HEIGHT),
            Constraint::Length(NOTICE_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        summary: chunks[1],
        notice: chunks[2],
        content: chunks[3],
        footer: chunks[4],
    }
}

/// Calculate a centered popup area within a parent area.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(2));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_layout_partitions_the_full_height() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_app_layout(area);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.summary.height, SUMMARY_HEIGHT);
        assert_eq!(layout.notice.height, NOTICE_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(
            layout.content.height,
            40 - HEADER_HEIGHT - SUMMARY_HEIGHT - NOTICE_HEIGHT - FOOTER_HEIGHT
        );
    }

    #[test]
    fn popup_is_centered() {
        let parent = Rect::new(0, 0, 100, 50);
        let popup = centered_popup_area(parent, 40, 20);

        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
    }

    #[test]
    fn popup_is_clamped_to_small_terminals() {
        let parent = Rect::new(0, 0, 30, 10);
        let popup = centered_popup_area(parent, 100, 50);

        assert!(popup.width <= parent.width - 4);
        assert!(popup.height <= parent.height - 2);
    }
}
