//! Summary panel: income/expenses/net stat cells and the status pill.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::domain::{PeriodicSummary, status_color};
use crate::state::App;
use crate::theme::{ERROR_COLOR, MUTED_COLOR, SECONDARY_COLOR, SUCCESS_COLOR};
use crate::ui::helpers::create_border_block;

/// Render the summary panel for the selected period.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block(app.ui.summary_period.label(), false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    render_status_pill(frame, area, app);

    if app.data.loading.summary {
        let loading = Paragraph::new("Loading summary...")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center);
        frame.render_widget(loading, inner);
        return;
    }

    let Some(summary) = app.data.summary_for(app.ui.summary_period) else {
        let missing = Paragraph::new("Could not load summary data.")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center);
        frame.render_widget(missing, inner);
        return;
    };

    render_stat_cells(frame, inner, summary);
}

/// The three stat cells, side by side.
fn render_stat_cells(frame: &mut Frame, area: Rect, summary: &PeriodicSummary) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let stats = [
        ("Total Income", summary.income_display(), SUCCESS_COLOR),
        ("Total Expenses", summary.expenses_display(), ERROR_COLOR),
        ("Net Amount", summary.net_display(), SECONDARY_COLOR),
    ];

    for ((label, value, color), cell) in stats.into_iter().zip(cells.iter()) {
        let lines = vec![
            Line::from(Span::styled(label, Style::default().fg(MUTED_COLOR))),
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, *cell);
    }
}

/// The financial status pill in the panel's top-right corner.
fn render_status_pill(frame: &mut Frame, area: Rect, app: &App) {
    if area.width < 30 {
        return;
    }

    let pill = if app.data.loading.status {
        Span::styled("Loading status...", Style::default().fg(MUTED_COLOR))
    } else if let Some(status) = app.data.financial_status.as_deref() {
        Span::styled(
            format!("[ {status} ]"),
            Style::default()
                .fg(status_color(status))
                .add_modifier(Modifier::BOLD),
        )
    } else {
        return;
    };

    let width = (pill.content.chars().count() as u16).min(area.width.saturating_sub(4));
    let pill_area = Rect::new(area.right().saturating_sub(width + 2), area.y, width, 1);
    frame.render_widget(Paragraph::new(Line::from(pill)), pill_area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::create_test_app;
    use crate::state::{AppMessage, LoadedBatch};
    use crate::test_utils::{buffer_to_string, loaded_batch};
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_string(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 6)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn shows_loading_state_while_the_flag_is_up() {
        let mut app = create_test_app();
        app.data.begin_loading();

        let content = render_to_string(&app);
        assert!(content.contains("Loading summary..."));
    }

    #[test]
    fn renders_totals_and_status_pill() {
        let mut app = create_test_app();
        app.process_message(AppMessage::BatchLoaded(Box::new(loaded_batch())));

        let content = render_to_string(&app);
        assert!(content.contains("Current Month Summary"));
        assert!(content.contains("Total Income"));
        assert!(content.contains("$1250.00"));
        assert!(content.contains("$450.00"));
        assert!(content.contains("$800.00"));
        assert!(content.contains("[ Positive balance ]"));
    }

    #[test]
    fn yearly_view_uses_the_yearly_summary() {
        let mut app = create_test_app();
        let batch: LoadedBatch = loaded_batch();
        app.process_message(AppMessage::BatchLoaded(Box::new(batch)));
        app.ui.summary_period = app.ui.summary_period.toggled();

        let content = render_to_string(&app);
        assert!(content.contains("Current Year Summary"));
        assert!(content.contains("$15000.00"));
    }

    #[test]
    fn missing_summary_shows_a_placeholder() {
        let app = create_test_app();
        let content = render_to_string(&app);
        assert!(content.contains("Could not load summary data."));
    }
}
