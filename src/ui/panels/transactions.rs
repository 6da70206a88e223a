//! Transaction table panel.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Text,
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use crate::domain::Transaction;
use crate::state::DataState;
use crate::theme::{MUTED_COLOR, SELECTED_STYLE};
use crate::ui::helpers::create_border_block;

/// Render the transaction table.
pub fn render(frame: &mut Frame, area: Rect, data: &DataState, table_state: &mut TableState) {
    let block = create_border_block("Transactions", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if data.loading.transactions {
        let loading = Paragraph::new("Loading transactions...")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center);
        frame.render_widget(loading, inner);
        return;
    }

    if data.transactions.is_empty() {
        let empty = Paragraph::new("No transactions found.")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let header = Row::new(["Date", "Description", "Category", "Type", "Amount"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows = data.transactions.iter().map(transaction_row);

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(16),
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .row_highlight_style(SELECTED_STYLE);

    frame.render_stateful_widget(table, inner, table_state);
}

fn transaction_row(txn: &Transaction) -> Row<'_> {
    Row::new([
        Cell::from(txn.date.as_str()),
        Cell::from(txn.description.as_deref().unwrap_or("-")),
        Cell::from(txn.category.as_str()),
        Cell::from(Text::styled(
            txn.kind.as_str(),
            Style::default().fg(MUTED_COLOR),
        )),
        Cell::from(
            Text::styled(txn.signed_amount(), Style::default().fg(txn.kind.color()))
                .alignment(Alignment::Right),
        ),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DataState;
    use crate::test_utils::{TransactionMother, buffer_to_string};
    use crate::theme::ERROR_COLOR;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_terminal(data: &DataState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        let mut table_state = TableState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), data, &mut table_state))
            .unwrap();
        terminal
    }

    #[test]
    fn expense_rows_render_signed_amounts_in_red() {
        let mut data = DataState::new();
        data.transactions = vec![TransactionMother::expense("1", 50.0, "Food")];

        let terminal = render_to_terminal(&data);
        let content = buffer_to_string(terminal.backend().buffer());

        assert!(content.contains("2024-01-05"));
        assert!(content.contains("Food"));
        assert!(content.contains("EXPENSE"));
        assert!(content.contains("-$50.00"));
        // Missing description renders as a dash placeholder
        assert!(content.contains(" - "));

        // The amount cell is painted with the expense color
        let buffer = terminal.backend().buffer();
        let position = content
            .lines()
            .enumerate()
            .find_map(|(y, line)| line.find("-$50.00").map(|x| (x as u16, y as u16)))
            .expect("amount should be rendered");
        assert_eq!(buffer[position].style().fg, Some(ERROR_COLOR));
    }

    #[test]
    fn income_rows_render_with_a_plus_sign() {
        let mut data = DataState::new();
        data.transactions = vec![TransactionMother::with_description(
            TransactionMother::income("2", 1200.0, "Salary"),
            "January payout",
        )];

        let content = buffer_to_string(render_to_terminal(&data).backend().buffer());
        assert!(content.contains("+$1200.00"));
        assert!(content.contains("January payout"));
        assert!(content.contains("INCOME"));
    }

    #[test]
    fn loading_state_takes_precedence() {
        let mut data = DataState::new();
        data.transactions = vec![TransactionMother::expense("1", 50.0, "Food")];
        data.begin_loading();

        let content = buffer_to_string(render_to_terminal(&data).backend().buffer());
        assert!(content.contains("Loading transactions..."));
        assert!(!content.contains("-$50.00"));
    }

    #[test]
    fn empty_ledger_shows_a_placeholder() {
        let data = DataState::new();
        let content = buffer_to_string(render_to_terminal(&data).backend().buffer());
        assert!(content.contains("No transactions found."));
    }
}
