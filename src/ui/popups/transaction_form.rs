//! Add-transaction form popup.
//!
//! One bordered field per row with an active-field highlight, built from
//! plain Ratatui widgets.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::domain::CategoryList;
use crate::state::{FormField, TransactionForm};
use crate::theme::{FOCUSED_BORDER_STYLE, MUTED_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

/// Render the add-transaction form.
///
/// `categories` is the full category payload; the form derives the list
/// for its currently selected kind. `loading_categories` swaps the
/// category placeholder while the lists are still being fetched.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    form: &TransactionForm,
    categories: Option<&CategoryList>,
    loading_categories: bool,
) {
    // 5 fields x 3 rows + 2 help lines + 2 border rows
    let popup_area = centered_popup_area(area, 56, 19);
    let popup_block = create_popup_block("Add New Transaction");

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner = popup_block.inner(popup_area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(inner);

    render_field(frame, rows[0], FormField::Date, &form.date, form, "YYYY-MM-DD");
    render_field(frame, rows[1], FormField::Amount, &form.amount, form, "0.00");
    render_field(frame, rows[2], FormField::Kind, form.kind.label(), form, "");

    let category_value = form.category.clone().unwrap_or_default();
    let category_hint = category_placeholder(form, categories, loading_categories);
    render_field(
        frame,
        rows[3],
        FormField::Category,
        &category_value,
        form,
        category_hint,
    );

    render_field(
        frame,
        rows[4],
        FormField::Description,
        &form.description,
        form,
        "<optional>",
    );

    let help = Paragraph::new("Enter:Save  Tab:Next  Left/Right:Change  Esc:Cancel")
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(help, rows[5]);
}

fn category_placeholder(
    form: &TransactionForm,
    categories: Option<&CategoryList>,
    loading_categories: bool,
) -> &'static str {
    if loading_categories {
        "Loading..."
    } else if form.allowed_categories(categories).is_empty() {
        "<no categories>"
    } else {
        "Left/Right to select"
    }
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: FormField,
    value: &str,
    form: &TransactionForm,
    placeholder: &str,
) {
    let is_active = field == form.active_field;
    let border_style = if is_active {
        FOCUSED_BORDER_STYLE.add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_COLOR)
    };

    let display = if value.is_empty() { placeholder } else { value };
    let content = if is_active && accepts_text(field) {
        format!("{display}_")
    } else {
        display.to_string()
    };

    let paragraph = Paragraph::new(content)
        .style(if value.is_empty() {
            Style::default().fg(MUTED_COLOR)
        } else {
            Style::default()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(field.label()),
        );

    frame.render_widget(paragraph, area);
}

/// Whether a trailing input cursor makes sense for the field.
fn accepts_text(field: FormField) -> bool {
    matches!(
        field,
        FormField::Date | FormField::Amount | FormField::Description
    )
}

// ============================================================================
// Tests
// ============================================================================
