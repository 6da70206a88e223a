//! UI rendering module for the LazyLedger TUI.
//!
//! # Module Structure
//!
//! - `panels` - Main content (summary cards, transaction table)
//! - `popups` - Modal dialogs (add-transaction form, notifications)
//! - `layout` - Layout calculations and structs
//! - `header` / `footer` - Chrome bars
//! - `helpers` - Shared helpers for styled blocks

pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::{
    Frame,
    layout::Alignment,
    style::Style,
    widgets::Paragraph,
};

use crate::state::{App, PopupState};
use crate::theme::ERROR_COLOR;

use layout::calculate_app_layout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Render the entire application UI.
pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = calculate_app_layout(frame.area());

    header::render(frame, layout.header, app);
    panels::summary::render(frame, layout.summary, app);
    render_notice(frame, layout.notice, app);
    panels::transactions::render(frame, layout.content, &app.data, &mut app.ui.table_state);
    footer::render(frame, layout.footer, app);

    // Overlays, bottom to top: form modal, then any blocking message
    if let Some(form) = app.ui.form.as_ref() {
        popups::transaction_form::render(
            frame,
            frame.area(),
            form,
            app.data.categories.as_ref(),
            app.data.loading.categories,
        );
    }

    if let PopupState::Message(message) = &app.ui.popup_state {
        popups::message::render(frame, frame.area(), message);
    }
}

/// Inline error line for a failed read batch.
fn render_notice(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let Some(error) = app.data.last_error.as_deref() else {
        return;
    };

    let notice = Paragraph::new(format!("Error: {error}"))
        .style(Style::default().fg(ERROR_COLOR))
        .alignment(Alignment::Center);
    frame.render_widget(notice, area);
}

// ============================================================================
// Tests
// ============================================================================
