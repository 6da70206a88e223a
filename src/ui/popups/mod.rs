//! Modal popups: the add-transaction form and message notifications.

pub mod message;
pub mod transaction_form;
