//! Draft state for the add-transaction form.

use crate::domain::{CategoryList, NewTransaction, TxnKind};

// ============================================================================
// Form Fields
// ============================================================================

/// Fields of the add-transaction form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Date,
    Amount,
    Kind,
    Category,
    Description,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Amount => Self::Kind,
            Self::Kind => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Date,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Description,
            Self::Amount => Self::Date,
            Self::Kind => Self::Amount,
            Self::Category => Self::Kind,
            Self::Description => Self::Category,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Amount => "Amount",
            Self::Kind => "Type",
            Self::Category => "Category",
            Self::Description => "Description",
        }
    }
}

// ============================================================================
// Transaction Form
// ============================================================================

/// Draft state for the add-transaction popup.
///
/// The allowed category list is never stored: it is derived from the
/// provided lists and the currently selected kind on every use, so it can
/// not go stale when the kind changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    pub date: String,
    /// Amount as typed; validated and parsed on submit.
    pub amount: String,
    pub kind: TxnKind,
    pub category: Option<String>,
    pub description: String,
    pub active_field: FormField,
}

impl TransactionForm {
    /// Creates a draft seeded with today's date, an empty amount, and the
    /// expense kind.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(chrono::Local::now().format("%Y-%m-%d").to_string())
    }

    /// Creates a draft seeded with an explicit date.
    #[must_use]
    pub fn seeded(date: String) -> Self {
        Self {
            date,
            amount: String::new(),
            kind: TxnKind::Expense,
            category: None,
            description: String::new(),
            active_field: FormField::Date,
        }
    }

    pub fn focus_next(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn focus_prev(&mut self) {
        self.active_field = self.active_field.prev();
    }

    /// Types a character into the active field.
    ///
    /// Date and amount only accept the characters that can appear in a
    /// valid value; the kind and category fields ignore text input.
    pub fn push_char(&mut self, c: char) {
        match self.active_field {
            FormField::Date => {
                if c.is_ascii_digit() || c == '-' {
                    self.date.push(c);
                }
            }
            FormField::Amount => {
                if c.is_ascii_digit() || c == '.' {
                    self.amount.push(c);
                }
            }
            FormField::Description => self.description.push(c),
            FormField::Kind | FormField::Category => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.active_field {
            FormField::Date => {
                self.date.pop();
            }
            FormField::Amount => {
                self.amount.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Kind | FormField::Category => {}
        }
    }

    /// The category names allowed for the currently selected kind.
    #[must_use]
    pub fn allowed_categories<'a>(&self, categories: Option<&'a CategoryList>) -> &'a [String] {
        categories.map_or(&[], |list| list.for_kind(self.kind))
    }

    /// Cycles the option of the active field by `step`.
    ///
    /// On the kind field any step toggles income/expense and clears the
    /// selected category; on the category field it moves through the
    /// allowed list with wrap-around.
    pub fn cycle(&mut self, step: isize, categories: Option<&CategoryList>) {
        match self.active_field {
            FormField::Kind => {
                self.kind = self.kind.toggled();
                self.category = None;
            }
            FormField::Category => {
                let allowed = self.allowed_categories(categories);
                if allowed.is_empty() {
                    return;
                }
                let len = allowed.len() as isize;
                let current = self
                    .category
                    .as_deref()
                    .and_then(|name| allowed.iter().position(|c| c == name));
                let next = match current {
                    Some(index) => (index as isize + step).rem_euclid(len) as usize,
                    // Nothing selected yet: enter the list at the nearest end
                    None if step >= 0 => 0,
                    None => allowed.len() - 1,
                };
                self.category = Some(allowed[next].clone());
            }
            _ => {}
        }
    }

    /// Validates the draft into a POST body.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the draft violates a guard:
    /// missing date, non-positive amount, or a missing/unknown category
    /// while the allowed list is non-empty.
    pub fn validate(&self, categories: Option<&CategoryList>) -> Result<NewTransaction, String> {
        let date = self.date.trim();
        if date.is_empty() {
            return Err("Date is required.".to_string());
        }

        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| "Amount must be a number.".to_string())?;
        if amount <= 0.0 {
            return Err("Amount must be greater than zero.".to_string());
        }

        let allowed = self.allowed_categories(categories);
        let category = match (&self.category, allowed.is_empty()) {
            (None, false) => return Err("Please select a category.".to_string()),
            (Some(name), false) if !allowed.iter().any(|c| c == name) => {
                return Err(format!("'{name}' is not a {} category.", self.kind.label()));
            }
            (Some(name), _) => name.clone(),
            (None, true) => String::new(),
        };

        let description = self.description.trim();
        Ok(NewTransaction {
            date: date.to_string(),
            amount,
            kind: self.kind,
            category,
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
