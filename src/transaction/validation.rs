//! Validation of the transaction form.
//!
//! Every field is checked independently so that the form can show all of its
//! problems at once, each one beneath the input it belongs to.

use serde::{Deserialize, Serialize};

use super::core::{NewTransaction, TransactionType};

pub const DATE_REQUIRED: &str = "Date is required";
pub const AMOUNT_NEGATIVE: &str = "Amount must be positive";
pub const AMOUNT_NOT_A_NUMBER: &str = "Expected number, received nan";
pub const CATEGORY_REQUIRED: &str = "Category is required";

/// The raw form data for creating or editing a transaction.
///
/// All fields are kept as text so that invalid input can be echoed back to
/// the user alongside the error messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionForm {
    /// The date of the transaction, e.g. "2023-10-01".
    pub date: String,
    /// The amount in dollars.
    pub amount: String,
    /// Either "income" or "expense", sent as the `type` form field.
    #[serde(rename = "type")]
    pub type_: String,
    /// A free-text label, e.g. "Nike".
    pub category: String,
}

/// A field of [TransactionForm].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The transaction date.
    Date,
    /// The transaction amount.
    Amount,
    /// Income or expense.
    Type,
    /// The category label.
    Category,
}

impl Field {
    /// The `name` of the form input for this field.
    pub fn input_name(self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Amount => "amount",
            Field::Type => "type",
            Field::Category => "category",
        }
    }
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// The field that failed validation.
    pub field: Field,
    /// The message to show beneath the field's input.
    pub message: String,
}

/// The failed rules of a form submission, in form order. Never empty.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{} form field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// The message for `field`, if it failed validation.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    /// All failed rules.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// The number of fields that failed validation.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, an empty set of failures is a successful validation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Check `form` against the transaction rules.
///
/// # Errors
///
/// Returns [ValidationErrors] holding one message for each field that breaks
/// a rule:
/// - `date` must not be empty,
/// - `amount` must be a finite number that is zero or greater,
/// - `type_` must be exactly "income" or "expense",
/// - `category` must not be empty.
pub fn validate(form: &TransactionForm) -> Result<NewTransaction, ValidationErrors> {
    let mut errors = Vec::new();
    let mut fail = |field, message: String| errors.push(FieldError { field, message });

    if form.date.is_empty() {
        fail(Field::Date, DATE_REQUIRED.to_owned());
    }

    let amount = match form.amount.trim().parse::<f64>() {
        Ok(amount) if !amount.is_finite() => {
            fail(Field::Amount, AMOUNT_NOT_A_NUMBER.to_owned());
            None
        }
        Ok(amount) if amount < 0.0 => {
            fail(Field::Amount, AMOUNT_NEGATIVE.to_owned());
            None
        }
        Ok(amount) => Some(amount),
        Err(_) => {
            fail(Field::Amount, AMOUNT_NOT_A_NUMBER.to_owned());
            None
        }
    };

    let type_ = match form.type_.parse::<TransactionType>() {
        Ok(type_) => Some(type_),
        Err(received) => {
            fail(
                Field::Type,
                format!("Invalid enum value. Expected 'income' | 'expense', received '{received}'"),
            );
            None
        }
    };

    if form.category.is_empty() {
        fail(Field::Category, CATEGORY_REQUIRED.to_owned());
    }

    match (amount, type_) {
        (Some(amount), Some(type_)) if errors.is_empty() => Ok(NewTransaction {
            date: form.date.clone(),
            amount,
            type_,
            category: form.category.clone(),
        }),
        _ => Err(ValidationErrors(errors)),
    }
}
