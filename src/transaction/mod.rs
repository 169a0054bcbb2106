//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validation of the transaction form
//! - The `TransactionManager` that owns the transactions and the form state
//! - View handlers for the transactions page and the modal form

mod core;
mod delete_endpoint;
mod form;
mod form_endpoints;
mod manager;
mod submit_endpoint;
mod transactions_page;
mod validation;

pub use core::{NewTransaction, Transaction, TransactionId, TransactionType, seed_transactions};
pub use delete_endpoint::delete_transaction_endpoint;
pub use form_endpoints::{
    close_transaction_form_endpoint, get_edit_transaction_form, get_new_transaction_form,
};
pub use manager::{FormState, Submitted, TransactionManager};
pub use submit_endpoint::submit_transaction_endpoint;
pub use transactions_page::get_transactions_page;
pub use validation::{Field, FieldError, TransactionForm, ValidationErrors, validate};
