//! Route handlers that open and close the transaction form.
//!
//! Each handler responds with the contents for `#modal-container`.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};

use crate::AppState;

use super::{
    core::TransactionId,
    form::{FormMode, transaction_modal},
    validation::TransactionForm,
};

/// Open the form with empty fields for adding a transaction.
pub async fn get_new_transaction_form(State(state): State<AppState>) -> Response {
    let mut manager = match state.lock_transactions() {
        Ok(manager) => manager,
        Err(error) => return error.into_alert_response(),
    };

    manager.open_add_form();

    transaction_modal(FormMode::Add, &TransactionForm::default(), None).into_response()
}

/// Open the form pre-filled with the transaction `transaction_id` for editing.
pub async fn get_edit_transaction_form(
    State(state): State<AppState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut manager = match state.lock_transactions() {
        Ok(manager) => manager,
        Err(error) => return error.into_alert_response(),
    };

    match manager.open_edit_form(transaction_id) {
        Ok(transaction) => transaction_modal(
            FormMode::Edit,
            &TransactionForm::from(&transaction),
            None,
        )
        .into_response(),
        Err(error) => {
            tracing::warn!("Could not edit transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}

/// Close the form without saving, dropping any edit in progress.
pub async fn close_transaction_form_endpoint(State(state): State<AppState>) -> Response {
    let mut manager = match state.lock_transactions() {
        Ok(manager) => manager,
        Err(error) => return error.into_alert_response(),
    };

    manager.close_form();

    Html("").into_response()
}
