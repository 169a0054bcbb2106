//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};

use crate::{AppState, alert::Alert};

use super::core::TransactionId;

/// A route handler for deleting a transaction, responds with an alert.
///
/// Deleting a transaction that does not exist leaves the list unchanged.
pub async fn delete_transaction_endpoint(
    State(state): State<AppState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut manager = match state.lock_transactions() {
        Ok(manager) => manager,
        Err(error) => return error.into_alert_response(),
    };

    // The status code has to be 200 OK or HTMX will not delete the table row.
    if manager.delete(transaction_id) {
        tracing::info!("Deleted transaction {transaction_id}");
        Alert::SuccessSimple {
            message: "Transaction deleted successfully".to_owned(),
        }
        .into_response()
    } else {
        tracing::warn!("Tried to delete missing transaction {transaction_id}");
        Html("").into_response()
    }
}
