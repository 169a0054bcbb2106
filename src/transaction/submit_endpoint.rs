//! Defines the endpoint for submitting the transaction form.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use maud::html;

use crate::{AppState, Error, endpoints};

use super::{
    form::{FormMode, closed_modal_out_of_band, transaction_modal},
    manager::{FormState, Submitted},
    validation::TransactionForm,
};

/// A route handler for the transaction form.
///
/// Adds a new transaction, or updates the one being edited, then redirects to
/// the transactions page. If the form is invalid, responds with the form again
/// showing the submitted values and an error beneath each invalid field.
///
/// If the transaction being edited was deleted in the meantime, responds
/// with an alert and closes the dialog. A form submitted while no form is
/// open changes nothing and reloads the page.
pub async fn submit_transaction_endpoint(
    State(state): State<AppState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let mut manager = match state.lock_transactions() {
        Ok(manager) => manager,
        Err(error) => return error.into_alert_response(),
    };

    match manager.submit(&form) {
        Ok(Submitted::Created(id)) => tracing::info!("Created transaction {id}"),
        Ok(Submitted::Updated(id)) => tracing::info!("Updated transaction {id}"),
        Ok(Submitted::EditTargetMissing(id)) => {
            tracing::warn!("Transaction {id} was deleted while it was being edited");
            let (status_code, alert) = Error::UpdateMissingTransaction(id).into_alert();

            // The alert is swapped into `#alert-container`, not the dialog.
            return (
                status_code,
                html! {
                    (alert.into_markup())
                    (closed_modal_out_of_band())
                },
            )
                .into_response();
        }
        Ok(Submitted::FormClosed) => {
            tracing::warn!("Ignored a transaction form submitted while the form was closed");
        }
        Err(errors) => {
            tracing::debug!("Rejected transaction form: {errors}");

            let mode = match manager.form_state() {
                FormState::Editing(_) => FormMode::Edit,
                FormState::Adding | FormState::Closed => FormMode::Add,
            };

            return transaction_modal(mode, &form, Some(&errors)).into_response();
        }
    }

    (
        HxRedirect(endpoints::ROOT.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
