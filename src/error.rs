//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError,
    transaction::TransactionId,
};

/// The errors that may occur in the application.
///
/// Form validation failures are not errors, see
/// [ValidationErrors](crate::ValidationErrors).
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The mutex guarding the transaction manager was poisoned by a panic in
    /// another request handler.
    #[error("could not acquire the transaction state lock")]
    StateLockError,

    /// A transaction was edited, but it was deleted before the edit was
    /// submitted.
    #[error("tried to update transaction {0}, which no longer exists")]
    UpdateMissingTransaction(TransactionId),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::StateLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = self.into_alert();

        (status_code, alert.into_html()).into_response()
    }

    /// The status code and alert to show the client for this error.
    pub(crate) fn into_alert(self) -> (StatusCode, Alert) {
        match self {
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Transaction not found".to_owned(),
                    details: "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has been deleted."
                        .to_owned(),
                },
            ),
            Error::UpdateMissingTransaction(id) => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not update transaction".to_owned(),
                    details: format!(
                        "Transaction {id} was deleted before your changes were saved."
                    ),
                },
            ),
            Error::StateLockError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        }
    }
}
