//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}/edit', use [format_endpoint].

/// The transactions page: the table of transactions and the add button.
pub const ROOT: &str = "/";
/// The fragment for the modal form in "add" mode.
pub const NEW_TRANSACTION_FORM: &str = "/transactions/new";
/// The fragment for the modal form pre-filled with an existing transaction.
pub const EDIT_TRANSACTION_FORM: &str = "/transactions/{transaction_id}/edit";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for submitting the transaction form.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route for closing the transaction form without submitting it.
pub const CLOSE_TRANSACTION_FORM: &str = "/api/transactions/form/close";
/// The route to access a single transaction.
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/users/{user_id}', '{user_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
