//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    not_found::get_404_not_found,
    transaction::{
        close_transaction_form_endpoint, delete_transaction_endpoint, get_edit_transaction_form,
        get_new_transaction_form, get_transactions_page, submit_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_transactions_page))
        .route(endpoints::NEW_TRANSACTION_FORM, get(get_new_transaction_form))
        .route(
            endpoints::EDIT_TRANSACTION_FORM,
            get(get_edit_transaction_form),
        )
        .route(
            endpoints::TRANSACTIONS_API,
            post(submit_transaction_endpoint),
        )
        .route(
            endpoints::CLOSE_TRANSACTION_FORM,
            post(close_transaction_form_endpoint),
        )
        .route(endpoints::TRANSACTION, delete(delete_transaction_endpoint))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_htmx::HX_REDIRECT;
    use axum_test::TestServer;
    use scraper::{Html, Selector};

    use crate::{
        AppState,
        endpoints::{self, format_endpoint},
        transaction::{TransactionForm, seed_transactions},
    };

    use super::build_router;

    fn new_server() -> (TestServer, AppState) {
        let state = AppState::default();
        let server = TestServer::try_new(build_router(state.clone()))
            .expect("Could not create test server.");

        (server, state)
    }

    fn row_count(page: &str) -> usize {
        Html::parse_document(page)
            .select(&Selector::parse("tbody tr[id^=transaction-]").unwrap())
            .count()
    }

    #[tokio::test]
    async fn root_serves_transactions_page() {
        let (server, _) = new_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_ok();
        assert_eq!(row_count(&response.text()), 2);
    }

    #[tokio::test]
    async fn add_transaction_flow() {
        let (server, state) = new_server();

        server
            .get(endpoints::NEW_TRANSACTION_FORM)
            .await
            .assert_status_ok();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .form(&TransactionForm {
                date: "2023-10-03".to_owned(),
                amount: "75".to_owned(),
                type_: "expense".to_owned(),
                category: "Puma".to_owned(),
            })
            .await;

        response.assert_status_see_other();
        response.assert_header(HX_REDIRECT, endpoints::ROOT);

        let page = server.get(endpoints::ROOT).await.text();
        assert_eq!(row_count(&page), 3);
        assert!(page.contains("transaction-3"));
        assert_eq!(state.lock_transactions().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn edit_transaction_flow() {
        let (server, state) = new_server();

        server
            .get(&format_endpoint(endpoints::EDIT_TRANSACTION_FORM, 2))
            .await
            .assert_status_ok();

        server
            .post(endpoints::TRANSACTIONS_API)
            .form(&TransactionForm {
                date: "2023-10-02".to_owned(),
                amount: "160".to_owned(),
                type_: "expense".to_owned(),
                category: "Adidas".to_owned(),
            })
            .await
            .assert_status_see_other();

        let manager = state.lock_transactions().unwrap();
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.get(2).map(|t| t.amount), Some(160.0));
    }

    #[tokio::test]
    async fn closing_form_discards_edit() {
        let (server, state) = new_server();

        server
            .get(&format_endpoint(endpoints::EDIT_TRANSACTION_FORM, 1))
            .await
            .assert_status_ok();
        server
            .post(endpoints::CLOSE_TRANSACTION_FORM)
            .await
            .assert_status_ok();

        let page = server.get(endpoints::ROOT).await.text();
        assert!(!page.contains("transaction-modal"));
        assert_eq!(state.lock_transactions().unwrap().editing_transaction(), None);
    }

    #[tokio::test]
    async fn delete_transaction_flow() {
        let (server, state) = new_server();

        server
            .delete(&format_endpoint(endpoints::TRANSACTION, 1))
            .await
            .assert_status_ok();

        assert_eq!(
            state.lock_transactions().unwrap().transactions(),
            &seed_transactions()[1..]
        );
    }

    #[tokio::test]
    async fn editing_unknown_transaction_is_not_found() {
        let (server, _) = new_server();

        server
            .get(&format_endpoint(endpoints::EDIT_TRANSACTION_FORM, 42))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let (server, _) = new_server();

        server
            .get("/sneakers")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
