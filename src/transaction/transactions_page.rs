//! Defines the route handler for the page that displays transactions as a table.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_OUTLINE_STYLE, CARD_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency,
    },
    layout::layout,
};

use super::{
    core::Transaction,
    form::{FormMode, transaction_modal},
    manager::FormState,
    validation::TransactionForm,
};

/// Render the transactions table, and the form if it is open.
pub async fn get_transactions_page(State(state): State<AppState>) -> Result<Response, Error> {
    let manager = state.lock_transactions()?;

    let modal = match manager.form_state() {
        FormState::Closed => None,
        FormState::Adding => Some(transaction_modal(
            FormMode::Add,
            &TransactionForm::default(),
            None,
        )),
        FormState::Editing(transaction) => Some(transaction_modal(
            FormMode::Edit,
            &TransactionForm::from(transaction),
            None,
        )),
    };

    Ok(transactions_view(manager.transactions(), modal.as_ref()).into_response())
}

fn transactions_view(transactions: &[Transaction], modal: Option<&Markup>) -> Markup {
    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class=(CARD_STYLE)
            {
                div class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Sneaker Transactions" }

                    button
                        type="button"
                        id="add-transaction"
                        hx-get=(endpoints::NEW_TRANSACTION_FORM)
                        hx-target="#modal-container"
                        hx-swap="innerHTML"
                        hx-target-error="#alert-container"
                        class=(BUTTON_OUTLINE_STYLE)
                    {
                        "Add Transaction"
                    }
                }

                table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            @for heading in ["Date", "Amount", "Type", "Category", "Actions"] {
                                th scope="col" class=(TABLE_CELL_STYLE) { (heading) }
                            }
                        }
                    }

                    tbody
                    {
                        @for transaction in transactions {
                            (transaction_row(transaction))
                        }

                        @if transactions.is_empty() {
                            tr
                            {
                                td
                                    colspan="5"
                                    class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
                                {
                                    "No transactions yet."
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    layout("Transactions", &content, modal)
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION_FORM, transaction.id);
    let delete_url = format_endpoint(endpoints::TRANSACTION, transaction.id);

    html! {
        tr id={ "transaction-" (transaction.id) } class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (transaction.date) }
            td class=(TABLE_CELL_STYLE) { (format_currency(transaction.amount)) }
            td class=(TABLE_CELL_STYLE) { (transaction.type_.as_str()) }
            td class=(TABLE_CELL_STYLE) { (transaction.category) }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-2"
                {
                    button
                        type="button"
                        hx-get=(edit_url)
                        hx-target="#modal-container"
                        hx-swap="innerHTML"
                        hx-target-error="#alert-container"
                        class=(BUTTON_OUTLINE_STYLE)
                    {
                        "Edit"
                    }

                    button
                        type="button"
                        hx-delete=(delete_url)
                        hx-target="closest tr"
                        hx-target-error="#alert-container"
                        hx-swap="delete"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        }
    }
}
