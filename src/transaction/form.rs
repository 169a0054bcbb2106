//! The modal dialog holding the transaction form.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_ERROR_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE,
    },
};

use super::{
    core::{Transaction, TransactionType},
    validation::{Field, TransactionForm, ValidationErrors},
};

const TYPE_OPTIONS: [(TransactionType, &str); 2] = [
    (TransactionType::Income, "Income"),
    (TransactionType::Expense, "Expense"),
];

/// Whether the form creates a new transaction or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

impl FormMode {
    fn title(self) -> &'static str {
        match self {
            FormMode::Add => "Add Transaction",
            FormMode::Edit => "Edit Transaction",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            FormMode::Add => "Add",
            FormMode::Edit => "Update",
        }
    }
}

impl From<&Transaction> for TransactionForm {
    fn from(transaction: &Transaction) -> Self {
        Self {
            date: transaction.date.clone(),
            amount: transaction.amount.to_string(),
            type_: transaction.type_.to_string(),
            category: transaction.category.clone(),
        }
    }
}

/// Render the modal with the form filled in with `values` and, if the last
/// submission failed, the message for each invalid field beneath its input.
pub fn transaction_modal(
    mode: FormMode,
    values: &TransactionForm,
    errors: Option<&ValidationErrors>,
) -> Markup {
    let error_for = |field: Field| errors.and_then(|errors| errors.message(field));

    html! {
        div
            id="transaction-modal"
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4"
        {
            div
                role="dialog"
                aria-modal="true"
                aria-labelledby="transaction-modal-title"
                class={ (CARD_STYLE) " max-w-md" }
            {
                div class="flex items-center justify-between"
                {
                    h2 id="transaction-modal-title" class="text-xl font-bold" { (mode.title()) }

                    button
                        type="button"
                        aria-label="Close"
                        hx-post=(endpoints::CLOSE_TRANSACTION_FORM)
                        hx-target="#modal-container"
                        hx-swap="innerHTML"
                        class="text-gray-500 hover:text-gray-900 dark:hover:text-white"
                    {
                        "×"
                    }
                }

                form
                    hx-post=(endpoints::TRANSACTIONS_API)
                    hx-target="#modal-container"
                    hx-swap="innerHTML"
                    hx-target-error="#alert-container"
                    class="space-y-4"
                {
                    div
                    {
                        label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                        input
                            name="date"
                            id="date"
                            type="date"
                            value=(values.date)
                            class=(FORM_TEXT_INPUT_STYLE);

                        (field_error(Field::Date, error_for(Field::Date)))
                    }

                    div
                    {
                        label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                        input
                            name="amount"
                            id="amount"
                            type="number"
                            step="any"
                            placeholder="0.00"
                            value=(values.amount)
                            class=(FORM_TEXT_INPUT_STYLE);

                        (field_error(Field::Amount, error_for(Field::Amount)))
                    }

                    div
                    {
                        label for="type" class=(FORM_LABEL_STYLE) { "Type" }

                        select
                            name="type"
                            id="type"
                            class=(FORM_TEXT_INPUT_STYLE)
                        {
                            option value="" selected[values.type_.is_empty()] { "Select type" }

                            @for (type_, label) in TYPE_OPTIONS {
                                option
                                    value=(type_.as_str())
                                    selected[values.type_ == type_.as_str()]
                                {
                                    (label)
                                }
                            }
                        }

                        (field_error(Field::Type, error_for(Field::Type)))
                    }

                    div
                    {
                        label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                        input
                            name="category"
                            id="category"
                            type="text"
                            placeholder="e.g. Nike"
                            value=(values.category)
                            class=(FORM_TEXT_INPUT_STYLE);

                        (field_error(Field::Category, error_for(Field::Category)))
                    }

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { (mode.submit_label()) }
                }
            }
        }
    }
}

/// An empty modal container that htmx swaps in out of band, closing the
/// dialog from a response aimed at another target.
pub fn closed_modal_out_of_band() -> Markup {
    html! {
        div id="modal-container" hx-swap-oob="true" {}
    }
}

fn field_error(field: Field, message: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = message {
            p id={ (field.input_name()) "-error" } class=(FORM_ERROR_STYLE) { (message) }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        endpoints,
        test_utils::{
            assert_form_input_with_value, assert_form_submit_button_with_text,
            assert_hx_endpoint, assert_valid_html, must_get_form,
        },
        transaction::{
            core::seed_transactions,
            form::{FormMode, transaction_modal},
            validation::{TransactionForm, ValidationErrors, validate},
        },
    };

    fn render(
        mode: FormMode,
        values: &TransactionForm,
        errors: Option<&ValidationErrors>,
    ) -> Html {
        Html::parse_fragment(&transaction_modal(mode, values, errors).into_string())
    }

    #[test]
    fn add_form_is_empty() {
        let html = render(FormMode::Add, &TransactionForm::default(), None);
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::TRANSACTIONS_API, "hx-post");
        assert_form_input_with_value(&form, "date", "date", "");
        assert_form_input_with_value(&form, "amount", "number", "");
        assert_form_input_with_value(&form, "category", "text", "");
        assert_form_submit_button_with_text(&form, "Add");
        assert_selected_type(&html, "");
    }

    #[test]
    fn edit_form_is_prefilled() {
        let transactions = seed_transactions();

        let html = render(FormMode::Edit, &TransactionForm::from(&transactions[1]), None);
        assert_valid_html(&html);

        let title = html
            .select(&Selector::parse("#transaction-modal-title").unwrap())
            .next()
            .expect("modal title missing")
            .text()
            .collect::<String>();
        assert_eq!(title, "Edit Transaction");

        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "date", "date", "2023-10-02");
        assert_form_input_with_value(&form, "amount", "number", "150");
        assert_form_input_with_value(&form, "category", "text", "Adidas");
        assert_form_submit_button_with_text(&form, "Update");
        assert_selected_type(&html, "expense");
    }

    #[test]
    fn shows_error_beneath_each_invalid_field() {
        let values = TransactionForm {
            date: String::new(),
            amount: "-5".to_owned(),
            type_: "expense".to_owned(),
            category: "Puma".to_owned(),
        };
        let errors = validate(&values).unwrap_err();

        let html = render(FormMode::Add, &values, Some(&errors));
        assert_valid_html(&html);

        assert_error(&html, "date", Some("Date is required"));
        assert_error(&html, "amount", Some("Amount must be positive"));
        assert_error(&html, "type", None);
        assert_error(&html, "category", None);

        // Submitted values are kept so the user can correct them.
        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "amount", "number", "-5");
        assert_form_input_with_value(&form, "category", "text", "Puma");
    }

    #[test]
    fn browser_does_not_block_amounts_checked_by_server() {
        let html = render(FormMode::Add, &TransactionForm::default(), None);

        let amount = html
            .select(&Selector::parse("input[name=amount]").unwrap())
            .next()
            .expect("amount input missing");
        assert_eq!(amount.value().attr("step"), Some("any"));
        assert_eq!(amount.value().attr("min"), None);
        assert_eq!(amount.value().attr("required"), None);
    }

    #[test]
    fn type_select_uses_type_field_name() {
        let html = render(FormMode::Add, &TransactionForm::default(), None);

        let count = html
            .select(&Selector::parse("form select[name=type]").unwrap())
            .count();
        assert_eq!(count, 1, "want 1 select named type, got {count}");
    }

    #[track_caller]
    fn assert_error(html: &Html, input_name: &str, want: Option<&str>) {
        let selector = Selector::parse(&format!("#{input_name}-error")).unwrap();
        let got = html
            .select(&selector)
            .next()
            .map(|p| p.text().collect::<String>());

        assert_eq!(
            got.as_deref(),
            want,
            "want error {want:?} for {input_name}, got {got:?}"
        );
    }

    #[track_caller]
    fn assert_selected_type(html: &Html, want: &str) {
        let selected = html
            .select(&Selector::parse("select[name=type] option[selected]").unwrap())
            .filter_map(|option| option.value().attr("value"))
            .collect::<Vec<_>>();

        assert_eq!(selected, vec![want], "want selected type {want:?}");
    }
}
