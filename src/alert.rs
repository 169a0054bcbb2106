//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered as HTML fragments that htmx swaps into the
//! `#alert-container` element of the page layout.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// An alert message and its styling.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// An error with a headline and an explanation of how to fix it.
    Error { message: String, details: String },
    /// A success message without details.
    SuccessSimple { message: String },
}

impl Alert {
    /// Render the alert as a dismissable HTML fragment.
    pub fn into_html(self) -> Html<String> {
        Html(self.into_markup().into_string())
    }

    pub(crate) fn into_markup(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Error { message, details } => (
                "flex items-start gap-3 p-4 mb-4 text-sm text-red-800 rounded-lg \
                bg-red-50 dark:bg-gray-800 dark:text-red-400 shadow",
                message,
                Some(details),
            ),
            Alert::SuccessSimple { message } => (
                "flex items-start gap-3 p-4 mb-4 text-sm text-green-800 rounded-lg \
                bg-green-50 dark:bg-gray-800 dark:text-green-400 shadow",
                message,
                None,
            ),
        };

        html! {
            div role="alert" class=(container_style)
            {
                div class="flex-1"
                {
                    p class="font-medium" { (message) }

                    @if let Some(details) = details.filter(|details| !details.is_empty()) {
                        p { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Close"
                    onclick="this.closest('[role=alert]').remove()"
                    class="ms-auto font-bold"
                {
                    "×"
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn error_alert_shows_message_and_details() {
        let html = Alert::Error {
            message: "Oops".to_owned(),
            details: "Try again".to_owned(),
        }
        .into_html()
        .0;

        let fragment = Html::parse_fragment(&html);
        let paragraphs = fragment
            .select(&Selector::parse("p").unwrap())
            .map(|p| p.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(paragraphs, vec!["Oops", "Try again"]);
    }

    #[test]
    fn simple_success_alert_omits_details() {
        let html = Alert::SuccessSimple {
            message: "Done".to_owned(),
        }
        .into_html()
        .0;

        let fragment = Html::parse_fragment(&html);
        let count = fragment.select(&Selector::parse("p").unwrap()).count();
        assert_eq!(count, 1, "want 1 paragraph, got {count}");
    }
}
