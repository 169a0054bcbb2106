//! The page shell: a fixed header and footer around the active page's content.

use maud::{Markup, html};

use crate::{endpoints, html::base};

const HEADER_STYLE: &str = "bg-white border-b border-gray-200 dark:bg-gray-900 \
    dark:border-gray-700";

const FOOTER_STYLE: &str = "mt-8 py-4 text-center text-sm text-gray-500 \
    dark:text-gray-400 border-t border-gray-200 dark:border-gray-700";

/// Render a full HTML page with the app header and footer framing `content`,
/// and `modal` open on top of it if given.
pub fn layout(title: &str, content: &Markup, modal: Option<&Markup>) -> Markup {
    let framed = html! {
        header class=(HEADER_STYLE)
        {
            div class="max-w-screen-xl flex items-center mx-auto p-4"
            {
                a
                    href=(endpoints::ROOT)
                    class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                {
                    "Sneaker Ledger"
                }
            }
        }

        main { (content) }

        footer class=(FOOTER_STYLE)
        {
            p { "Sneaker Ledger. Transactions are kept in memory only." }
        }
    };

    base(title, &framed, modal)
}
