//! Daily quote card

use std::sync::Arc;

use dioxus::prelude::*;

use routine_core::quote::{load_quote, LOADING_QUOTE};

use crate::services::AppServices;
use crate::theme::{card_style, PALETTE};

/// Fetches one quote on mount; never shows an empty card
#[component]
pub fn QuoteCard() -> Element {
    let services = use_context::<Arc<AppServices>>();
    let quote = use_resource(move || {
        let services = Arc::clone(&services);
        async move { load_quote(&services.backend).await }
    });

    let colors = &PALETTE;
    let text = quote
        .read()
        .clone()
        .unwrap_or_else(|| LOADING_QUOTE.to_string());

    rsx! {
        div {
            class: "quote-card",
            style: card_style(),
            div {
                style: "
                    font-size: 12px;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    color: {colors.text_muted};
                    margin-bottom: 6px;
                ",
                "Today's inspiration"
            }
            blockquote {
                style: "margin: 0; font-size: 18px; font-style: italic;",
                "\u{201c}{text}\u{201d}"
            }
        }
    }
}
