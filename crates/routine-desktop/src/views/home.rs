//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{Header, InfoCards, QuoteCard, RoutinePanel, TodayPanel};

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                max-width: 1040px;
                margin: 0 auto;
                padding: 24px;
            ",

            Header {}
            QuoteCard {}
            InfoCards {}

            div {
                class: "main-content",
                style: "display: flex; gap: 16px; align-items: flex-start;",

                div {
                    style: "flex: 3; min-width: 0;",
                    RoutinePanel {}
                }
                div {
                    style: "flex: 2; min-width: 0;",
                    TodayPanel {}
                }
            }
        }
    }
}
