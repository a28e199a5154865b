use dioxus::prelude::*;

use crate::theme::{card_style, PALETTE};

const STEPS: &[(&str, &str)] = &[
    ("Plan", "Add tasks with a start time, a duration, and a label."),
    ("Arrange", "Drag tasks by their handle to put them in order."),
    ("Save", "Your routine is stored for this device's anonymous id."),
    ("Remind", "Turn reminders on to get a nudge within the hour."),
];

/// Welcome and how-it-works cards
#[component]
pub fn InfoCards() -> Element {
    let colors = &PALETTE;
    let card = card_style();

    rsx! {
        div {
            class: "info-cards",
            style: "display: flex; gap: 16px;",

            div {
                style: "{card} flex: 1;",
                h2 {
                    style: "margin: 0 0 8px 0; font-size: 16px;",
                    "Welcome"
                }
                p {
                    style: "margin: 0; color: {colors.text_secondary};",
                    "A calm start makes for a better day. Build your routine once and check things off as you go."
                }
            }

            div {
                style: "{card} flex: 2;",
                h2 {
                    style: "margin: 0 0 8px 0; font-size: 16px;",
                    "How it works"
                }
                ol {
                    style: "margin: 0; padding-left: 20px; color: {colors.text_secondary};",
                    for (title, detail) in STEPS.iter().copied() {
                        li {
                            key: "{title}",
                            strong { style: "color: {colors.text_primary};", "{title}: " }
                            "{detail}"
                        }
                    }
                }
            }
        }
    }
}
