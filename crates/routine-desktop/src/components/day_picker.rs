use dioxus::prelude::*;

use routine_core::Weekday;

use crate::state::AppState;
use crate::theme::PALETTE;

/// Row of weekday chips; clicking one toggles it in the draft
#[component]
pub fn DayPicker() -> Element {
    let state = use_context::<AppState>();
    let mut editor = state.editor;

    let colors = &PALETTE;
    let chips: Vec<(Weekday, &str, &str)> = {
        let draft = editor.read();
        Weekday::ALL
            .into_iter()
            .map(|day| {
                if draft.draft().days.contains(day) {
                    (day, colors.accent, colors.accent_text)
                } else {
                    (day, colors.bg_tertiary, colors.text_secondary)
                }
            })
            .collect()
    };

    rsx! {
        div {
            class: "day-picker",
            style: "display: flex; gap: 6px; flex-wrap: wrap;",

            for (day, background, color) in chips {
                button {
                    key: "{day}",
                    style: "
                        padding: 4px 10px;
                        border: none;
                        border-radius: 999px;
                        background: {background};
                        color: {color};
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        let active = editor.write().toggle_day(day);
                        tracing::debug!("{} {}", day, if active { "enabled" } else { "disabled" });
                    },
                    "{day}"
                }
            }
        }
    }
}
