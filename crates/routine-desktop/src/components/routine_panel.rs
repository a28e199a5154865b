//! Routine editor panel

use dioxus::prelude::*;

use routine_core::models::{format_clock_time, parse_clock_time};

use super::{DayPicker, TaskRow};
use crate::state::AppState;
use crate::theme::{button_style, card_style, input_style, PALETTE};

/// Title, wake time, active days, and the editable task list
#[component]
pub fn RoutinePanel() -> Element {
    let state = use_context::<AppState>();
    let mut editor = state.editor;

    let colors = &PALETTE;
    let input = input_style();
    let add_button = button_style();
    let (title, wake_time, tasks) = {
        let editor = editor.read();
        let draft = editor.draft();
        (
            draft.title.clone(),
            format_clock_time(draft.wake_time),
            draft.tasks.clone(),
        )
    };
    let count = tasks.len();

    let add_task = move |_: MouseEvent| {
        let id = editor.write().add_task();
        tracing::debug!("Added task {}", id);
    };

    rsx! {
        section {
            class: "routine-panel",
            style: card_style(),

            div {
                style: "display: flex; gap: 12px; margin-bottom: 12px;",

                label {
                    style: "flex: 1; display: flex; flex-direction: column; gap: 4px;",
                    span { style: "color: {colors.text_secondary};", "Routine title" }
                    input {
                        r#type: "text",
                        style: "{input}",
                        value: "{title}",
                        oninput: move |evt| editor.write().set_title(evt.value()),
                    }
                }

                label {
                    style: "display: flex; flex-direction: column; gap: 4px;",
                    span { style: "color: {colors.text_secondary};", "Wake time" }
                    input {
                        r#type: "time",
                        style: "{input}",
                        value: "{wake_time}",
                        oninput: move |evt| editor.write().set_wake_time(parse_clock_time(&evt.value())),
                    }
                }
            }

            div {
                style: "margin-bottom: 12px;",
                div {
                    style: "color: {colors.text_secondary}; margin-bottom: 4px;",
                    "Active days"
                }
                DayPicker {}
            }

            div {
                class: "task-list",
                style: "display: flex; flex-direction: column; gap: 8px;",

                for (index, task) in tasks.into_iter().enumerate() {
                    TaskRow {
                        key: "{task.id}",
                        task,
                        index,
                        count,
                    }
                }
            }

            button {
                style: "{add_button} margin-top: 12px;",
                onclick: add_task,
                "+ Add task"
            }
        }
    }
}
