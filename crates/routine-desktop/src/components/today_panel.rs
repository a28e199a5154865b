//! Today's summary and the save button

use std::sync::Arc;

use dioxus::prelude::*;

use routine_core::Task;

use crate::services::AppServices;
use crate::state::AppState;
use crate::theme::{card_style, PALETTE};

/// Display-ready summary of one task
struct TodayRow {
    key: String,
    time: String,
    name: String,
    name_style: String,
    label: String,
    completed: bool,
}

impl From<&Task> for TodayRow {
    fn from(task: &Task) -> Self {
        let name_style = if task.completed {
            format!("text-decoration: line-through; color: {};", PALETTE.success)
        } else {
            String::new()
        };
        Self {
            key: task.id.to_string(),
            time: task.time_label(),
            name: task.display_name().to_string(),
            name_style,
            label: task.label.clone(),
            completed: task.completed,
        }
    }
}

/// Read-only checklist of the draft plus the explicit save action
#[component]
pub fn TodayPanel() -> Element {
    let services = use_context::<Arc<AppServices>>();
    let state = use_context::<AppState>();
    let mut editor = state.editor;

    let colors = &PALETTE;
    let rows: Vec<TodayRow> = editor.read().tasks().iter().map(TodayRow::from).collect();
    let done = rows.iter().filter(|row| row.completed).count();
    let total = state.task_count();
    let saving = state.is_saving();
    let save_label = if saving { "Saving..." } else { "Save Routine" };

    let save_routine = move |_: MouseEvent| {
        let Some(plan) = editor.write().begin_save(&services.client_id) else {
            tracing::debug!("Save already in progress");
            return;
        };
        let session = services.session();
        spawn(async move {
            let result = session.save(plan).await;
            let mut editor = editor.write();
            editor.finish_save();
            match result {
                Ok(current) => {
                    editor.apply_loaded(current);
                    tracing::info!("Routine saved");
                }
                Err(e) => tracing::error!("Failed to save routine: {}", e),
            }
        });
    };

    rsx! {
        aside {
            class: "today-panel",
            style: card_style(),

            div {
                style: "display: flex; align-items: baseline; justify-content: space-between;",
                h2 {
                    style: "margin: 0 0 8px 0; font-size: 16px;",
                    "Today"
                }
                span {
                    style: "color: {colors.text_muted};",
                    "{done} of {total} done"
                }
            }

            if rows.is_empty() {
                p {
                    style: "color: {colors.text_muted};",
                    "No tasks yet. Add some to get started."
                }
            } else {
                ul {
                    style: "list-style: none; margin: 0; padding: 0;",
                    for row in rows {
                        li {
                            key: "{row.key}",
                            style: "display: flex; gap: 10px; padding: 4px 0;",
                            span {
                                style: "color: {colors.text_secondary}; font-variant-numeric: tabular-nums;",
                                "{row.time}"
                            }
                            span {
                                style: "{row.name_style}",
                                "{row.name}"
                            }
                            if !row.label.is_empty() {
                                span {
                                    style: "color: {colors.text_muted}; font-size: 12px;",
                                    "{row.label}"
                                }
                            }
                        }
                    }
                }
            }

            button {
                style: "
                    width: 100%;
                    margin-top: 12px;
                    padding: 10px;
                    border: none;
                    border-radius: 8px;
                    background: {colors.accent};
                    color: {colors.accent_text};
                    font-weight: 600;
                    cursor: pointer;
                ",
                disabled: saving,
                onclick: save_routine,
                "{save_label}"
            }
        }
    }
}
