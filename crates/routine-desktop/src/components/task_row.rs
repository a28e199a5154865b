//! One editable task in the routine

use dioxus::prelude::*;

use routine_core::models::{format_clock_time, parse_clock_time, TaskPatch, MAX_DURATION_MINUTES};
use routine_core::Task;

use crate::state::AppState;
use crate::theme::{button_style, input_style, PALETTE};

fn parse_duration(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

/// Editable task row with drag handle, reorder buttons, and inline fields
#[component]
pub fn TaskRow(task: Task, index: usize, count: usize) -> Element {
    let state = use_context::<AppState>();
    let mut editor = state.editor;
    let mut dragging = state.dragging;

    let colors = &PALETTE;
    let input = input_style();
    let button = button_style();
    let id = task.id;
    let time = format_clock_time(task.time);
    let duration = task
        .duration_minutes
        .map(|minutes| minutes.to_string())
        .unwrap_or_default();
    let is_dragging = dragging() == Some(id);
    let opacity = if is_dragging { "0.5" } else { "1" };
    let name_decoration = if task.completed {
        "line-through"
    } else {
        "none"
    };

    let on_drag_enter = move |_: Event<DragData>| {
        let Some(dragged) = dragging() else {
            return;
        };
        if dragged != id {
            editor.write().move_task_onto(dragged, id);
        }
    };

    let on_drop = move |evt: Event<DragData>| {
        evt.prevent_default();
        dragging.set(None);
    };

    rsx! {
        div {
            class: "task-row",
            draggable: "true",
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                padding: 8px;
                border: 1px solid {colors.border};
                border-radius: 8px;
                background: {colors.bg_primary};
                opacity: {opacity};
            ",
            ondragstart: move |_| dragging.set(Some(id)),
            ondragenter: on_drag_enter,
            ondragover: move |evt: Event<DragData>| evt.prevent_default(),
            ondrop: on_drop,
            ondragend: move |_| dragging.set(None),

            span {
                class: "drag-handle",
                style: "cursor: grab; color: {colors.text_muted}; user-select: none;",
                title: "Drag to reorder",
                "\u{2807}"
            }

            input {
                r#type: "checkbox",
                title: "Done",
                checked: task.completed,
                onchange: move |_| {
                    editor.write().toggle_completed(id);
                },
            }

            input {
                r#type: "text",
                placeholder: "Task name",
                style: "{input} flex: 2; min-width: 0; text-decoration: {name_decoration};",
                value: "{task.name}",
                oninput: move |evt| {
                    editor.write().update_task(id, TaskPatch::name(evt.value()));
                },
            }

            input {
                r#type: "time",
                style: "{input}",
                value: "{time}",
                oninput: move |evt| {
                    editor
                        .write()
                        .update_task(id, TaskPatch::time(parse_clock_time(&evt.value())));
                },
            }

            input {
                r#type: "number",
                min: "1",
                max: "{MAX_DURATION_MINUTES}",
                placeholder: "min",
                title: "Duration in minutes",
                style: "{input} width: 64px;",
                value: "{duration}",
                oninput: move |evt| {
                    editor
                        .write()
                        .update_task(id, TaskPatch::duration_minutes(parse_duration(&evt.value())));
                },
            }

            input {
                r#type: "text",
                placeholder: "Label",
                style: "{input} flex: 1; min-width: 0;",
                value: "{task.label}",
                oninput: move |evt| {
                    editor.write().update_task(id, TaskPatch::label(evt.value()));
                },
            }

            label {
                style: "display: flex; align-items: center; gap: 4px; color: {colors.text_secondary};",
                title: "Remind me",
                input {
                    r#type: "checkbox",
                    checked: task.reminder,
                    onchange: move |_| {
                        editor.write().toggle_reminder(id);
                    },
                }
                "Remind"
            }

            button {
                style: "{button}",
                title: "Move up",
                disabled: index == 0,
                onclick: move |_| {
                    editor.write().move_task(index, index.saturating_sub(1));
                },
                "\u{2191}"
            }
            button {
                style: "{button}",
                title: "Move down",
                disabled: index + 1 >= count,
                onclick: move |_| {
                    editor.write().move_task(index, index + 1);
                },
                "\u{2193}"
            }
            button {
                style: "{button} color: {colors.error};",
                title: "Delete task",
                onclick: move |_| {
                    editor.write().remove_task(id);
                },
                "\u{2715}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_input_parsing() {
        assert_eq!(parse_duration(" 15 "), Some(15));
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("-3"), None);
        assert_eq!(parse_duration("abc"), None);
    }
}
