//! Page header with the reminders toggle

use std::sync::Arc;

use dioxus::prelude::*;

use routine_core::preferences::save_reminders_enabled;
use routine_core::reminders::{NotificationPermission, Notifier};

use crate::services::AppServices;
use crate::state::AppState;
use crate::theme::{button_style, PALETTE};

/// App title, reminders on/off switch, and settings button
#[component]
pub fn Header() -> Element {
    let services = use_context::<Arc<AppServices>>();
    let state = use_context::<AppState>();
    let mut reminders_enabled = state.reminders_enabled;
    let mut permission = state.permission;
    let mut editor = state.editor;
    let mut settings_open = state.settings_open;

    let colors = &PALETTE;
    let enabled = reminders_enabled();

    let toggle_reminders = move |_: MouseEvent| {
        let enable = !reminders_enabled();
        if enable && permission() != NotificationPermission::Granted {
            let granted = services.notifier.request_permission();
            tracing::info!("Notification permission: {:?}", granted);
            permission.set(granted);
        }

        if let Err(e) = save_reminders_enabled(&services.store, enable) {
            tracing::warn!("Failed to persist reminders preference: {}", e);
        }
        reminders_enabled.set(enable);
        editor.write().set_reminders_enabled(enable);
    };

    let (toggle_label, toggle_background, toggle_color) = if enabled {
        ("Reminders On", colors.accent, colors.accent_text)
    } else {
        ("Reminders Off", colors.bg_tertiary, colors.text_secondary)
    };

    rsx! {
        header {
            class: "app-header",
            style: "display: flex; align-items: center; gap: 12px;",

            div {
                style: "flex: 1;",
                h1 {
                    style: "margin: 0; font-size: 24px;",
                    "Morning Routine"
                }
                div {
                    style: "color: {colors.text_secondary};",
                    "Plan your morning, one small step at a time."
                }
            }

            button {
                class: "reminders-toggle",
                style: "
                    padding: 8px 14px;
                    border: none;
                    border-radius: 999px;
                    background: {toggle_background};
                    color: {toggle_color};
                    cursor: pointer;
                    font-weight: 600;
                ",
                onclick: toggle_reminders,
                "{toggle_label}"
            }

            button {
                style: button_style(),
                title: "Settings",
                onclick: move |_| settings_open.set(true),
                "Settings"
            }
        }
    }
}
