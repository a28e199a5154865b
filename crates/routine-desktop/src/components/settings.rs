//! Settings panel component

use std::sync::Arc;

use dioxus::prelude::*;

use routine_core::reminders::NotificationPermission;

use crate::services::AppServices;
use crate::state::AppState;
use crate::theme::{button_style, PALETTE};

const fn permission_label(permission: NotificationPermission) -> &'static str {
    match permission {
        NotificationPermission::Granted => "Allowed",
        NotificationPermission::Denied => "Blocked",
        NotificationPermission::Prompt => "Not decided yet",
        NotificationPermission::Unsupported => "Not supported on this system",
    }
}

/// Shared row layout for settings entries.
#[component]
fn SettingRow(#[props(into)] label: String, #[props(into)] value: String) -> Element {
    let colors = &PALETTE;

    rsx! {
        div {
            class: "settings-row",
            style: "
                display: flex;
                justify-content: space-between;
                gap: 16px;
                padding: 10px 0;
                border-bottom: 1px solid {colors.border};
            ",
            div {
                style: "color: {colors.text_secondary};",
                "{label}"
            }
            div {
                style: "font-family: ui-monospace, monospace; word-break: break-all; text-align: right;",
                "{value}"
            }
        }
    }
}

/// Read-only details about this device's setup
#[component]
pub fn SettingsPanel() -> Element {
    let services = use_context::<Arc<AppServices>>();
    let state = use_context::<AppState>();
    let mut settings_open = state.settings_open;

    let colors = &PALETTE;
    let close_button = button_style();
    let preferences_location = services.store_path.as_ref().map_or_else(
        || "In memory (not persisted)".to_string(),
        |path| path.display().to_string(),
    );
    let reminders = if (state.reminders_enabled)() {
        "On"
    } else {
        "Off"
    };
    let permission = permission_label((state.permission)());
    let routine_id = state
        .editor
        .read()
        .routine_id()
        .map_or_else(|| "Not saved yet".to_string(), ToString::to_string);

    rsx! {
        div {
            class: "settings-overlay",
            style: "
                position: fixed;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(0, 0, 0, 0.5);
            ",
            onclick: move |_| settings_open.set(false),

            div {
                class: "settings-panel",
                style: "
                    width: 520px;
                    max-width: 90vw;
                    padding: 20px 24px;
                    border-radius: 12px;
                    border: 1px solid {colors.border};
                    background: {colors.bg_secondary};
                ",
                onclick: move |evt| evt.stop_propagation(),

                div {
                    style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;",
                    h2 { style: "margin: 0; font-size: 18px;", "Settings" }
                    button {
                        style: "{close_button}",
                        onclick: move |_| settings_open.set(false),
                        "Close"
                    }
                }

                SettingRow { label: "Client id", value: services.client_id.to_string() }
                SettingRow { label: "Routine id", value: routine_id }
                SettingRow { label: "Backend", value: services.config.backend_url.clone() }
                SettingRow { label: "Preferences file", value: preferences_location }
                SettingRow { label: "Reminders", value: reminders }
                SettingRow { label: "Notifications", value: permission }
            }
        }
    }
}
