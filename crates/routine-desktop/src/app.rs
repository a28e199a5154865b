//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use routine_core::editor::RoutineEditor;
use routine_core::preferences::load_reminders_enabled;
use routine_core::reminders::{Notifier, ReminderScheduler};
use routine_core::Routine;

use crate::components::SettingsPanel;
use crate::services::AppServices;
use crate::state::AppState;
use crate::theme::PALETTE;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let services = use_context::<Arc<AppServices>>();

    let initial_reminders = use_hook({
        let services = Arc::clone(&services);
        move || load_reminders_enabled(&services.store)
    });

    // State signals
    let mut editor = use_signal(|| {
        let draft = Routine {
            reminders_enabled: initial_reminders,
            ..Routine::default()
        };
        RoutineEditor::with_draft(draft)
    });
    let reminders_enabled = use_signal(|| initial_reminders);
    let permission = use_signal(|| services.notifier.permission());
    let dragging = use_signal(|| None);
    let settings_open = use_signal(|| false);
    let mut scheduler = use_signal(|| ReminderScheduler::new(Arc::clone(&services.notifier)));

    // Load the stored routine once on mount
    let loader = Arc::clone(&services);
    use_future(move || {
        let session = loader.session();
        async move {
            match session.load().await {
                Ok(current) => editor.write().apply_loaded(current),
                Err(e) => tracing::warn!("Failed to load routine: {}", e),
            }
        }
    });

    // Rebuild the reminder schedule whenever tasks or the toggle change
    use_effect(move || {
        let enabled = reminders_enabled();
        let _ = permission();
        let tasks = editor.read().tasks().to_vec();
        let scheduled = scheduler.write().reschedule(&tasks, enabled);
        tracing::debug!("Scheduled {} reminder(s)", scheduled);
    });

    use_context_provider(|| AppState {
        editor,
        reminders_enabled,
        permission,
        dragging,
        settings_open,
    });

    let colors = &PALETTE;

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            Home {}

            // Settings panel overlay
            if settings_open() {
                SettingsPanel {}
            }
        }
    }
}
