//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use routine_core::editor::RoutineEditor;
use routine_core::reminders::NotificationPermission;
use routine_core::TaskId;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Editable copy of the current routine
    pub editor: Signal<RoutineEditor>,
    /// Device-local reminder preference, gates the scheduler
    pub reminders_enabled: Signal<bool>,
    /// Last known notification permission
    pub permission: Signal<NotificationPermission>,
    /// Task currently being dragged in the editor
    pub dragging: Signal<Option<TaskId>>,
    /// Whether settings panel is open
    pub settings_open: Signal<bool>,
}

impl AppState {
    /// Task count of the current draft
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.editor.read().tasks().len()
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.editor.read().is_saving()
    }
}
