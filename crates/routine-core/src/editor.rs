//! Editable routine draft.
//!
//! All operations here are synchronous and in-memory. Talking to the backend
//! is the job of [`crate::session::RoutineSession`]; this type only records
//! which routine the draft belongs to and whether a save is in flight.

use chrono::NaiveTime;

use crate::identity::ClientId;
use crate::models::{
    Routine, RoutineId, RoutinePayload, StoredRoutine, Task, TaskId, TaskPatch, Weekday,
};

/// The routine the editor operates on, resolved from a backend listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentRoutine {
    /// Nothing stored yet for this client
    Absent,
    /// The first stored routine; `ignored` counts any further ones
    Found {
        routine: StoredRoutine,
        ignored: usize,
    },
}

impl CurrentRoutine {
    /// Pick the routine to edit from the backend's list, in backend order.
    #[must_use]
    pub fn resolve(routines: Vec<StoredRoutine>) -> Self {
        let ignored = routines.len().saturating_sub(1);
        let Some(routine) = routines.into_iter().next() else {
            return Self::Absent;
        };
        if ignored > 0 {
            tracing::warn!(
                "Client has {} stored routines; editing {} and ignoring the rest",
                ignored + 1,
                routine.id
            );
        }
        Self::Found { routine, ignored }
    }
}

/// Whether a save creates a new routine or updates a stored one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(RoutineId),
}

/// Everything a save needs, captured when the save begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePlan {
    pub target: SaveTarget,
    pub payload: RoutinePayload,
}

/// In-memory draft of the current routine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutineEditor {
    draft: Routine,
    saving: bool,
}

impl RoutineEditor {
    /// Create an editor holding the default starter routine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor over an existing draft
    #[must_use]
    pub const fn with_draft(draft: Routine) -> Self {
        Self {
            draft,
            saving: false,
        }
    }

    #[must_use]
    pub const fn draft(&self) -> &Routine {
        &self.draft
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.draft.tasks
    }

    #[must_use]
    pub const fn routine_id(&self) -> Option<&RoutineId> {
        self.draft.id.as_ref()
    }

    #[must_use]
    pub const fn is_saving(&self) -> bool {
        self.saving
    }

    /// Replace the draft with the resolved stored routine.
    ///
    /// `Absent` leaves the draft untouched, so a client without a stored
    /// routine keeps editing the starter plan. The reminders flag is a device
    /// preference mirrored into the draft, so the stored value never
    /// overrides it.
    pub fn apply_loaded(&mut self, current: CurrentRoutine) {
        match current {
            CurrentRoutine::Absent => {
                tracing::debug!("No stored routine; keeping local draft");
            }
            CurrentRoutine::Found { routine, .. } => {
                let mut loaded = routine.into_routine(&self.draft.days);
                loaded.reminders_enabled = self.draft.reminders_enabled;
                tracing::info!(
                    "Loaded routine {} with {} task(s)",
                    loaded.id.as_ref().map_or("?", RoutineId::as_str),
                    loaded.tasks.len()
                );
                self.draft = loaded;
            }
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_wake_time(&mut self, wake_time: Option<NaiveTime>) {
        self.draft.wake_time = wake_time;
    }

    pub fn set_reminders_enabled(&mut self, enabled: bool) {
        self.draft.reminders_enabled = enabled;
    }

    /// Flip a day's membership; returns whether it is active afterwards.
    pub fn toggle_day(&mut self, day: Weekday) -> bool {
        self.draft.days.toggle(day)
    }

    /// Append a blank task and return its id.
    pub fn add_task(&mut self) -> TaskId {
        let task = Task::blank();
        let id = task.id;
        self.draft.tasks.push(task);
        id
    }

    /// Remove a task; returns `false` for unknown ids.
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        let before = self.draft.tasks.len();
        self.draft.tasks.retain(|task| task.id != id);
        self.draft.tasks.len() != before
    }

    /// Merge a partial edit into a task; returns `false` for unknown ids.
    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> bool {
        match self.task_mut(id) {
            Some(task) => {
                task.apply(patch);
                true
            }
            None => false,
        }
    }

    pub fn toggle_completed(&mut self, id: TaskId) -> bool {
        match self.task_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    pub fn toggle_reminder(&mut self, id: TaskId) -> bool {
        match self.task_mut(id) {
            Some(task) => {
                task.reminder = !task.reminder;
                true
            }
            None => false,
        }
    }

    /// Move the task at `from` so that it ends up at index `to`.
    ///
    /// Every other task keeps its relative order. Out-of-range indices and
    /// `from == to` leave the list untouched and return `false`.
    pub fn move_task(&mut self, from: usize, to: usize) -> bool {
        let len = self.draft.tasks.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let moved = self.draft.tasks.remove(from);
        self.draft.tasks.insert(to, moved);
        true
    }

    /// Drag-and-drop reorder: move `dragged` into the slot held by `over`.
    pub fn move_task_onto(&mut self, dragged: TaskId, over: TaskId) -> bool {
        let Some(from) = self.position(dragged) else {
            return false;
        };
        let Some(to) = self.position(over) else {
            return false;
        };
        self.move_task(from, to)
    }

    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.draft.tasks.iter().position(|task| task.id == id)
    }

    /// Capture the payload for a save and mark the editor busy.
    ///
    /// Returns `None` while a previous save is still in flight.
    pub fn begin_save(&mut self, client_id: &ClientId) -> Option<SavePlan> {
        if self.saving {
            tracing::debug!("Save already in progress; ignoring request");
            return None;
        }
        self.saving = true;
        let target = self
            .draft
            .id
            .clone()
            .map_or(SaveTarget::Create, SaveTarget::Update);
        Some(SavePlan {
            target,
            payload: self.draft.to_payload(client_id),
        })
    }

    /// Clear the busy flag, whatever the outcome of the save was.
    pub fn finish_save(&mut self) {
        self.saving = false;
    }

    fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.draft.tasks.iter_mut().find(|task| task.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DaySet, TaskRecord};
    use pretty_assertions::assert_eq;

    fn editor_with(names: &[&str]) -> RoutineEditor {
        RoutineEditor::with_draft(Routine {
            tasks: names.iter().map(|name| Task::new(*name)).collect(),
            ..Routine::default()
        })
    }

    fn names(editor: &RoutineEditor) -> Vec<String> {
        editor.tasks().iter().map(|task| task.name.clone()).collect()
    }

    fn stored(id: &str, title: &str) -> StoredRoutine {
        StoredRoutine {
            id: RoutineId::new(id),
            client_id: Some(ClientId::new("k3j9x0aa")),
            title: title.to_string(),
            wake_time: NaiveTime::from_hms_opt(5, 45, 0),
            reminders_enabled: true,
            days: Some(DaySet::from(vec![Weekday::Mon, Weekday::Wed])),
            tasks: Some(vec![TaskRecord {
                id: Some("server-side".to_string()),
                name: "Journal".to_string(),
                time: NaiveTime::from_hms_opt(5, 50, 0),
                duration_minutes: Some(10),
                label: Some("Mind".to_string()),
                reminder: true,
                completed: false,
            }]),
        }
    }

    #[test]
    fn move_forward_preserves_other_order() {
        let mut editor = editor_with(&["a", "b", "c", "d", "e"]);
        assert!(editor.move_task(1, 3));
        assert_eq!(names(&editor), ["a", "c", "d", "b", "e"]);
    }

    #[test]
    fn move_backward_preserves_other_order() {
        let mut editor = editor_with(&["a", "b", "c", "d", "e"]);
        assert!(editor.move_task(4, 0));
        assert_eq!(names(&editor), ["e", "a", "b", "c", "d"]);
    }

    #[test]
    fn every_move_keeps_count_and_relative_order() {
        let original = ["a", "b", "c", "d", "e"];
        for from in 0..original.len() {
            for to in 0..original.len() {
                let mut editor = editor_with(&original);
                editor.move_task(from, to);
                let after = names(&editor);

                assert_eq!(after.len(), original.len());
                assert_eq!(after[to], original[from]);
                let rest_before: Vec<_> = original
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| *index != from)
                    .map(|(_, name)| (*name).to_string())
                    .collect();
                let rest_after: Vec<_> = after
                    .iter()
                    .filter(|name| name.as_str() != original[from])
                    .cloned()
                    .collect();
                assert_eq!(rest_before, rest_after);
            }
        }
    }

    #[test]
    fn out_of_range_move_is_a_no_op() {
        let mut editor = editor_with(&["a", "b"]);
        assert!(!editor.move_task(0, 2));
        assert!(!editor.move_task(5, 0));
        assert!(!editor.move_task(1, 1));
        assert_eq!(names(&editor), ["a", "b"]);
    }

    #[test]
    fn drag_onto_takes_hovered_slot() {
        let mut editor = editor_with(&["a", "b", "c"]);
        let dragged = editor.tasks()[0].id;
        let over = editor.tasks()[2].id;
        assert!(editor.move_task_onto(dragged, over));
        assert_eq!(names(&editor), ["b", "c", "a"]);
        assert!(!editor.move_task_onto(dragged, TaskId::new()));
    }

    #[test]
    fn add_then_remove_restores_list() {
        let mut editor = RoutineEditor::new();
        let before = editor.tasks().to_vec();

        let id = editor.add_task();
        assert_eq!(editor.tasks().len(), before.len() + 1);
        assert_eq!(editor.tasks().last().map(|task| task.id), Some(id));
        assert!(editor.remove_task(id));

        assert_eq!(editor.tasks(), before.as_slice());
        assert!(!editor.remove_task(id));
    }

    #[test]
    fn update_task_merges_patch_by_id() {
        let mut editor = editor_with(&["a", "b"]);
        let id = editor.tasks()[1].id;

        assert!(editor.update_task(id, TaskPatch::label("Focus")));
        assert!(editor.update_task(id, TaskPatch::name("Plan the day")));
        assert_eq!(editor.tasks()[1].name, "Plan the day");
        assert_eq!(editor.tasks()[1].label, "Focus");
        assert_eq!(editor.tasks()[0].name, "a");
        assert!(!editor.update_task(TaskId::new(), TaskPatch::name("ghost")));
    }

    #[test]
    fn toggles_flip_task_flags() {
        let mut editor = editor_with(&["a"]);
        let id = editor.tasks()[0].id;

        assert!(editor.toggle_completed(id));
        assert!(editor.toggle_reminder(id));
        assert!(editor.tasks()[0].completed);
        assert!(editor.tasks()[0].reminder);

        editor.toggle_completed(id);
        assert!(!editor.tasks()[0].completed);
    }

    #[test]
    fn toggle_day_twice_restores_membership() {
        let mut editor = RoutineEditor::new();
        for day in Weekday::ALL {
            let was_active = editor.draft().days.contains(day);
            editor.toggle_day(day);
            editor.toggle_day(day);
            assert_eq!(editor.draft().days.contains(day), was_active);
        }
        assert_eq!(editor.draft().days.len(), 7);
    }

    #[test]
    fn resolve_counts_ignored_routines() {
        assert_eq!(CurrentRoutine::resolve(Vec::new()), CurrentRoutine::Absent);

        let resolved = CurrentRoutine::resolve(vec![stored("r1", "First"), stored("r2", "Second")]);
        match resolved {
            CurrentRoutine::Found { routine, ignored } => {
                assert_eq!(routine.id.as_str(), "r1");
                assert_eq!(ignored, 1);
            }
            CurrentRoutine::Absent => panic!("expected a routine"),
        }
    }

    #[test]
    fn apply_loaded_replaces_draft() {
        let mut editor = RoutineEditor::new();
        editor.apply_loaded(CurrentRoutine::resolve(vec![stored("r1", "Early bird")]));

        let draft = editor.draft();
        assert_eq!(editor.routine_id(), Some(&RoutineId::new("r1")));
        assert_eq!(draft.title, "Early bird");
        assert_eq!(draft.wake_time, NaiveTime::from_hms_opt(5, 45, 0));
        assert_eq!(draft.days.as_slice(), &[Weekday::Mon, Weekday::Wed]);
        assert_eq!(names(&editor), ["Journal"]);
        assert_eq!(draft.tasks[0].label, "Mind");
    }

    #[test]
    fn loaded_routine_keeps_device_reminder_flag() {
        let client_id = ClientId::new("k3j9x0aa");
        let mut editor = RoutineEditor::new();
        assert!(!editor.draft().reminders_enabled);

        // stored copy says reminders are on; the device says off
        editor.apply_loaded(CurrentRoutine::resolve(vec![stored("r1", "Early bird")]));
        assert!(!editor.draft().reminders_enabled);
        let plan = editor.begin_save(&client_id).unwrap();
        assert!(!plan.payload.reminders_enabled);
        editor.finish_save();

        editor.set_reminders_enabled(true);
        editor.apply_loaded(CurrentRoutine::resolve(vec![StoredRoutine {
            reminders_enabled: false,
            ..stored("r1", "Early bird")
        }]));
        assert!(editor.draft().reminders_enabled);
        let plan = editor.begin_save(&client_id).unwrap();
        assert!(plan.payload.reminders_enabled);
    }

    #[test]
    fn apply_absent_keeps_draft() {
        let mut editor = RoutineEditor::new();
        let before = editor.clone();
        editor.apply_loaded(CurrentRoutine::Absent);
        assert_eq!(editor, before);
    }

    #[test]
    fn begin_save_rejects_duplicate_submissions() {
        let client_id = ClientId::new("k3j9x0aa");
        let mut editor = RoutineEditor::new();

        let plan = editor.begin_save(&client_id).expect("first save starts");
        assert_eq!(plan.target, SaveTarget::Create);
        assert!(editor.is_saving());
        assert_eq!(editor.begin_save(&client_id), None);

        editor.finish_save();
        assert!(!editor.is_saving());
        assert!(editor.begin_save(&client_id).is_some());
    }

    #[test]
    fn loaded_routine_saves_as_update() {
        let mut editor = RoutineEditor::new();
        editor.apply_loaded(CurrentRoutine::resolve(vec![stored("r9", "Weekdays")]));

        let plan = editor
            .begin_save(&ClientId::new("k3j9x0aa"))
            .expect("save starts");
        assert_eq!(plan.target, SaveTarget::Update(RoutineId::new("r9")));
        assert_eq!(plan.payload.title, "Weekdays");
    }
}
