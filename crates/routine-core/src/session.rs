//! Backend round trips for the routine editor

use crate::api::RoutineApi;
use crate::editor::{CurrentRoutine, SavePlan, SaveTarget};
use crate::error::Result;
use crate::identity::ClientId;

/// Loads and saves the current routine for one client.
#[derive(Debug, Clone)]
pub struct RoutineSession<A> {
    api: A,
    client_id: ClientId,
}

impl<A: RoutineApi> RoutineSession<A> {
    pub const fn new(api: A, client_id: ClientId) -> Self {
        Self { api, client_id }
    }

    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Fetch the client's routines and resolve the one to edit.
    pub async fn load(&self) -> Result<CurrentRoutine> {
        let routines = self.api.list_routines(&self.client_id).await?;
        Ok(CurrentRoutine::resolve(routines))
    }

    /// Create or update according to `plan`, then reload the stored state.
    pub async fn save(&self, plan: SavePlan) -> Result<CurrentRoutine> {
        match &plan.target {
            SaveTarget::Create => self.api.create_routine(&plan.payload).await?,
            SaveTarget::Update(id) => self.api.update_routine(id, &plan.payload).await?,
        }
        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::api::memory::MemoryRoutineApi;
    use crate::editor::RoutineEditor;
    use crate::models::{DaySet, Routine, Task, TaskPatch, Weekday};

    fn session(api: &MemoryRoutineApi) -> RoutineSession<&MemoryRoutineApi> {
        RoutineSession::new(api, ClientId::new("k3j9x0aa"))
    }

    type TaskContent = (String, Option<NaiveTime>, Option<u32>, String, bool, bool);

    /// Task content with the local-only id stripped
    fn content(routine: &Routine) -> Vec<TaskContent> {
        routine
            .tasks
            .iter()
            .map(|task| {
                (
                    task.name.clone(),
                    task.time,
                    task.duration_minutes,
                    task.label.clone(),
                    task.reminder,
                    task.completed,
                )
            })
            .collect()
    }

    async fn save_and_apply(
        session: &RoutineSession<&MemoryRoutineApi>,
        editor: &mut RoutineEditor,
    ) -> Result<()> {
        let plan = editor
            .begin_save(session.client_id())
            .expect("no save in flight");
        let result = session.save(plan).await;
        editor.finish_save();
        editor.apply_loaded(result?);
        Ok(())
    }

    #[tokio::test]
    async fn drink_water_example_round_trips() {
        let api = MemoryRoutineApi::new();
        let session = session(&api);
        let mut editor = RoutineEditor::with_draft(Routine {
            tasks: vec![Task::new("Drink water").at(NaiveTime::from_hms_opt(6, 35, 0).unwrap())],
            ..Routine::default()
        });

        save_and_apply(&session, &mut editor).await.unwrap();
        assert_eq!(api.creates.load(Ordering::SeqCst), 1);

        let mut reloaded = RoutineEditor::new();
        reloaded.apply_loaded(session.load().await.unwrap());
        assert_eq!(reloaded.tasks()[0].name, "Drink water");
        assert!(!reloaded.tasks()[0].completed);
        assert_eq!(reloaded.draft().title, "My Morning Routine");
    }

    #[tokio::test]
    async fn save_then_load_yields_equivalent_draft() {
        let api = MemoryRoutineApi::new();
        let session = session(&api);
        let mut editor = RoutineEditor::new();
        editor.set_title("Slow Sundays");
        editor.set_wake_time(NaiveTime::from_hms_opt(8, 15, 0));
        editor.set_reminders_enabled(true);
        editor.toggle_day(Weekday::Mon);
        editor.toggle_day(Weekday::Mon);
        let id = editor.add_task();
        editor.update_task(id, TaskPatch::name("Coffee"));
        editor.update_task(id, TaskPatch::reminder(true));
        editor.move_task(2, 0);
        let draft = editor.draft().clone();

        save_and_apply(&session, &mut editor).await.unwrap();

        let mut reloaded = RoutineEditor::new();
        reloaded.apply_loaded(session.load().await.unwrap());
        let loaded = reloaded.draft();
        assert_eq!(loaded.title, draft.title);
        assert_eq!(loaded.wake_time, draft.wake_time);
        assert_eq!(api.stored()[0].reminders_enabled, draft.reminders_enabled);
        assert_eq!(loaded.days, draft.days);
        assert_eq!(content(loaded), content(&draft));
        assert!(loaded.id.is_some());
    }

    #[tokio::test]
    async fn second_save_updates_instead_of_creating() {
        let api = MemoryRoutineApi::new();
        let session = session(&api);
        let mut editor = RoutineEditor::new();

        save_and_apply(&session, &mut editor).await.unwrap();
        editor.set_title("Renamed");
        save_and_apply(&session, &mut editor).await.unwrap();

        assert_eq!(api.creates.load(Ordering::SeqCst), 1);
        assert_eq!(api.updates.load(Ordering::SeqCst), 1);
        assert_eq!(api.stored().len(), 1);
        assert_eq!(api.stored()[0].title, "Renamed");
    }

    #[tokio::test]
    async fn failed_save_clears_saving_flag_and_keeps_draft() {
        let api = MemoryRoutineApi::failing();
        let session = session(&api);
        let mut editor = RoutineEditor::new();
        editor.set_title("Unsaved");

        assert!(save_and_apply(&session, &mut editor).await.is_err());
        assert!(!editor.is_saving());
        assert_eq!(editor.draft().title, "Unsaved");
        assert!(editor.routine_id().is_none());
    }

    #[tokio::test]
    async fn load_only_sees_own_routines() {
        let api = MemoryRoutineApi::new();
        let other = RoutineSession::new(&api, ClientId::new("someoneelse"));
        let mut editor = RoutineEditor::with_draft(Routine {
            days: DaySet::from(vec![Weekday::Sat]),
            ..Routine::default()
        });
        let plan = editor.begin_save(other.client_id()).unwrap();
        other.save(plan).await.unwrap();

        assert_eq!(session(&api).load().await.unwrap(), CurrentRoutine::Absent);
    }
}
