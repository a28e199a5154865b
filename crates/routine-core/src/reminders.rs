//! Best-effort local reminders.
//!
//! Only reminders due within the next hour are scheduled. The schedule lives
//! as long as the [`ReminderScheduler`] that owns it; the shell recomputes it
//! whenever the task list or the global toggle changes.

use std::sync::Arc;

use chrono::{NaiveDateTime, TimeDelta};
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::models::{Task, TaskId};

/// Title used for every reminder notification
pub const REMINDER_TITLE: &str = "Routine reminder";

const REMINDER_FALLBACK_BODY: &str = "Task time";
const REMINDER_HORIZON_MINUTES: i64 = 60;

/// Whether the platform lets us show notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPermission {
    Granted,
    Denied,
    /// Not decided yet; a request may still grant it
    Prompt,
    Unsupported,
}

/// Delivers notifications on the current platform
pub trait Notifier: Send + Sync + 'static {
    fn permission(&self) -> NotificationPermission;

    /// Ask for permission if it has not been decided yet.
    fn request_permission(&self) -> NotificationPermission;

    fn notify(&self, title: &str, body: &str) -> Result<()>;
}

/// Global conditions that must hold before anything is scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderGate {
    pub enabled: bool,
    pub permission: NotificationPermission,
}

impl ReminderGate {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.enabled && self.permission == NotificationPermission::Granted
    }
}

/// One notification due later today
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedReminder {
    pub task_id: TaskId,
    pub title: String,
    pub body: String,
    pub fire_at: NaiveDateTime,
    pub delay: std::time::Duration,
}

/// Work out which reminders are due strictly within the next hour.
#[must_use]
pub fn plan_reminders(
    tasks: &[Task],
    now: NaiveDateTime,
    gate: ReminderGate,
) -> Vec<PlannedReminder> {
    if !gate.is_open() {
        return Vec::new();
    }

    let horizon = TimeDelta::minutes(REMINDER_HORIZON_MINUTES);
    tasks
        .iter()
        .filter(|task| task.reminder)
        .filter_map(|task| {
            let fire_at = now.date().and_time(task.time?);
            let until = fire_at - now;
            if until <= TimeDelta::zero() || until >= horizon {
                return None;
            }
            let body = if task.name.trim().is_empty() {
                REMINDER_FALLBACK_BODY.to_string()
            } else {
                task.name.clone()
            };
            Some(PlannedReminder {
                task_id: task.id,
                title: REMINDER_TITLE.to_string(),
                body,
                fire_at,
                delay: until.to_std().ok()?,
            })
        })
        .collect()
}

/// Owns the pending reminder timers for one editing session.
///
/// Dropping the scheduler cancels everything still pending.
pub struct ReminderScheduler<N: Notifier> {
    notifier: Arc<N>,
    pending: Vec<JoinHandle<()>>,
}

impl<N: Notifier> ReminderScheduler<N> {
    pub const fn new(notifier: Arc<N>) -> Self {
        Self {
            notifier,
            pending: Vec::new(),
        }
    }

    /// Timers that have not fired or been cancelled yet
    pub fn pending_count(&self) -> usize {
        self.pending
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Cancel all pending reminders.
    pub fn cancel_all(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }

    /// Replace the schedule based on the local wall clock.
    ///
    /// Must be called from within a tokio runtime.
    pub fn reschedule(&mut self, tasks: &[Task], enabled: bool) -> usize {
        self.reschedule_at(tasks, enabled, chrono::Local::now().naive_local())
    }

    /// Replace the schedule as if the wall clock read `now`.
    pub fn reschedule_at(&mut self, tasks: &[Task], enabled: bool, now: NaiveDateTime) -> usize {
        self.cancel_all();

        let gate = ReminderGate {
            enabled,
            permission: self.notifier.permission(),
        };
        let plan = plan_reminders(tasks, now, gate);
        for reminder in plan {
            let notifier = Arc::clone(&self.notifier);
            tracing::debug!(
                "Scheduling reminder for task {} at {}",
                reminder.task_id,
                reminder.fire_at.format("%H:%M")
            );
            self.pending.push(tokio::spawn(async move {
                tokio::time::sleep(reminder.delay).await;
                if let Err(error) = notifier.notify(&reminder.title, &reminder.body) {
                    tracing::warn!("Failed to show reminder: {}", error);
                }
            }));
        }
        self.pending.len()
    }
}

impl<N: Notifier> Drop for ReminderScheduler<N> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
