//! Task model

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::clock::optional_hhmm;
use crate::util::null_as_default;

/// Upper bound accepted for a task duration, in minutes
pub const MAX_DURATION_MINUTES: u32 = 600;

const NEW_TASK_DURATION_MINUTES: u32 = 5;

/// A local-only identifier for a task, using UUID v7.
///
/// Task ids never leave the client as identity: every load from the backend
/// assigns fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Create a new unique task ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single activity within a routine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    /// Planned start; `None` when the time picker is blank
    pub time: Option<NaiveTime>,
    /// Planned duration in minutes, within `1..=MAX_DURATION_MINUTES`
    pub duration_minutes: Option<u32>,
    /// Free-form label; empty means unlabeled
    pub label: String,
    pub reminder: bool,
    pub completed: bool,
}

impl Task {
    /// Create a named task with no time, duration, or label
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            name: name.into(),
            time: None,
            duration_minutes: None,
            label: String::new(),
            reminder: false,
            completed: false,
        }
    }

    /// The row appended by "Add Task"
    #[must_use]
    pub fn blank() -> Self {
        Self {
            duration_minutes: Some(NEW_TASK_DURATION_MINUTES),
            ..Self::new("")
        }
    }

    #[must_use]
    pub const fn at(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    #[must_use]
    pub fn lasting(mut self, minutes: u32) -> Self {
        self.duration_minutes = normalize_duration(Some(minutes));
        self
    }

    #[must_use]
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Merge a partial edit into this task.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(duration) = patch.duration_minutes {
            self.duration_minutes = normalize_duration(duration);
        }
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(reminder) = patch.reminder {
            self.reminder = reminder;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }

    /// Name shown in summaries, with a placeholder for blank rows
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Untitled task"
        } else {
            &self.name
        }
    }

    /// Time shown in summaries, `--:--` when unset
    #[must_use]
    pub fn time_label(&self) -> String {
        self.time
            .map_or_else(|| "--:--".to_string(), |time| time.format("%H:%M").to_string())
    }

    /// Build the wire record sent to the backend.
    #[must_use]
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            id: Some(self.id.to_string()),
            name: self.name.clone(),
            time: self.time,
            duration_minutes: self.duration_minutes,
            label: Some(self.label.clone()),
            reminder: self.reminder,
            completed: self.completed,
        }
    }

    /// Build a task from a backend record, assigning a fresh local id.
    #[must_use]
    pub fn from_record(record: TaskRecord) -> Self {
        Self {
            id: TaskId::new(),
            name: record.name,
            time: record.time,
            duration_minutes: normalize_duration(record.duration_minutes),
            label: record.label.unwrap_or_default(),
            reminder: record.reminder,
            completed: record.completed,
        }
    }
}

/// A partial edit; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub time: Option<Option<NaiveTime>>,
    pub duration_minutes: Option<Option<u32>>,
    pub label: Option<String>,
    pub reminder: Option<bool>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn time(time: Option<NaiveTime>) -> Self {
        Self {
            time: Some(time),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn duration_minutes(minutes: Option<u32>) -> Self {
        Self {
            duration_minutes: Some(minutes),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn reminder(enabled: bool) -> Self {
        Self {
            reminder: Some(enabled),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn completed(done: bool) -> Self {
        Self {
            completed: Some(done),
            ..Self::default()
        }
    }
}

/// Task as exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, with = "optional_hhmm")]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reminder: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

fn normalize_duration(minutes: Option<u32>) -> Option<u32> {
    minutes
        .filter(|minutes| *minutes > 0)
        .map(|minutes| minutes.min(MAX_DURATION_MINUTES))
}
