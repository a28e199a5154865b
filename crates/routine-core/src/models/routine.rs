//! Routine model and its backend wire shapes

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::clock::optional_hhmm;
use super::task::{Task, TaskRecord};
use super::weekday::DaySet;
use crate::identity::ClientId;
use crate::util::null_as_default;

/// Title given to a routine nobody has named yet
pub const DEFAULT_ROUTINE_TITLE: &str = "My Morning Routine";

/// Backend-assigned routine identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutineId(String);

impl RoutineId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoutineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, recurring set of morning tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    /// Assigned by the backend on first save
    pub id: Option<RoutineId>,
    pub title: String,
    pub wake_time: Option<NaiveTime>,
    pub reminders_enabled: bool,
    pub days: DaySet,
    /// Ordered; the order is what the user sees and what gets saved
    pub tasks: Vec<Task>,
}

impl Default for Routine {
    fn default() -> Self {
        Self {
            id: None,
            title: DEFAULT_ROUTINE_TITLE.to_string(),
            wake_time: NaiveTime::from_hms_opt(6, 30, 0),
            reminders_enabled: false,
            days: DaySet::all(),
            tasks: starter_tasks(),
        }
    }
}

impl Routine {
    /// Serialize this routine into a create/update request body.
    #[must_use]
    pub fn to_payload(&self, client_id: &ClientId) -> RoutinePayload {
        RoutinePayload {
            client_id: client_id.clone(),
            title: self.title.clone(),
            wake_time: self.wake_time,
            reminders_enabled: self.reminders_enabled,
            days: self.days.clone(),
            tasks: self.tasks.iter().map(Task::to_record).collect(),
        }
    }
}

/// Request body for `POST /api/routines` and `PUT /api/routines/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutinePayload {
    pub client_id: ClientId,
    pub title: String,
    #[serde(with = "optional_hhmm")]
    pub wake_time: Option<NaiveTime>,
    pub reminders_enabled: bool,
    pub days: DaySet,
    pub tasks: Vec<TaskRecord>,
}

/// A routine as returned by `GET /api/routines`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredRoutineWire")]
pub struct StoredRoutine {
    #[serde(rename = "_id")]
    pub id: RoutineId,
    pub client_id: Option<ClientId>,
    pub title: String,
    #[serde(with = "optional_hhmm")]
    pub wake_time: Option<NaiveTime>,
    pub reminders_enabled: bool,
    pub days: Option<DaySet>,
    pub tasks: Option<Vec<TaskRecord>>,
}

/// Lenient reading of a stored routine.
///
/// The id may arrive as `_id`, `id`, or both (`_id` wins). Explicit `null`s
/// read as defaults.
#[derive(Deserialize)]
struct StoredRoutineWire {
    #[serde(default, rename = "_id")]
    underscore_id: Option<RoutineId>,
    #[serde(default)]
    id: Option<RoutineId>,
    #[serde(default)]
    client_id: Option<ClientId>,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "optional_hhmm::deserialize")]
    wake_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "null_as_default")]
    reminders_enabled: bool,
    #[serde(default)]
    days: Option<DaySet>,
    #[serde(default)]
    tasks: Option<Vec<TaskRecord>>,
}

impl TryFrom<StoredRoutineWire> for StoredRoutine {
    type Error = String;

    fn try_from(wire: StoredRoutineWire) -> Result<Self, Self::Error> {
        let id = wire
            .underscore_id
            .or(wire.id)
            .ok_or_else(|| "stored routine has no `_id`".to_string())?;
        Ok(Self {
            id,
            client_id: wire.client_id,
            title: wire.title,
            wake_time: wire.wake_time,
            reminders_enabled: wire.reminders_enabled,
            days: wire.days,
            tasks: wire.tasks,
        })
    }
}

impl StoredRoutine {
    /// Build the editable routine; every task receives a fresh local id.
    ///
    /// A stored routine without a day list keeps `fallback_days`.
    #[must_use]
    pub fn into_routine(self, fallback_days: &DaySet) -> Routine {
        Routine {
            id: Some(self.id),
            title: self.title,
            wake_time: self.wake_time,
            reminders_enabled: self.reminders_enabled,
            days: self.days.unwrap_or_else(|| fallback_days.clone()),
            tasks: self
                .tasks
                .unwrap_or_default()
                .into_iter()
                .map(Task::from_record)
                .collect(),
        }
    }
}

fn starter_tasks() -> Vec<Task> {
    let mut tasks = Vec::with_capacity(2);
    if let Some(time) = NaiveTime::from_hms_opt(6, 35, 0) {
        tasks.push(Task::new("Drink water").at(time).lasting(2).labeled("Health"));
    }
    if let Some(time) = NaiveTime::from_hms_opt(6, 40, 0) {
        tasks.push(Task::new("Stretch").at(time).lasting(5).labeled("Body"));
    }
    tasks
}
