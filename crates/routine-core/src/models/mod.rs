//! Data models for Morning Routine

mod clock;
mod routine;
mod task;
mod weekday;

pub use clock::{format_clock_time, parse_clock_time};
pub use routine::{Routine, RoutineId, RoutinePayload, StoredRoutine, DEFAULT_ROUTINE_TITLE};
pub use task::{Task, TaskId, TaskPatch, TaskRecord, MAX_DURATION_MINUTES};
pub use weekday::{DaySet, Weekday};
