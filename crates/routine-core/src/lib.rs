//! routine-core - Core library for Morning Routine
//!
//! This crate contains the shared models, the editable routine draft, the
//! backend client, local preference storage, and reminder scheduling used by
//! the Morning Routine interfaces.

pub mod api;
pub mod config;
pub mod editor;
pub mod error;
pub mod identity;
pub mod models;
pub mod preferences;
pub mod quote;
pub mod reminders;
pub mod session;
pub mod storage;
mod util;

pub use error::{Error, Result};
pub use identity::ClientId;
pub use models::{Routine, RoutineId, Task, TaskId, Weekday};
