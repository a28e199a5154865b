//! UI Components
//!
//! Building blocks for the routine page.

mod day_picker;
mod header;
mod info_cards;
mod quote_card;
mod routine_panel;
mod settings;
mod task_row;
mod today_panel;

pub use day_picker::DayPicker;
pub use header::Header;
pub use info_cards::InfoCards;
pub use quote_card::QuoteCard;
pub use routine_panel::RoutinePanel;
pub use settings::SettingsPanel;
pub use task_row::TaskRow;
pub use today_panel::TodayPanel;
