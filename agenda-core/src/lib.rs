//! Core types and logic for the agenda calendar.
//!
//! Everything the server and CLI share lives here:
//! - the month/year grid generator (`grid`)
//! - calendar events and the session that owns them (`event`, `session`)
//! - the key-value storage abstraction (`storage`)
//! - reminder payloads for the notification service (`reminder`)

pub mod date_key;
pub mod error;
pub mod event;
pub mod grid;
pub mod holidays;
pub mod reminder;
pub mod session;
pub mod storage;

pub use date_key::{DateKey, EventTime};
pub use error::{AgendaError, AgendaResult};
pub use event::{CalendarEvent, EventDraft};
pub use grid::{DayCell, GRID_CELLS, MonthGrid, build_month_grid, build_year_grid};
pub use holidays::HolidaySet;
pub use session::CalendarSession;
pub use storage::{FileStorage, MemoryStorage, Storage};
