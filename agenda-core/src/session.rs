//! Calendar session: the owning state object.
//!
//! One explicitly constructed value owns the events, the custom non-working
//! day set, the holiday table and the storage handle. The server and the CLI
//! each open a session and pass it where needed; there is no ambient global.

use std::collections::BTreeSet;

use serde::de::DeserializeOwned;

use crate::date_key::DateKey;
use crate::error::AgendaResult;
use crate::event::{CalendarEvent, EventDraft};
use crate::grid::{DayCell, MonthGrid, build_month_grid, build_year_grid};
use crate::holidays::HolidaySet;
use crate::storage::{EVENTS_KEY, NON_WORKING_KEY, Storage};

pub struct CalendarSession<S: Storage> {
    storage: S,
    events: Vec<CalendarEvent>,
    non_working: BTreeSet<DateKey>,
    holidays: HolidaySet,
}

impl<S: Storage> CalendarSession<S> {
    /// Open a session over `storage`, loading whatever state it holds.
    /// Missing or malformed data counts as "no data yet" and never fails.
    pub fn open(storage: S) -> Self {
        let events = load_json(&storage, EVENTS_KEY);
        let non_working = load_json(&storage, NON_WORKING_KEY);

        CalendarSession {
            storage,
            events,
            non_working,
            holidays: HolidaySet::defaults_2025(),
        }
    }

    /// Replace the holiday table (defaults to the built-in 2025 set).
    pub fn with_holidays(mut self, holidays: HolidaySet) -> Self {
        self.holidays = holidays;
        self
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn event(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn events_on(&self, date: DateKey) -> Vec<&CalendarEvent> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    pub fn non_working_days(&self) -> &BTreeSet<DateKey> {
        &self.non_working
    }

    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Add an event from form input, persisting immediately.
    ///
    /// Returns `Ok(None)` without storing anything when the draft is missing
    /// its title or date.
    pub fn add_event(&mut self, draft: EventDraft) -> AgendaResult<Option<CalendarEvent>> {
        let Some(event) = draft.into_event() else {
            return Ok(None);
        };

        self.events.push(event.clone());
        self.persist_events()?;
        Ok(Some(event))
    }

    /// Replace an existing event with new form input, keeping its id, and
    /// persist immediately.
    ///
    /// Follows the same silent-validation policy as `add_event`: an unknown
    /// id or a draft missing its title or date changes nothing and returns
    /// `Ok(None)`.
    pub fn update_event(
        &mut self,
        id: &str,
        draft: EventDraft,
    ) -> AgendaResult<Option<CalendarEvent>> {
        let Some(pos) = self.events.iter().position(|e| e.id == id) else {
            return Ok(None);
        };
        let Some(mut event) = draft.into_event() else {
            return Ok(None);
        };

        event.id = id.to_string();
        self.events[pos] = event.clone();
        self.persist_events()?;
        Ok(Some(event))
    }

    /// Delete an event by id. Returns whether anything was removed.
    pub fn remove_event(&mut self, id: &str) -> AgendaResult<bool> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.events.len() == before {
            return Ok(false);
        }

        self.persist_events()?;
        Ok(true)
    }

    /// Flip `date` in the custom non-working set: present → removed, absent →
    /// added. Returns whether the date is custom-non-working after the flip.
    /// Toggling twice restores the original state.
    pub fn toggle_non_working(&mut self, date: DateKey) -> AgendaResult<bool> {
        let now_set = if self.non_working.remove(&date) {
            false
        } else {
            self.non_working.insert(date);
            true
        };

        self.persist_non_working()?;
        Ok(now_set)
    }

    pub fn month_grid(&self, year: i32, month: i32) -> Vec<DayCell> {
        build_month_grid(year, month, &self.holidays, &self.non_working, &self.events)
    }

    pub fn year_grid(&self, year: i32) -> Vec<MonthGrid> {
        build_year_grid(year, &self.holidays, &self.non_working, &self.events)
    }

    fn persist_events(&mut self) -> AgendaResult<()> {
        let raw = serde_json::to_string(&self.events)?;
        self.storage.set(EVENTS_KEY, &raw)
    }

    fn persist_non_working(&mut self) -> AgendaResult<()> {
        let raw = serde_json::to_string(&self.non_working)?;
        self.storage.set(NON_WORKING_KEY, &raw)
    }
}

/// Read and decode a stored collection, defaulting to empty on absence or
/// malformed content.
fn load_json<S: Storage, T: DeserializeOwned + Default>(storage: &S, key: &str) -> T {
    match storage.get(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
        _ => T::default(),
    }
}
