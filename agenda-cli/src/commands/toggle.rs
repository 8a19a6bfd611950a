//! Toggle a custom non-working day.

use agenda_core::{CalendarSession, DateKey, Storage};
use anyhow::Result;

pub fn run<S: Storage>(session: &mut CalendarSession<S>, date: &str) -> Result<()> {
    let date: DateKey = date.parse()?;

    if session.toggle_non_working(date)? {
        println!("{} marked as non-working", date);
    } else {
        println!("{} is a regular day again", date);
    }

    Ok(())
}
