//! Show the twelve-month year overview.

use agenda_core::{CalendarSession, Storage};
use anyhow::Result;
use chrono::{Datelike, Local};

use crate::render;

pub fn run<S: Storage>(session: &CalendarSession<S>, year: Option<i32>) -> Result<()> {
    let today = Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());

    for grid in session.year_grid(year) {
        println!("{}", render::month(grid.year, grid.month, &grid.cells, Some(today)));
    }

    Ok(())
}
