//! Show the grid for a single month.

use agenda_core::{CalendarSession, Storage};
use anyhow::Result;
use chrono::{Datelike, Local};

use crate::render;

pub fn run<S: Storage>(
    session: &CalendarSession<S>,
    year: Option<i32>,
    month: Option<u32>,
) -> Result<()> {
    let today = Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());
    let month1 = month.unwrap_or_else(|| today.month());
    anyhow::ensure!((1..=12).contains(&month1), "month must be between 1 and 12");

    let month0 = month1 - 1;
    let cells = session.month_grid(year, month0 as i32);
    print!("{}", render::month(year, month0, &cells, Some(today)));

    // Name the fixed holidays that fall inside this month
    for cell in cells.iter().filter(|c| c.in_target_month && c.is_holiday) {
        if let Some(name) = session.holidays().name_of(cell.date) {
            println!("{}  {}", cell.date, name);
        }
    }

    Ok(())
}
