//! Terminal rendering for grids and events.
//!
//! Cells come pre-classified from the grid generator; this module only maps
//! flags to colors. Non-working days show red, spillover cells dimmed, today
//! inverted, and days with events carry a `*` marker.

use agenda_core::{CalendarEvent, DayCell};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_HEADER: &str = "Sun Mon Tue Wed Thu Fri Sat";

/// Render one month grid with a title line.
pub fn month(year: i32, month0: u32, cells: &[DayCell], today: Option<NaiveDate>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", MONTH_NAMES[month0 as usize], year));
    out.push_str(WEEKDAY_HEADER);
    out.push('\n');

    for week in cells.chunks(7) {
        let row: Vec<String> = week.iter().map(|cell| cell_str(cell, today)).collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }

    out
}

fn cell_str(cell: &DayCell, today: Option<NaiveDate>) -> String {
    let marker = if cell.has_events { '*' } else { ' ' };
    let text = format!("{:>2}{}", cell.day_of_month, marker);

    if !cell.in_target_month {
        text.dimmed().to_string()
    } else if today == Some(cell.date.date()) {
        text.reversed().to_string()
    } else if cell.is_non_working {
        text.red().to_string()
    } else {
        text
    }
}

/// One-line event summary for list output.
pub fn event_line(event: &CalendarEvent) -> String {
    let mut line = format!("{}  {}", event.date, event.title.bold());
    if let Some(time) = event.time {
        line.push_str(&format!(" at {}", time));
    }
    if let Some(ref email) = event.notification_email {
        line.push_str(&format!("  (reminder to {})", email.dimmed()));
    }
    line.push_str(&format!("  [{}]", event.id.dimmed()));
    line
}
