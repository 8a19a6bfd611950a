//! Month grid generation.
//!
//! The single home of the 6×7 day-matrix arithmetic. Both the month view and
//! the year overview build their cells here; rendering layers only consume
//! the output and never touch the date math themselves.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::date_key::DateKey;
use crate::event::CalendarEvent;
use crate::holidays::HolidaySet;

/// Weeks shown per month.
pub const GRID_WEEKS: usize = 6;

/// Cells per month grid: 6 weeks × 7 days.
pub const GRID_CELLS: usize = GRID_WEEKS * 7;

/// One cell of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: DateKey,
    /// The day number to display, 1..=31.
    pub day_of_month: u32,
    /// True only for days belonging to the month being rendered; leading and
    /// trailing spillover cells are false.
    pub in_target_month: bool,
    pub is_weekend: bool,
    pub is_holiday: bool,
    /// `is_weekend || is_holiday || date ∈ custom non-working set`.
    pub is_non_working: bool,
    pub has_events: bool,
}

/// A month's worth of cells, as produced for the year overview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    /// Zero-based month (January = 0).
    pub month: u32,
    pub cells: Vec<DayCell>,
}

/// Resolve a zero-based month that may be out of range by borrowing or
/// carrying whole years: month -1 is December of the previous year, month 12
/// is January of the next.
fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    (year + month.div_euclid(12), month.rem_euclid(12) as u32)
}

/// Build the 42-cell grid for `month` (zero-based) of `year`.
///
/// Cells run Sunday-first in strict chronological order: leading days from
/// the previous month (as many as the target month's first weekday needs),
/// every day of the target month, then days from the next month until the
/// sixth week is full. Cell 0 is always a Sunday and cell 41 a Saturday.
///
/// Pure function of its inputs; identical inputs yield an identical grid.
///
/// # Panics
///
/// Panics for years outside chrono's representable range (roughly ±262000).
pub fn build_month_grid(
    year: i32,
    month: i32,
    holidays: &HolidaySet,
    custom_non_working: &BTreeSet<DateKey>,
    events: &[CalendarEvent],
) -> Vec<DayCell> {
    let (year, month0) = normalize_month(year, month);

    let first_of_month =
        NaiveDate::from_ymd_opt(year, month0 + 1, 1).expect("year within chrono's supported range");

    // Previous-month cells needed before day 1; zero when the month starts
    // on a Sunday.
    let leading = u64::from(first_of_month.weekday().num_days_from_sunday());
    let grid_start = first_of_month - Days::new(leading);

    grid_start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| {
            let key = DateKey::new(date);
            let is_weekend = key.is_weekend();
            let is_holiday = holidays.contains(key);
            DayCell {
                date: key,
                day_of_month: date.day(),
                in_target_month: date.year() == year && date.month0() == month0,
                is_weekend,
                is_holiday,
                is_non_working: is_weekend || is_holiday || custom_non_working.contains(&key),
                has_events: events.iter().any(|e| e.date == key),
            }
        })
        .collect()
}

/// Build the twelve month grids of `year`, for the year overview.
pub fn build_year_grid(
    year: i32,
    holidays: &HolidaySet,
    custom_non_working: &BTreeSet<DateKey>,
    events: &[CalendarEvent],
) -> Vec<MonthGrid> {
    (0..12)
        .map(|month| MonthGrid {
            year,
            month: month as u32,
            cells: build_month_grid(year, month, holidays, custom_non_working, events),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventDraft;
    use chrono::Weekday;

    fn empty_grid(year: i32, month: i32) -> Vec<DayCell> {
        build_month_grid(year, month, &HolidaySet::new(), &BTreeSet::new(), &[])
    }

    fn event_on(date: &str) -> CalendarEvent {
        EventDraft {
            title: "Test".to_string(),
            date: Some(date.parse().unwrap()),
            ..Default::default()
        }
        .into_event()
        .unwrap()
    }

    #[test]
    fn test_every_month_has_exactly_42_cells() {
        for year in [1999, 2000, 2024, 2025, 2100] {
            for month in 0..12 {
                assert_eq!(
                    empty_grid(year, month).len(),
                    GRID_CELLS,
                    "wrong cell count for {}-{}",
                    year,
                    month
                );
            }
        }
    }

    #[test]
    fn test_grid_starts_sunday_and_ends_saturday() {
        for month in 0..12 {
            let cells = empty_grid(2025, month);
            assert_eq!(cells[0].date.date().weekday(), Weekday::Sun);
            assert_eq!(cells[41].date.date().weekday(), Weekday::Sat);
        }
    }

    #[test]
    fn test_cells_are_consecutive_days() {
        let cells = empty_grid(2025, 6);
        for pair in cells.windows(2) {
            assert_eq!(pair[0].date.succ(), pair[1].date);
        }
    }

    #[test]
    fn test_leap_year_february() {
        let feb_2024 = empty_grid(2024, 1);
        assert_eq!(feb_2024.iter().filter(|c| c.in_target_month).count(), 29);

        let feb_2025 = empty_grid(2025, 1);
        assert_eq!(feb_2025.iter().filter(|c| c.in_target_month).count(), 28);

        // Century rule: 1900 was not a leap year, 2000 was
        assert_eq!(empty_grid(1900, 1).iter().filter(|c| c.in_target_month).count(), 28);
        assert_eq!(empty_grid(2000, 1).iter().filter(|c| c.in_target_month).count(), 29);
    }

    #[test]
    fn test_in_target_month_count_matches_month_length() {
        // January has 31 days, April 30
        assert_eq!(empty_grid(2025, 0).iter().filter(|c| c.in_target_month).count(), 31);
        assert_eq!(empty_grid(2025, 3).iter().filter(|c| c.in_target_month).count(), 30);
    }

    #[test]
    fn test_january_2025_layout() {
        // January 1, 2025 is a Wednesday: three leading December cells, then
        // the holiday on cell index 3.
        let holidays: HolidaySet =
            [("2025-01-01".parse().unwrap(), "Año Nuevo".to_string())].into_iter().collect();
        let cells = build_month_grid(2025, 0, &holidays, &BTreeSet::new(), &[]);

        assert_eq!(cells[0].date.to_string(), "2024-12-29");
        assert_eq!(cells[1].date.to_string(), "2024-12-30");
        assert_eq!(cells[2].date.to_string(), "2024-12-31");
        assert!(!cells[2].in_target_month);

        let new_year = &cells[3];
        assert_eq!(new_year.date.to_string(), "2025-01-01");
        assert_eq!(new_year.day_of_month, 1);
        assert!(new_year.in_target_month);
        assert!(new_year.is_holiday);
        assert!(new_year.is_non_working);
        assert!(!new_year.is_weekend);
    }

    #[test]
    fn test_weekends_are_always_non_working() {
        // No holidays, no custom days: weekends still come back non-working
        let cells = empty_grid(2025, 5);
        for cell in &cells {
            if cell.is_weekend {
                assert!(cell.is_non_working, "{} should be non-working", cell.date);
            } else {
                assert!(!cell.is_non_working, "{} should be working", cell.date);
            }
        }
    }

    #[test]
    fn test_custom_non_working_day_is_flagged() {
        let custom: BTreeSet<DateKey> = ["2025-06-10".parse().unwrap()].into();
        let cells = build_month_grid(2025, 5, &HolidaySet::new(), &custom, &[]);

        let marked = cells.iter().find(|c| c.date.to_string() == "2025-06-10").unwrap();
        assert!(marked.is_non_working);
        assert!(!marked.is_weekend);
        assert!(!marked.is_holiday);
    }

    #[test]
    fn test_events_mark_their_cell_only() {
        let events = [event_on("2025-05-14")];
        let cells = build_month_grid(2025, 4, &HolidaySet::new(), &BTreeSet::new(), &events);

        assert_eq!(cells.iter().filter(|c| c.has_events).count(), 1);
        assert!(cells.iter().find(|c| c.date.to_string() == "2025-05-14").unwrap().has_events);
    }

    #[test]
    fn test_spillover_cells_are_classified_too() {
        // An event and a holiday on trailing next-month days still show up
        let holidays: HolidaySet =
            [("2025-02-01".parse().unwrap(), "Test".to_string())].into_iter().collect();
        let events = [event_on("2025-02-01")];
        let cells = build_month_grid(2025, 0, &holidays, &BTreeSet::new(), &events);

        let trailing = cells.iter().find(|c| c.date.to_string() == "2025-02-01").unwrap();
        assert!(!trailing.in_target_month);
        assert!(trailing.is_holiday);
        assert!(trailing.has_events);
    }

    #[test]
    fn test_out_of_range_months_normalize() {
        assert_eq!(empty_grid(2025, -1), empty_grid(2024, 11));
        assert_eq!(empty_grid(2025, 12), empty_grid(2026, 0));
        assert_eq!(empty_grid(2025, -13), empty_grid(2023, 11));
    }

    #[test]
    fn test_grid_is_deterministic() {
        let holidays = HolidaySet::defaults_2025();
        let custom: BTreeSet<DateKey> = ["2025-03-03".parse().unwrap()].into();
        let events = [event_on("2025-03-10")];

        let a = build_month_grid(2025, 2, &holidays, &custom, &events);
        let b = build_month_grid(2025, 2, &holidays, &custom, &events);
        assert_eq!(a, b);
    }

    #[test]
    fn test_year_grid_covers_all_twelve_months() {
        let grids = build_year_grid(2025, &HolidaySet::new(), &BTreeSet::new(), &[]);
        assert_eq!(grids.len(), 12);
        for (i, grid) in grids.iter().enumerate() {
            assert_eq!(grid.month, i as u32);
            assert_eq!(grid.cells.len(), GRID_CELLS);
        }
        // Month grid and year overview share the same arithmetic
        assert_eq!(grids[0].cells, empty_grid(2025, 0));
    }
}
