//! Fixed (predefined) holidays.

use std::collections::BTreeMap;

use crate::date_key::DateKey;

/// Lookup table from date key to holiday name.
///
/// The grid generator only tests membership; names are for display.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    by_date: BTreeMap<DateKey, String>,
}

impl HolidaySet {
    pub fn new() -> Self {
        HolidaySet::default()
    }

    /// The predefined holidays the calendar ships with.
    pub fn defaults_2025() -> Self {
        [
            (2025, 1, 1, "Año Nuevo"),
            (2025, 5, 1, "Día del Trabajo"),
            (2025, 12, 25, "Navidad"),
        ]
        .into_iter()
        .map(|(y, m, d, name)| {
            let date = DateKey::from_ymd(y, m, d).expect("valid holiday date literal");
            (date, name.to_string())
        })
        .collect()
    }

    pub fn insert(&mut self, date: DateKey, name: impl Into<String>) {
        self.by_date.insert(date, name.into());
    }

    pub fn contains(&self, date: DateKey) -> bool {
        self.by_date.contains_key(&date)
    }

    pub fn name_of(&self, date: DateKey) -> Option<&str> {
        self.by_date.get(&date).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DateKey, &str)> {
        self.by_date.iter().map(|(date, name)| (*date, name.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

impl FromIterator<(DateKey, String)> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = (DateKey, String)>>(iter: I) -> Self {
        HolidaySet {
            by_date: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_contain_the_fixed_2025_holidays() {
        let holidays = HolidaySet::defaults_2025();
        let new_year: DateKey = "2025-01-01".parse().unwrap();

        assert!(holidays.contains(new_year));
        assert_eq!(holidays.name_of(new_year), Some("Año Nuevo"));
        assert!(holidays.contains("2025-05-01".parse().unwrap()));
        assert!(holidays.contains("2025-12-25".parse().unwrap()));
        assert!(!holidays.contains("2025-07-04".parse().unwrap()));
    }

    #[test]
    fn test_insert_and_iterate() {
        let mut holidays = HolidaySet::new();
        assert!(holidays.is_empty());

        holidays.insert("2026-01-01".parse().unwrap(), "Año Nuevo");
        let collected: Vec<_> = holidays.iter().collect();
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].1, "Año Nuevo");
    }
}
