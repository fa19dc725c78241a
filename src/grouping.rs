//! Grouping of arbitrary dated records by ISO week.

use std::collections::BTreeMap;

use crate::IsoDate;
use crate::week::{IsoWeek, iso_week_info};

/// Records sharing one ISO week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGroup<T> {
    week: IsoWeek,
    items: Vec<T>,
}

impl<T> WeekGroup<T> {
    /// Returns the week key shared by the group
    pub const fn week(&self) -> IsoWeek {
        self.week
    }

    /// Returns the grouped records, in input order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the group, returning its records
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Buckets `items` by the ISO week of their date, newest week first.
///
/// `date_of` extracts the date to group by from each record. Within a group
/// the records keep their input order, so feeding a date-sorted input yields
/// date-sorted groups.
pub fn group_by_iso_week<T, F>(items: Vec<T>, date_of: F) -> Vec<WeekGroup<T>>
where
    F: Fn(&T) -> IsoDate,
{
    let mut buckets: BTreeMap<IsoWeek, Vec<T>> = BTreeMap::new();
    for item in items {
        let key = iso_week_info(date_of(&item));
        buckets.entry(key).or_default().push(item);
    }

    // descending by year then week
    buckets
        .into_iter()
        .rev()
        .map(|(week, items)| WeekGroup { week, items })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Entry {
        date: IsoDate,
        label: &'static str,
    }

    fn entry(date: &str, label: &'static str) -> Entry {
        Entry {
            date: date.parse().unwrap(),
            label,
        }
    }

    #[test]
    fn test_empty_input() {
        let groups = group_by_iso_week(Vec::<Entry>::new(), |e| e.date);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_single_week() {
        let items = vec![
            entry("2024-08-12", "mon"),
            entry("2024-08-15", "thu"),
            entry("2024-08-18", "sun"),
        ];
        let groups = group_by_iso_week(items, |e| e.date);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].week(), IsoWeek::new(2024, 33).unwrap());
        let labels: Vec<_> = groups[0].items().iter().map(|e| e.label).collect();
        assert_eq!(labels, ["mon", "thu", "sun"]);
    }

    #[test]
    fn test_newest_week_first() {
        let items = vec![
            entry("2024-01-02", "w1"),
            entry("2024-01-09", "w2"),
            entry("2024-01-16", "w3"),
        ];
        let groups = group_by_iso_week(items, |e| e.date);

        let weeks: Vec<_> = groups.iter().map(|g| g.week().week()).collect();
        assert_eq!(weeks, [3, 2, 1]);
    }

    #[test]
    fn test_year_boundary_split() {
        // December 31, 2024 already belongs to week 1 of 2025
        let items = vec![
            entry("2024-12-29", "old"),
            entry("2024-12-31", "new"),
            entry("2025-01-01", "new-too"),
        ];
        let groups = group_by_iso_week(items, |e| e.date);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].week(), IsoWeek::new(2025, 1).unwrap());
        assert_eq!(groups[1].week(), IsoWeek::new(2024, 52).unwrap());
        let labels: Vec<_> = groups[0].items().iter().map(|e| e.label).collect();
        assert_eq!(labels, ["new", "new-too"]);
    }

    #[test]
    fn test_descending_across_years() {
        let items = vec![
            entry("2023-06-01", "a"),
            entry("2024-06-01", "b"),
            entry("2022-06-01", "c"),
        ];
        let groups = group_by_iso_week(items, |e| e.date);

        let years: Vec<_> = groups.iter().map(|g| g.week().year()).collect();
        assert_eq!(years, [2024, 2023, 2022]);
    }

    #[test]
    fn test_input_order_kept_within_group() {
        let items = vec![
            entry("2024-08-15", "first"),
            entry("2024-08-12", "second"),
            entry("2024-08-14", "third"),
        ];
        let groups = group_by_iso_week(items, |e| e.date);

        assert_eq!(groups.len(), 1);
        let labels: Vec<_> = groups[0].items().iter().map(|e| e.label).collect();
        assert_eq!(labels, ["first", "second", "third"]);
    }

    #[test]
    fn test_into_items() {
        let items = vec![entry("2024-08-15", "only")];
        let groups = group_by_iso_week(items.clone(), |e| e.date);
        assert_eq!(groups.into_iter().next().unwrap().into_items(), items);
    }
}
