//! Shift grouper for the chronological list view
//!
//! Re-aggregates the flat event list by exact timestamp (a "shift") and then
//! by calendar month, sorted and filtered to current/future months.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::warn;
use vagtportal_domain::constants::MONTH_KEY_FORMAT;
use vagtportal_domain::{month_key_of, CalendarEvent};

/// Events partitioned by their serialized start value.
///
/// Grouping is byte-equality on the `start` string: two events land in the
/// same group only if their start values are identical. A timezone or
/// precision mismatch between otherwise-simultaneous shifts therefore
/// creates separate groups.
pub type ShiftGroups = BTreeMap<String, Vec<CalendarEvent>>;

/// Ordered month-key → shift-key → events mapping for the list view
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MonthGroups {
    months: BTreeMap<String, ShiftGroups>,
}

impl MonthGroups {
    /// True when no shift survived the current/future-month filter. The
    /// presentation layer must render an explicit "Ingen kommende vagter
    /// fundet" state in this case, not an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    #[must_use]
    pub fn month_count(&self) -> usize {
        self.months.len()
    }

    /// Month keys in ascending order.
    pub fn month_keys(&self) -> impl Iterator<Item = &str> {
        self.months.keys().map(String::as_str)
    }

    /// Iterate months in ascending order with their shift groups.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShiftGroups)> {
        self.months.iter().map(|(key, shifts)| (key.as_str(), shifts))
    }

    /// Shift groups of one month, keyed and ordered by their timestamp
    /// string.
    #[must_use]
    pub fn shifts(&self, month_key: &str) -> Option<&ShiftGroups> {
        self.months.get(month_key)
    }

    /// Number of distinct shifts in a month ("3 vagter").
    #[must_use]
    pub fn shift_count(&self, month_key: &str) -> usize {
        self.months.get(month_key).map_or(0, ShiftGroups::len)
    }
}

/// Partition events into shift groups keyed by their exact `start` value.
#[must_use]
pub fn group_by_shift(events: &[CalendarEvent]) -> ShiftGroups {
    let mut groups = ShiftGroups::new();

    for event in events {
        groups.entry(event.start.clone()).or_default().push(event.clone());
    }

    groups
}

/// Group events for the list view: by shift, then by month, keeping only
/// the current and future months relative to `now`.
///
/// A shift whose start value cannot be parsed has no month to live in and
/// is dropped from the list view with a warning.
#[must_use]
pub fn group_for_list(events: &[CalendarEvent], now: DateTime<Utc>) -> MonthGroups {
    let current_month = now.format(MONTH_KEY_FORMAT).to_string();
    let mut months: BTreeMap<String, ShiftGroups> = BTreeMap::new();

    for (shift_key, group) in group_by_shift(events) {
        let Some(month_key) = month_key_of(&shift_key) else {
            warn!(shift_key = %shift_key, "dropping shift with unparseable start from list view");
            continue;
        };

        if month_key < current_month {
            continue;
        }

        months.entry(month_key).or_default().insert(shift_key, group);
    }

    MonthGroups { months }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn event(title: &str, start: &str) -> CalendarEvent {
        CalendarEvent { title: title.to_string(), start: start.to_string() }
    }

    fn june_july_events() -> Vec<CalendarEvent> {
        vec![
            event("Vagt: Anna", "2025-06-01T08:00:00Z"),
            event("Vagt: Bo (Instruktør)", "2025-06-01T08:00:00Z"),
            event("Vagt: Cai", "2025-07-01T08:00:00Z"),
        ]
    }

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).single().unwrap()
    }

    #[test]
    fn groups_shared_start_into_one_shift() {
        let groups = group_by_shift(&june_july_events());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["2025-06-01T08:00:00Z"].len(), 2);
        assert_eq!(groups["2025-07-01T08:00:00Z"].len(), 1);
    }

    #[test]
    fn byte_inequality_creates_separate_shifts() {
        // Same instant, different serialization: grouping is on the raw
        // string, so these stay apart.
        let events = vec![
            event("Vagt: Anna", "2025-06-01T08:00:00Z"),
            event("Vagt: Bo", "2025-06-01T10:00:00+02:00"),
        ];

        let groups = group_by_shift(&events);

        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn retains_current_and_future_months_sorted() {
        let grouped = group_for_list(&june_july_events(), utc(2025, 6, 15));

        let keys: Vec<&str> = grouped.month_keys().collect();
        assert_eq!(keys, vec!["2025-06", "2025-07"]);
        assert_eq!(grouped.shift_count("2025-06"), 1);
        assert_eq!(grouped.shift_count("2025-07"), 1);

        let june = grouped.shifts("2025-06").unwrap();
        assert_eq!(june["2025-06-01T08:00:00Z"].len(), 2);
        let july = grouped.shifts("2025-07").unwrap();
        assert_eq!(july["2025-07-01T08:00:00Z"].len(), 1);
    }

    #[test]
    fn filters_everything_before_the_current_month() {
        let grouped = group_for_list(&june_july_events(), utc(2025, 8, 1));

        assert!(grouped.is_empty());
        assert_eq!(grouped.month_count(), 0);
    }

    #[test]
    fn no_month_key_precedes_the_current_month() {
        let now = utc(2025, 7, 1);
        let grouped = group_for_list(&june_july_events(), now);

        let current = now.format(MONTH_KEY_FORMAT).to_string();
        assert!(grouped.month_keys().all(|key| key >= current.as_str()));
    }

    #[test]
    fn grouping_is_idempotent_for_fixed_now() {
        let events = june_july_events();
        let now = utc(2025, 6, 15);

        assert_eq!(group_for_list(&events, now), group_for_list(&events, now));
    }

    #[test]
    fn shifts_within_a_month_are_sorted_by_timestamp_string() {
        let events = vec![
            event("Vagt: Cai", "2025-06-20T08:00:00Z"),
            event("Vagt: Anna", "2025-06-01T08:00:00Z"),
            event("Vagt: Bo", "2025-06-07T08:00:00Z"),
        ];

        let grouped = group_for_list(&events, utc(2025, 6, 1));
        let june = grouped.shifts("2025-06").unwrap();

        let shift_keys: Vec<&String> = june.keys().collect();
        assert_eq!(
            shift_keys,
            vec!["2025-06-01T08:00:00Z", "2025-06-07T08:00:00Z", "2025-06-20T08:00:00Z"]
        );
    }

    #[test]
    fn unparseable_start_is_dropped_from_the_list() {
        let events =
            vec![event("Vagt: Anna", "ukendt dato"), event("Vagt: Bo", "2025-06-01T08:00:00Z")];

        let grouped = group_for_list(&events, utc(2025, 6, 1));

        assert_eq!(grouped.month_count(), 1);
        assert_eq!(grouped.shift_count("2025-06"), 1);
    }

    #[test]
    fn duplicate_events_survive_grouping() {
        let events = vec![
            event("Vagt: Anna", "2025-06-01T08:00:00Z"),
            event("Vagt: Anna", "2025-06-01T08:00:00Z"),
        ];

        let grouped = group_for_list(&events, utc(2025, 6, 1));
        let june = grouped.shifts("2025-06").unwrap();

        assert_eq!(june["2025-06-01T08:00:00Z"].len(), 2);
    }
}
