//! Shift-to-event mapper
//!
//! Flattens heterogeneous shift records into the uniform list of calendar
//! events both views render from.

use vagtportal_domain::constants::{INSTRUCTOR_SUFFIX, SHIFT_TITLE_PREFIX};
use vagtportal_domain::{CalendarEvent, RawShift, RawVolunteer};

/// Flatten shifts into one calendar event per (shift, volunteer) pair.
///
/// Pure function. Output order preserves input order of shifts, then
/// volunteers within a shift; the list view relies on this when rendering
/// the volunteers of a single shift.
#[must_use]
pub fn map_to_events(shifts: &[RawShift]) -> Vec<CalendarEvent> {
    let mut events = Vec::new();

    for shift in shifts {
        for volunteer in &shift.volunteers {
            events.push(CalendarEvent { title: event_title(volunteer), start: shift.date.clone() });
        }
    }

    events
}

fn event_title(volunteer: &RawVolunteer) -> String {
    let mut title = format!("{}{}", SHIFT_TITLE_PREFIX, volunteer.name);
    if volunteer.is_instructor.unwrap_or(false) {
        title.push_str(INSTRUCTOR_SUFFIX);
    }
    title
}
