//! Shift and calendar event types
//!
//! `RawShift`/`RawVolunteer` mirror the CMS wire format (capitalized Strapi
//! attribute names); `CalendarEvent` is the flattened display-ready unit.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::{MONTH_KEY_FORMAT, SHIFT_TITLE_PREFIX};

/// Volunteer embedded in a shift record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawVolunteer {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Instructor", default)]
    pub is_instructor: Option<bool>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "Phone", default)]
    pub phone: Option<String>,
}

/// One scheduled work shift as delivered by the CMS, one page at a time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawShift {
    pub id: i64,
    #[serde(rename = "Date")]
    pub date: String,
    pub volunteers: Vec<RawVolunteer>,
}

/// Flattened calendar event, one per (shift, volunteer) pair
///
/// Events have no identity beyond `(title, start)`; duplicates are legal
/// and expected when two volunteers share a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start: String,
}

impl CalendarEvent {
    /// Derive the `YYYY-MM` month key from the serialized start timestamp.
    #[must_use]
    pub fn month_key(&self) -> Option<String> {
        month_key_of(&self.start)
    }

    /// Volunteer line for list rendering: the title without the shift
    /// prefix, e.g. `"Bo (Instruktør)"`.
    #[must_use]
    pub fn volunteer_label(&self) -> &str {
        self.title.strip_prefix(SHIFT_TITLE_PREFIX).unwrap_or(&self.title)
    }
}

/// Derive the `YYYY-MM` month key from a serialized timestamp.
///
/// Accepts RFC 3339 timestamps, naive date-times without an offset, and
/// plain dates. Returns `None` for anything unparseable; such values cannot
/// be placed in the list view.
#[must_use]
pub fn month_key_of(start: &str) -> Option<String> {
    let value = start.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.format(MONTH_KEY_FORMAT).to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.format(MONTH_KEY_FORMAT).to_string());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.format(MONTH_KEY_FORMAT).to_string());
    }

    None
}
