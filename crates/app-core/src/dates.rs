//! Publication dates for posts and albums
//!
//! Data files carry dates as ISO calendar dates (`2025-10-05`) or full
//! timestamps. Lists are shown newest first, and dates are displayed in the
//! long US form (`October 5, 2025`).

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::cmp::Ordering;

const NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a date string from a data file into the instant it names
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` timestamps and
/// `YYYY-MM-DD` dates. Naive timestamps are UTC and bare dates are midnight
/// UTC. Returns `None` for anything else.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw, NAIVE_DATETIME_FORMAT).ok().or_else(|| {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Parse the calendar date a date string was written with
///
/// Timestamps keep the date in their own offset, so
/// `2025-10-05T23:00:00-05:00` is October 5.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, NAIVE_DATETIME_FORMAT)
        .ok()
        .map(|datetime| datetime.date())
}

/// Format a date as `Month D, YYYY`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Anything with a publication date
pub trait Dated {
    /// Raw date string as stored in the data file
    fn date_str(&self) -> &str;

    /// Publication instant, used for ordering
    fn published(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.date_str())
    }

    /// Date for display; unparseable dates are shown as written
    fn display_date(&self) -> String {
        parse_date(self.date_str())
            .map(format_long_date)
            .unwrap_or_else(|| self.date_str().to_string())
    }
}

/// Newest-first ordering. Items without a valid date go last.
pub fn newest_first<T: Dated>(a: &T, b: &T) -> Ordering {
    match (a.published(), b.published()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort items newest first. The sort is stable.
pub fn sort_newest_first<T: Dated>(items: &mut [T]) {
    items.sort_by(newest_first);
}

/// The newest item, or `None` for an empty list
///
/// Ties go to the item that appears first, matching the head of
/// [`sort_newest_first`].
pub fn latest<T: Dated>(items: &[T]) -> Option<&T> {
    items.iter().min_by(|a, b| newest_first(*a, *b))
}
