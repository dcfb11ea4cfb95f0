//! Date normalization: date-only strings, date+time pairs and ISO timestamps
//! resolved to instants in a given time zone.
//!
//! Every function has a `_in`/generic form taking the zone explicitly; the
//! short forms use [`chrono::Local`].

use chrono::{
    DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
};
use regex::Regex;
use std::sync::LazyLock;

static DATE_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date-only pattern"));

/// Offset-less timestamps, read as wall-clock time in the target zone.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// True when `s` is exactly `YYYY-MM-DD`.
pub fn is_date_only(s: &str) -> bool {
    DATE_ONLY.is_match(s)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// `HH:MM` or `HH:MM:SS`.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

/// Map a wall-clock time to an instant in `tz`.
///
/// Ambiguous times (DST fall-back) take the earliest instant; times inside a
/// DST gap move forward one hour.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => naive
            .checked_add_signed(TimeDelta::hours(1))
            .and_then(|shifted| tz.from_local_datetime(&shifted).earliest()),
    }
}

/// 00:00:00 of `date` in `tz`.
pub fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    resolve_local(tz, date.and_time(NaiveTime::MIN))
}

/// 23:59:59.999 of `date` in `tz`.
pub fn end_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .and_then(|n| resolve_local(tz, n))
}

/// Midnight of the calendar day `dt` falls on, in its own zone.
pub fn start_of_day<Tz: TimeZone>(dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    local_midnight(&dt.timezone(), dt.date_naive())
}

/// Parse a date-only string as local midnight, anything else as a timestamp.
///
/// `"2025-03-01"` is midnight of March 1 in `tz`, never UTC midnight shifted
/// into `tz`. Returns `None` when `s` cannot be parsed.
pub fn parse_date_only_or_full_in<Tz: TimeZone>(s: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if s.trim().is_empty() {
        return None;
    }

    if is_date_only(s) {
        return parse_date(s).and_then(|d| local_midnight(tz, d));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(tz));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(tz));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .and_then(|n| resolve_local(tz, n))
}

pub fn parse_date_only_or_full(s: &str) -> Option<DateTime<Local>> {
    parse_date_only_or_full_in(s, &Local)
}

/// Human-readable `YYYY-MM-DD HH:MM` rendering used by the CLI.
pub fn format_instant<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%Y-%m-%d %H:%M").to_string()
}
