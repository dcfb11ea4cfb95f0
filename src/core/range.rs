//! Start/end instants of a calendar event.

use crate::models::Event;
use crate::utils::date::{parse_date, parse_date_only_or_full_in, parse_time, resolve_local};
use chrono::{DateTime, Local, NaiveDate, TimeDelta, TimeZone};

/// Minutes assumed when an event carries no usable end.
pub const DEFAULT_EVENT_MINUTES: i64 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct EventRange<Tz: TimeZone> {
    pub start: Option<DateTime<Tz>>,
    pub end: Option<DateTime<Tz>>,
}

fn present(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|v| !v.trim().is_empty())
}

fn on_day<Tz: TimeZone>(tz: &Tz, day: NaiveDate, time: &str) -> Option<DateTime<Tz>> {
    parse_time(time).and_then(|t| resolve_local(tz, day.and_time(t)))
}

/// Instant from an optional date and an optional time.
///
/// - date only: local midnight (or the timestamp it spells out)
/// - date + time: that wall-clock time
/// - time only: that time today
fn build_instant<Tz: TimeZone>(
    date: Option<&str>,
    time: Option<&str>,
    now: &DateTime<Tz>,
) -> Option<DateTime<Tz>> {
    let tz = now.timezone();
    match (date, time) {
        (None, None) => None,
        (Some(d), None) => parse_date_only_or_full_in(d, &tz),
        (Some(d), Some(t)) => parse_date(d).and_then(|day| on_day(&tz, day, t)),
        (None, Some(t)) => on_day(&tz, now.date_naive(), t),
    }
}

/// Resolve an event's range relative to `now` (used for time-only events).
///
/// The end follows this precedence:
/// 1. `endDate` + `endTime`
/// 2. `endTime` alone, on the start's calendar day
/// 3. `endDate` alone, at 23:59:59 of that day
/// 4. start + one hour
pub fn event_range_at<Tz: TimeZone>(event: &Event, now: &DateTime<Tz>) -> EventRange<Tz> {
    let tz = now.timezone();

    let date = Some(event.date.as_str()).filter(|d| !d.trim().is_empty());
    let start = build_instant(date, present(&event.time), now)
        .or_else(|| build_instant(present(&event.start_date), present(&event.start_time), now));

    let end = match (present(&event.end_date), present(&event.end_time)) {
        (Some(d), Some(t)) => build_instant(Some(d), Some(t), now),
        (None, Some(t)) => start
            .as_ref()
            .and_then(|s| on_day(&tz, s.date_naive(), t)),
        (Some(d), None) => parse_date_only_or_full_in(d, &tz)
            .and_then(|day| day.date_naive().and_hms_opt(23, 59, 59))
            .and_then(|n| resolve_local(&tz, n)),
        (None, None) => None,
    };

    let end = end.or_else(|| {
        start
            .as_ref()
            .map(|s| s.clone() + TimeDelta::minutes(DEFAULT_EVENT_MINUTES))
    });

    EventRange { start, end }
}

pub fn event_range(event: &Event) -> EventRange<Local> {
    event_range_at(event, &Local::now())
}
