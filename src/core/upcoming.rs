//! Upcoming-task filter: open tasks due between today and `days` days ahead.

use crate::models::Task;
use crate::utils::date::{end_of_day, parse_date_only_or_full_in, start_of_day};
use chrono::{DateTime, Days, NaiveDate, TimeZone};

pub const DEFAULT_UPCOMING_DAYS: u32 = 7;

/// Keep the tasks whose due day lies in `[today, today + days]` (both ends
/// inclusive, whole days) and that are not completed, sorted by due date.
///
/// Tasks with an unparsable due date are dropped.
pub fn filter_upcoming<Tz: TimeZone>(tasks: Vec<Task>, now: &DateTime<Tz>, days: u32) -> Vec<Task> {
    let tz = now.timezone();

    let Some(today_start) = start_of_day(now) else {
        return Vec::new();
    };
    // Windows reaching past the calendar's end stop at its last day.
    let last_day = today_start
        .date_naive()
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX);
    // None only when the last day is not representable in `tz`: no upper bound.
    let window_end = end_of_day(&tz, last_day);

    let mut upcoming: Vec<Task> = tasks
        .into_iter()
        .filter(|task| !task.is_completed())
        .filter(|task| {
            parse_date_only_or_full_in(&task.due_date, &tz)
                .as_ref()
                .and_then(start_of_day)
                .is_some_and(|day| {
                    day >= today_start && window_end.as_ref().is_none_or(|end| day <= *end)
                })
        })
        .collect();

    sort_by_due_date(&mut upcoming, &tz);
    upcoming
}

/// Stable ascending sort on the parsed due instant.
///
/// Unparsable due dates sort before every valid date, including dates
/// before 1970.
pub fn sort_by_due_date<Tz: TimeZone>(tasks: &mut [Task], tz: &Tz) {
    tasks.sort_by_cached_key(|task| {
        parse_date_only_or_full_in(&task.due_date, tz).map(|dt| dt.timestamp_millis())
    });
}
