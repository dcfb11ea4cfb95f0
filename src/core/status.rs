use crate::models::{Task, TaskState};
use crate::utils::date::{parse_date_only_or_full_in, start_of_day};
use chrono::{DateTime, Local, TimeZone};

/// Derived state of `task` as seen at `now`.
///
/// Overdue means the due date's local midnight is strictly before today's
/// local midnight. Unparsable due dates are never overdue.
pub fn task_state_at<Tz: TimeZone>(task: &Task, now: &DateTime<Tz>) -> TaskState {
    if task.is_completed() {
        return TaskState::Completed;
    }

    let due = parse_date_only_or_full_in(&task.due_date, &now.timezone());
    match (due.as_ref().and_then(start_of_day), start_of_day(now)) {
        (Some(due_day), Some(today)) if due_day < today => TaskState::Overdue,
        _ => TaskState::Pending,
    }
}

pub fn task_state(task: &Task) -> TaskState {
    task_state_at(task, &Local::now())
}
