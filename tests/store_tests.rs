mod common;
use common::{setup_test_db, temp_dir};

use chrono::Local;
use serde_json::json;
use superscheduler::db::seed::{DEFAULT_CATEGORIES, DEFAULT_SETTINGS};
use superscheduler::errors::AppError;
use superscheduler::models::{Category, Event, Index, Setting, Task, TaskStatus};
use superscheduler::{SchedulerStore, StoreLocation};

#[test]
fn test_new_store_is_seeded() {
    let store = SchedulerStore::in_memory().expect("open store");

    assert_eq!(store.count::<Category>().unwrap(), DEFAULT_CATEGORIES.len() as i64);
    assert_eq!(store.count::<Setting>().unwrap(), DEFAULT_SETTINGS.len() as i64);
    assert_eq!(store.count::<Event>().unwrap(), 0);
    assert_eq!(store.count::<Task>().unwrap(), 0);

    let work: Category = store.get("work").unwrap().expect("work category");
    assert_eq!(work.name, "Work");
    assert_eq!(work.color, "blue");
    assert_eq!(store.get_setting("theme").as_deref(), Some("light"));
    assert_eq!(store.get_setting("fontSize").as_deref(), Some("16"));
}

#[test]
fn test_seeding_does_not_overwrite_user_changes() {
    let db_path = setup_test_db("seed_reopen");

    let mut store = SchedulerStore::open(&db_path).expect("open store");
    assert!(store.set_setting("theme", "dark"));
    store.delete::<Category>("social").unwrap();
    store.close().unwrap();

    let mut store = SchedulerStore::open(&db_path).expect("reopen store");
    assert_eq!(store.get_setting("theme").as_deref(), Some("dark"));
    // Non-empty collection: the missing default is not re-added.
    assert_eq!(store.count::<Category>().unwrap(), 3);

    let report = store.seed_defaults().unwrap();
    assert!(report.is_empty());
}

#[test]
fn test_seeding_refills_an_emptied_collection() {
    let mut store = SchedulerStore::in_memory().unwrap();
    for (id, _, _) in DEFAULT_CATEGORIES {
        store.delete::<Category>(id).unwrap();
    }

    let report = store.seed_defaults().unwrap();
    assert_eq!(report.categories, 4);
    assert_eq!(report.settings, 0);
}

#[test]
fn test_add_existing_key_is_a_conflict() {
    let store = SchedulerStore::in_memory().unwrap();
    let event = Event::new("e1", "Standup", "2025-03-01").at("09:00");

    assert_eq!(store.add(&event).unwrap(), "e1");
    let err = store.add(&event).unwrap_err();
    assert!(matches!(err, AppError::WriteConflict { ref key, .. } if key == "e1"));

    let stored: Event = store.get("e1").unwrap().unwrap();
    assert_eq!(stored, event);
}

#[test]
fn test_update_inserts_or_replaces() {
    let store = SchedulerStore::in_memory().unwrap();

    let task = Task::new("t1", "Write report", "2025-03-02");
    store.update(&task).unwrap();
    assert_eq!(store.get::<Task>("t1").unwrap(), Some(task.clone()));

    let done = task.with_status(TaskStatus::Completed);
    store.update(&done).unwrap();
    let stored: Task = store.get("t1").unwrap().unwrap();
    assert_eq!(stored.status, TaskStatus::Completed);
    assert_eq!(store.count::<Task>().unwrap(), 1);
}

#[test]
fn test_get_missing_and_delete_absent() {
    let store = SchedulerStore::in_memory().unwrap();

    assert!(store.get::<Event>("nope").unwrap().is_none());
    store.delete::<Event>("nope").unwrap();
}

#[test]
fn test_get_all_and_get_by_index() {
    let store = SchedulerStore::in_memory().unwrap();

    store
        .add(&Event::new("a", "Gym", "2025-03-01").in_category("health"))
        .unwrap();
    store
        .add(&Event::new("b", "Dinner", "2025-03-01").in_category("social"))
        .unwrap();
    store
        .add(&Event::new("c", "Review", "2025-03-02").in_category("work"))
        .unwrap();

    let all: Vec<Event> = store.get_all().unwrap();
    assert_eq!(all.len(), 3);

    let on_first: Vec<Event> = store.get_by_index(Index::Date, "2025-03-01").unwrap();
    let mut ids: Vec<_> = on_first.iter().map(|e| e.id.as_str()).collect();
    ids.sort();
    assert_eq!(ids, ["a", "b"]);

    let work: Vec<Event> = store.get_by_index(Index::Category, "work").unwrap();
    assert_eq!(work.len(), 1);
    assert_eq!(work[0].id, "c");

    let none: Vec<Event> = store.get_by_index(Index::Date, "1999-01-01").unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_task_status_index() {
    let store = SchedulerStore::in_memory().unwrap();
    store.add(&Task::new("t1", "Open", "2025-03-01")).unwrap();
    store
        .add(&Task::new("t2", "Closed", "2025-03-01").with_status(TaskStatus::Completed))
        .unwrap();

    let completed: Vec<Task> = store.get_by_index(Index::Status, "completed").unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, "t2");

    let due: Vec<Task> = store.get_by_index(Index::DueDate, "2025-03-01").unwrap();
    assert_eq!(due.len(), 2);
}

#[test]
fn test_unknown_index_is_an_error() {
    let store = SchedulerStore::in_memory().unwrap();

    let err = store.get_by_index::<Event>(Index::Status, "pending").unwrap_err();
    assert!(matches!(err, AppError::UnknownIndex { .. }));

    let err = store.get_by_index::<Setting>(Index::Category, "x").unwrap_err();
    assert!(matches!(err, AppError::UnknownIndex { .. }));
}

#[test]
fn test_clear_all_data_keeps_categories_and_settings() {
    let store = SchedulerStore::in_memory().unwrap();
    store.add(&Event::new("e", "Event", "2025-03-01")).unwrap();
    store.add(&Task::new("t", "Task", "2025-03-01")).unwrap();
    assert!(store.set_setting("theme", "dark"));

    store.clear_all_data().unwrap();

    assert_eq!(store.count::<Event>().unwrap(), 0);
    assert_eq!(store.count::<Task>().unwrap(), 0);
    assert_eq!(store.count::<Category>().unwrap(), 4);
    assert_eq!(store.get_setting("theme").as_deref(), Some("dark"));
}

#[test]
fn test_settings_roundtrip() {
    let store = SchedulerStore::in_memory().unwrap();

    assert_eq!(store.get_setting("missing"), None);
    assert!(store.set_setting("missing", "now set"));
    assert_eq!(store.get_setting("missing").as_deref(), Some("now set"));

    let map = store.settings().unwrap();
    assert_eq!(map.len(), DEFAULT_SETTINGS.len() + 1);
    assert_eq!(map.get("weekStart").map(String::as_str), Some("sunday"));
}

#[test]
fn test_unknown_fields_survive_a_roundtrip() {
    let store = SchedulerStore::in_memory().unwrap();

    let mut event = Event::new("x", "Concert", "2025-05-05");
    event.extra.insert("reminder".into(), json!(15));
    event.extra.insert("attendees".into(), json!(["ann", "bo"]));
    store.add(&event).unwrap();

    let stored: Event = store.get("x").unwrap().unwrap();
    assert_eq!(stored.extra.get("reminder"), Some(&json!(15)));
    assert_eq!(stored.extra.get("attendees"), Some(&json!(["ann", "bo"])));
}

#[test]
fn test_operations_before_init_fail() {
    let store = SchedulerStore::new(StoreLocation::Memory);
    assert!(!store.is_ready());

    let err = store.get::<Event>("e").unwrap_err();
    assert!(matches!(err, AppError::NotInitialized));
}

#[test]
fn test_close_then_reinit() {
    let db_path = setup_test_db("close_reinit");
    let mut store = SchedulerStore::open(&db_path).unwrap();
    store.add(&Task::new("t", "Keep me", "2025-01-01")).unwrap();

    store.close().unwrap();
    assert!(matches!(
        store.count::<Task>().unwrap_err(),
        AppError::NotInitialized
    ));

    store.init().unwrap();
    store.init().unwrap();
    assert_eq!(store.count::<Task>().unwrap(), 1);
}

#[test]
fn test_init_failure_is_sticky() {
    // A directory cannot be opened as a database file.
    let dir = temp_dir("init_failure");
    let mut store = SchedulerStore::new(StoreLocation::File(dir));

    assert!(matches!(
        store.init().unwrap_err(),
        AppError::Initialization(_)
    ));
    assert!(matches!(
        store.init().unwrap_err(),
        AppError::Initialization(_)
    ));
    assert!(matches!(
        store.get::<Event>("e").unwrap_err(),
        AppError::Initialization(_)
    ));
}

#[test]
fn test_open_creates_parent_directories() {
    let dir = temp_dir("nested_db");
    let db_path = dir.join("a").join("b").join("store.sqlite");

    let store = SchedulerStore::open(&db_path).unwrap();
    assert!(store.is_ready());
    assert!(db_path.exists());
}

#[test]
fn test_upcoming_tasks_from_store() {
    let store = SchedulerStore::in_memory().unwrap();
    let today = Local::now().date_naive();
    let fmt = |d: chrono::NaiveDate| d.format("%Y-%m-%d").to_string();

    store.add(&Task::new("today", "Due today", fmt(today))).unwrap();
    store
        .add(&Task::new("done", "Already done", fmt(today)).with_status(TaskStatus::Completed))
        .unwrap();
    store
        .add(&Task::new("later", "Far away", fmt(today + chrono::TimeDelta::days(30))))
        .unwrap();

    let upcoming = store.upcoming_tasks(7).unwrap();
    let ids: Vec<_> = upcoming.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["today"]);
}

/// Write a task body directly, the way another client would.
fn insert_raw_task(db_path: &str, id: &str, status_column: Option<&str>, body: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.execute(
        "INSERT INTO tasks (id, due_date, category, status, body) VALUES (?1, ?2, '', ?3, ?4)",
        rusqlite::params![id, today_string(), status_column, body],
    )
    .expect("insert raw task");
}

fn today_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[test]
fn test_foreign_task_statuses_are_readable() {
    let db_path = setup_test_db("foreign_status");
    SchedulerStore::open(&db_path).unwrap().close().unwrap();

    let due = today_string();
    insert_raw_task(
        &db_path,
        "wip",
        Some("in-progress"),
        &format!(r#"{{"id":"wip","title":"Half done","dueDate":"{due}","status":"in-progress"}}"#),
    );
    insert_raw_task(
        &db_path,
        "nul",
        None,
        &format!(r#"{{"id":"nul","title":"No status","dueDate":"{due}","status":null}}"#),
    );

    let store = SchedulerStore::open(&db_path).unwrap();
    let tasks: Vec<Task> = store.get_all().unwrap();
    assert_eq!(tasks.len(), 2);

    let wip: Task = store.get("wip").unwrap().unwrap();
    assert_eq!(wip.status, TaskStatus::Other("in-progress".into()));
    assert!(!wip.is_completed());
    let nul: Task = store.get("nul").unwrap().unwrap();
    assert_eq!(nul.status, TaskStatus::Pending);

    // Neither counts as completed, so both are upcoming.
    assert_eq!(store.upcoming_tasks(7).unwrap().len(), 2);

    let by_status: Vec<Task> = store.get_by_index(Index::Status, "in-progress").unwrap();
    assert_eq!(by_status.len(), 1);

    // Rewriting keeps the foreign value.
    store.update(&wip).unwrap();
    let again: Task = store.get("wip").unwrap().unwrap();
    assert_eq!(again.status.as_str(), "in-progress");
}

#[test]
fn test_task_status_serialization() {
    let task: Task =
        serde_json::from_str(r#"{"id":"x","dueDate":"2025-06-11","status":"in-progress"}"#).unwrap();
    assert_eq!(task.status, TaskStatus::Other("in-progress".into()));
    assert!(serde_json::to_string(&task).unwrap().contains(r#""status":"in-progress""#));

    let task: Task = serde_json::from_str(r#"{"id":"y","status":null}"#).unwrap();
    assert_eq!(task.status, TaskStatus::Pending);

    let task: Task = serde_json::from_str(r#"{"id":"z"}"#).unwrap();
    assert_eq!(task.status, TaskStatus::Pending);

    let done: Task = serde_json::from_str(r#"{"id":"d","status":"completed"}"#).unwrap();
    assert!(done.is_completed());
}
