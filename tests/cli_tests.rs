use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, sched, setup_test_db, temp_dir, temp_out, web_root};

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[test]
fn test_init_seeds_defaults() {
    let db_path = setup_test_db("cli_init");

    sched()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized").and(contains("4 categories")));

    sched()
        .args(["--db", &db_path, "category", "list"])
        .assert()
        .success()
        .stdout(contains("Work").and(contains("Social")));
}

#[test]
fn test_event_add_list_show_del() {
    let db_path = setup_test_db("cli_event");
    init_db(&db_path);

    sched()
        .args([
            "--db",
            &db_path,
            "event",
            "add",
            "--id",
            "ev1",
            "--title",
            "Dentist",
            "--date",
            "2025-09-01",
            "--time",
            "10:00",
            "--category",
            "health",
        ])
        .assert()
        .success()
        .stdout(contains("ev1"));

    sched()
        .args(["--db", &db_path, "event", "list", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Dentist").and(contains("2025-09-01 11:00")));

    sched()
        .args(["--db", &db_path, "event", "show", "ev1"])
        .assert()
        .success()
        .stdout(contains("\"category\": \"health\""));

    sched()
        .args(["--db", &db_path, "event", "del", "ev1"])
        .assert()
        .success();

    sched()
        .args(["--db", &db_path, "event", "list"])
        .assert()
        .success()
        .stdout(contains("No events found"));
}

#[test]
fn test_event_duplicate_id_fails() {
    let db_path = setup_test_db("cli_event_dup");
    init_db(&db_path);

    let add = |cmd: &mut assert_cmd::Command| {
        cmd.args([
            "--db", &db_path, "event", "add", "--id", "same", "--title", "One", "--date",
            "2025-09-01",
        ])
        .assert()
    };

    add(&mut sched()).success();
    add(&mut sched())
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_event_invalid_date_fails() {
    let db_path = setup_test_db("cli_event_bad_date");
    init_db(&db_path);

    sched()
        .args([
            "--db", &db_path, "event", "add", "--title", "Bad", "--date", "2025-02-30",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_task_lifecycle_and_upcoming() {
    let db_path = setup_test_db("cli_task");
    init_db(&db_path);
    let due = today();

    sched()
        .args([
            "--db", &db_path, "task", "add", "--id", "t1", "--title", "Pay rent", "--due", &due,
        ])
        .assert()
        .success();

    sched()
        .args(["--db", &db_path, "upcoming"])
        .assert()
        .success()
        .stdout(contains("Pay rent"));

    sched()
        .args(["--db", &db_path, "task", "done", "t1"])
        .assert()
        .success();

    sched()
        .args(["--db", &db_path, "task", "list", "--status", "completed"])
        .assert()
        .success()
        .stdout(contains("Pay rent").and(contains("completed")));

    sched()
        .args(["--db", &db_path, "upcoming", "--days", "3"])
        .assert()
        .success()
        .stdout(contains("Nothing due"));

    sched()
        .args(["--db", &db_path, "task", "reopen", "t1"])
        .assert()
        .success();

    sched()
        .args(["--db", &db_path, "task", "list", "--status", "pending"])
        .assert()
        .success()
        .stdout(contains("Pay rent"));
}

#[test]
fn test_task_done_unknown_id_fails() {
    let db_path = setup_test_db("cli_task_missing");
    init_db(&db_path);

    sched()
        .args(["--db", &db_path, "task", "done", "ghost"])
        .assert()
        .failure()
        .stderr(contains("ghost"));
}

#[test]
fn test_settings_get_and_set() {
    let db_path = setup_test_db("cli_settings");
    init_db(&db_path);

    sched()
        .args(["--db", &db_path, "setting", "get", "theme"])
        .assert()
        .success()
        .stdout(contains("light"));

    sched()
        .args(["--db", &db_path, "setting", "set", "theme", "dark"])
        .assert()
        .success();

    sched()
        .args(["--db", &db_path, "setting", "list"])
        .assert()
        .success()
        .stdout(contains("dark").and(contains("reducedMotion")));
}

#[test]
fn test_clear_keeps_categories() {
    let db_path = setup_test_db("cli_clear");
    init_db(&db_path);

    sched()
        .args([
            "--db", &db_path, "event", "add", "--title", "Gone", "--date", "2025-09-01",
        ])
        .assert()
        .success();

    sched()
        .args(["--db", &db_path, "clear", "--yes"])
        .assert()
        .success();

    sched()
        .args(["--db", &db_path, "event", "list"])
        .assert()
        .success()
        .stdout(contains("No events found"));

    sched()
        .args(["--db", &db_path, "category", "list"])
        .assert()
        .success()
        .stdout(contains("Work"));
}

#[test]
fn test_export_json_and_csv() {
    let db_path = setup_test_db("cli_export");
    init_db(&db_path);

    sched()
        .args([
            "--db", &db_path, "task", "add", "--title", "Export me", "--due", "2025-10-01",
        ])
        .assert()
        .success();

    let json_out = temp_out("cli_export", "json");
    sched()
        .args(["--db", &db_path, "export", "--file", &json_out])
        .assert()
        .success();
    let content = fs::read_to_string(&json_out).expect("read exported json");
    let snapshot: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(snapshot["tasks"][0]["title"], "Export me");
    assert_eq!(snapshot["categories"].as_array().map(Vec::len), Some(4));

    let csv_out = temp_out("cli_export", "csv");
    sched()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--collection", "tasks", "--file",
            &csv_out,
        ])
        .assert()
        .success();
    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    assert!(content.contains("Export me"));
    assert!(content.contains("2025-10-01"));

    let all_csv = temp_out("cli_export_all", "csv");
    sched()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &all_csv])
        .assert()
        .failure();
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("cli_backup");
    init_db(&db_path);
    let out = temp_out("cli_backup", "sqlite");
    let zip = out.replace(".sqlite", ".zip");
    fs::remove_file(&zip).ok();

    sched()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(fs::metadata(&zip).is_ok());
}

#[test]
fn test_cache_install_and_fetch() {
    let home = temp_dir("cli_cache_home");
    let root = web_root("cli_cache_root");
    let root = root.to_string_lossy().to_string();

    sched()
        .env("HOME", &home)
        .args(["cache", "install", "--root", &root])
        .assert()
        .success()
        .stdout(contains("Cached 7 assets"));

    // Served from the cache even after the web root is gone.
    fs::remove_dir_all(&root).ok();
    sched()
        .env("HOME", &home)
        .args(["cache", "fetch", "./pages/settings_and_preferences.html"])
        .assert()
        .success()
        .stdout(contains("settings_and_preferences.html"));
}

#[test]
fn test_db_info_and_log() {
    let db_path = setup_test_db("cli_db_info");
    init_db(&db_path);

    sched()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("categories").and(contains("Integrity check passed")));

    sched()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"));
}

#[test]
fn test_upcoming_with_largest_window() {
    let db_path = setup_test_db("cli_upcoming_max");
    init_db(&db_path);

    sched()
        .args([
            "--db", &db_path, "task", "add", "--title", "Distant", "--due", "2999-01-01",
        ])
        .assert()
        .success();

    sched()
        .args(["--db", &db_path, "upcoming", "--days", "4294967295"])
        .assert()
        .success()
        .stdout(contains("Distant"));
}
