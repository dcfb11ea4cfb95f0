#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Home directory used by CLI tests so no real config is read.
pub fn test_home() -> PathBuf {
    env::temp_dir().join("superscheduler_test_home")
}

pub fn sched() -> Command {
    let mut cmd = cargo_bin_cmd!("superscheduler");
    cmd.env("HOME", test_home());
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_superscheduler.sqlite"));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh empty directory under the temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("{name}_superscheduler"));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

/// A web root holding every precached page, each file containing its own path.
pub fn web_root(name: &str) -> PathBuf {
    let root = temp_dir(name);
    for rel in [
        "index.html",
        "css/main.css",
        "pages/calendar_dashboard.html",
        "pages/task_management.html",
        "pages/search_and_filter.html",
        "pages/settings_and_preferences.html",
    ] {
        let file = root.join(rel);
        fs::create_dir_all(file.parent().expect("parent")).expect("create dirs");
        fs::write(&file, format!("<!-- {rel} -->")).expect("write asset");
    }
    root
}

/// Initialize a DB through the CLI (schema + seed).
pub fn init_db(db_path: &str) {
    sched()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}
