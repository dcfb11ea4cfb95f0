use crate::core::status::task_state;
use crate::db::queries::count_records;
use crate::db::store::{SchedulerStore, StoreLocation};
use crate::errors::AppResult;
use crate::models::{Collection, Task, TaskState};
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(store: &SchedulerStore) -> AppResult<()> {
    let conn = store.conn()?;
    println!();

    //
    // 1) FILE
    //
    match store.location() {
        StoreLocation::File(path) => {
            let file_size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
            let file_kb = (file_size as f64) / 1024.0;
            println!("{CYAN}• File:{RESET} {YELLOW}{}{RESET}", path.display());
            println!("{CYAN}• Size:{RESET} {file_kb:.1} KB");
        }
        StoreLocation::Memory => println!("{CYAN}• File:{RESET} {GREY}(in memory){RESET}"),
    }

    //
    // 2) RECORDS PER COLLECTION
    //
    for collection in Collection::ALL {
        let n = count_records(conn, collection)?;
        println!("{CYAN}• {collection}:{RESET} {GREEN}{n}{RESET}");
    }

    //
    // 3) EVENT DATE RANGE
    //
    let first: Option<String> = conn
        .query_row(
            "SELECT date FROM events WHERE date IS NOT NULL ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    let last: Option<String> = conn
        .query_row(
            "SELECT date FROM events WHERE date IS NOT NULL ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let dash = format!("{GREY}--{RESET}");
    println!("{CYAN}• Event dates:{RESET}");
    println!("    from: {}", first.unwrap_or_else(|| dash.clone()));
    println!("    to:   {}", last.unwrap_or(dash));

    //
    // 4) TASK STATES
    //
    let (mut pending, mut completed, mut overdue) = (0, 0, 0);
    for task in store.get_all::<Task>()? {
        match task_state(&task) {
            TaskState::Pending => pending += 1,
            TaskState::Completed => completed += 1,
            TaskState::Overdue => overdue += 1,
        }
    }
    println!(
        "{CYAN}• Tasks:{RESET} {YELLOW}{pending} pending{RESET}, {GREEN}{completed} completed{RESET}, {RED}{overdue} overdue{RESET}"
    );

    println!();
    Ok(())
}
