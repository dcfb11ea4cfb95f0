use crate::cli::commands::open_store;
use crate::cli::parser::TaskAction;
use crate::config::Config;
use crate::core::status::task_state;
use crate::core::upcoming::sort_by_due_date;
use crate::db::SchedulerStore;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::models::{Index, Task, TaskStatus, generate_id};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{for_task_state, paint};
use crate::utils::date::parse_date_only_or_full;
use crate::utils::table::Table;
use chrono::Local;

pub(crate) fn render(tasks: &[Task]) -> String {
    let states: Vec<String> = tasks.iter().map(|t| task_state(t).to_string()).collect();

    let mut table = Table::new(&["ID", "DUE", "CATEGORY", "TITLE", "STATE"]);
    for (task, state) in tasks.iter().zip(&states) {
        table.add_row(vec![
            task.id.clone(),
            task.due_date.clone(),
            task.category.clone(),
            task.title.clone(),
            state.clone(),
        ]);
    }

    // State is the last column, so it can be colored without breaking widths.
    let rendered = table.render();
    let mut lines = rendered.lines();
    let mut out: String = lines.by_ref().take(2).map(|l| format!("{l}\n")).collect();
    for (line, state) in lines.zip(&states) {
        match line.strip_suffix(state.as_str()) {
            Some(head) => out.push_str(&format!("{head}{}\n", paint(for_task_state(state), state))),
            None => out.push_str(&format!("{line}\n")),
        }
    }
    out
}

fn set_status(store: &SchedulerStore, id: &str, status: TaskStatus) -> AppResult<()> {
    let mut task: Task = store.get(id)?.ok_or_else(|| AppError::NotFound {
        collection: "tasks".into(),
        key: id.to_string(),
    })?;
    let message = format!("Status set to {}", status.as_str());
    task.status = status;
    store.update(&task)?;
    ttlog_quiet(store.conn()?, "update", &format!("tasks/{id}"), &message);
    Ok(())
}

pub fn handle(action: &TaskAction, cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;

    match action {
        TaskAction::Add {
            title,
            due,
            category,
            priority,
            description,
            id,
        } => {
            if parse_date_only_or_full(due).is_none() {
                return Err(AppError::InvalidDate(due.clone()));
            }

            let mut task = Task::new(id.clone().unwrap_or_else(generate_id), title, due)
                .in_category(category.clone().unwrap_or_default());
            task.priority = priority.clone();
            task.description = description.clone();

            let key = store.add(&task)?;
            ttlog_quiet(store.conn()?, "add", &format!("tasks/{key}"), title);
            success(format!("Task '{title}' added with id {key}"));
        }

        TaskAction::List { status, category } => {
            let mut tasks: Vec<Task> = match status {
                Some(s) => store.get_by_index(Index::Status, TaskStatus::from(s.as_str()).as_str())?,
                None => store.get_all()?,
            };
            if let Some(c) = category {
                tasks.retain(|t| &t.category == c);
            }
            sort_by_due_date(&mut tasks, &Local);

            if tasks.is_empty() {
                info("No tasks found.");
            } else {
                header(format!("{} task(s)", tasks.len()));
                print!("{}", render(&tasks));
            }
        }

        TaskAction::Done { id } => {
            set_status(&store, id, TaskStatus::Completed)?;
            success(format!("Task {id} completed."));
        }

        TaskAction::Reopen { id } => {
            set_status(&store, id, TaskStatus::Pending)?;
            success(format!("Task {id} reopened."));
        }

        TaskAction::Del { id } => {
            store.delete::<Task>(id)?;
            ttlog_quiet(store.conn()?, "del", &format!("tasks/{id}"), "Task deleted");
            success(format!("Task {id} deleted."));
        }
    }

    Ok(())
}
