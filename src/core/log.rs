use crate::db::log::load_log;
use crate::db::store::SchedulerStore;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

const MAX_OP_WIDTH: usize = 48;

fn visible_len(s: &str) -> usize {
    ANSI.replace_all(s, "").chars().count()
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "seed" => Colour::Green,
        "del" | "clear" => Colour::Red,
        "update" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &SchedulerStore) -> AppResult<()> {
        let entries = load_log(store.conn()?)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let mut label = color_for_operation(&operation).paint(&operation).to_string();
            if !target.is_empty() {
                let room = MAX_OP_WIDTH.saturating_sub(operation.len() + 3);
                let shown: String = if target.chars().count() > room {
                    let mut s: String = target.chars().take(room.saturating_sub(3)).collect();
                    s.push_str("...");
                    s
                } else {
                    target
                };
                label.push_str(&format!(" ({shown})"));
            }

            let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(visible_len(&label)));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                label,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
