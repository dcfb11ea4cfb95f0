use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // Opening already migrates; --migrate re-runs it explicitly.
        let store = open_store(cfg)?;
        let conn = store.conn()?;

        if *migrate {
            println!("{CYAN}▶ Running migrations…{RESET}");
            run_pending_migrations(conn)?;
            println!("{GREEN}✔ Migration completed.{RESET}\n");
        }

        if *info {
            stats::print_db_info(&store)?;
        }

        if *check {
            println!("{CYAN}▶ Running integrity check…{RESET}");

            let integrity: String =
                conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{GREEN}✔ Integrity check passed.{RESET}\n");
            } else {
                println!("{RED}✘ Integrity check failed:{RESET} {integrity}\n");
            }
        }

        if *vacuum {
            println!("{CYAN}▶ Running VACUUM…{RESET}");
            conn.execute_batch("VACUUM;")?;
            println!("{GREEN}✔ Vacuum completed.{RESET}\n");
        }
    }

    Ok(())
}
