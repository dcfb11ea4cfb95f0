use crate::cli::commands::open_store;
use crate::cli::parser::CategoryAction;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::Category;
use crate::ui::messages::{info, success};
use crate::utils::colors::{for_category_color, paint};

pub fn handle(action: &CategoryAction, cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;

    match action {
        CategoryAction::Add { id, name, color } => {
            store.add(&Category::new(id, name, color))?;
            ttlog_quiet(store.conn()?, "add", &format!("categories/{id}"), name);
            success(format!("Category '{name}' added."));
        }

        CategoryAction::List => {
            let categories: Vec<Category> = store.get_all()?;
            if categories.is_empty() {
                info("No categories defined.");
            }
            for c in &categories {
                println!(
                    "{} {:<12} {} ({})",
                    paint(for_category_color(&c.color), "●"),
                    c.id,
                    c.name,
                    c.color
                );
            }
        }

        CategoryAction::Del { id } => {
            store.delete::<Category>(id)?;
            ttlog_quiet(store.conn()?, "del", &format!("categories/{id}"), "Category deleted");
            success(format!("Category {id} deleted."));
        }
    }

    Ok(())
}
