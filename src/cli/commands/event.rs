use crate::cli::commands::open_store;
use crate::cli::parser::EventAction;
use crate::config::Config;
use crate::core::range::event_range;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::models::{Event, Index, generate_id};
use crate::ui::messages::{header, info, success};
use crate::utils::date::{format_instant, parse_date, parse_time};
use crate::utils::table::Table;

fn check_date(s: &str) -> AppResult<()> {
    parse_date(s)
        .map(|_| ())
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

fn check_time(s: &str) -> AppResult<()> {
    parse_time(s)
        .map(|_| ())
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

fn render(events: &[Event]) -> String {
    let mut table = Table::new(&["ID", "DATE", "START", "END", "CATEGORY", "TITLE"]);
    for ev in events {
        let range = event_range(ev);
        table.add_row(vec![
            ev.id.clone(),
            ev.date.clone(),
            range.start.as_ref().map(format_instant).unwrap_or_default(),
            range.end.as_ref().map(format_instant).unwrap_or_default(),
            ev.category.clone(),
            ev.title.clone(),
        ]);
    }
    table.render()
}

pub fn handle(action: &EventAction, cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;

    match action {
        EventAction::Add {
            title,
            date,
            time,
            end_date,
            end_time,
            category,
            description,
            location,
            id,
        } => {
            check_date(date)?;
            if let Some(d) = end_date {
                check_date(d)?;
            }
            for t in [time, end_time].into_iter().flatten() {
                check_time(t)?;
            }

            let mut event = Event::new(id.clone().unwrap_or_else(generate_id), title, date)
                .ending(end_date.clone(), end_time.clone());
            event.time = time.clone();
            event.category = category.clone().unwrap_or_default();
            event.description = description.clone();
            event.location = location.clone();

            let key = store.add(&event)?;
            ttlog_quiet(store.conn()?, "add", &format!("events/{key}"), title);
            success(format!("Event '{title}' added with id {key}"));
        }

        EventAction::List { date, category } => {
            let events: Vec<Event> = match (date, category) {
                (Some(d), _) => {
                    let mut v: Vec<Event> = store.get_by_index(Index::Date, d)?;
                    if let Some(c) = category {
                        v.retain(|e| &e.category == c);
                    }
                    v
                }
                (None, Some(c)) => store.get_by_index(Index::Category, c)?,
                (None, None) => store.get_all()?,
            };

            if events.is_empty() {
                info("No events found.");
            } else {
                header(format!("{} event(s)", events.len()));
                print!("{}", render(&events));
            }
        }

        EventAction::Show { id } => {
            let event: Event = store.get(id)?.ok_or_else(|| AppError::NotFound {
                collection: "events".into(),
                key: id.clone(),
            })?;
            print!("{}", render(std::slice::from_ref(&event)));
            println!("\n{}", serde_json::to_string_pretty(&event)?);
        }

        EventAction::Del { id } => {
            store.delete::<Event>(id)?;
            ttlog_quiet(store.conn()?, "del", &format!("events/{id}"), "Event deleted");
            success(format!("Event {id} deleted."));
        }
    }

    Ok(())
}
