use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{CalendarDay, month_agenda};
use crate::db::store::CollectionStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Leave, Rotation, TrainingDocument};
use crate::ui::messages::header;
use crate::utils::colors::{BLUE, GREEN, GREY, RED, RESET, YELLOW};
use crate::utils::date::parse_month;
use crate::utils::formatting::bold;
use chrono::{Datelike, NaiveDate};

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Grid cell: day number plus one marker per kind of entry.
fn cell(day: &CalendarDay) -> String {
    let marker = if !day.expiring_docs.is_empty() {
        format!("{RED}!{RESET}")
    } else if !day.rotations.is_empty() {
        format!("{GREEN}*{RESET}")
    } else if !day.leaves.is_empty() {
        format!("{BLUE}~{RESET}")
    } else {
        " ".to_string()
    };

    let number = format!("{:>2}", day.date.day());
    let number = if day.is_today {
        bold(&format!("{YELLOW}{number}"))
    } else {
        number
    };

    format!("{number}{marker} ")
}

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    let Commands::Calendar { month } = cmd else {
        return Ok(());
    };

    let (year, month) = match month {
        Some(m) => parse_month(m).ok_or_else(|| AppError::InvalidDate(m.clone()))?,
        None => (today.year(), today.month()),
    };

    let pool = super::open_logbook(cfg)?;
    let rotations = CollectionStore::<Rotation>::new(&pool).list()?;
    let leaves = CollectionStore::<Leave>::new(&pool).list()?;
    let docs = CollectionStore::<TrainingDocument>::new(&pool).list()?;

    let agenda = month_agenda(year, month, &rotations, &leaves, &docs, today)?;

    header("📅", format!("{:04}-{:02}", agenda.year, agenda.month));

    for w in WEEKDAYS {
        print!("{w:>2}  ");
    }
    println!();

    let mut column = agenda.leading_blanks;
    print!("{}", "    ".repeat(column as usize));
    for day in &agenda.days {
        print!("{}", cell(day));
        column += 1;
        if column == 7 {
            println!();
            column = 0;
        }
    }
    if column != 0 {
        println!();
    }
    println!();

    for day in agenda.days.iter().filter(|d| !d.is_empty()) {
        println!("{}", bold(&day.date.format("%a %d").to_string()));
        for r in &day.rotations {
            println!("  {GREEN}⚓{RESET} {} {GREY}{}{RESET}", r.vessel_name, r.regime);
        }
        for l in &day.leaves {
            println!("  {} {} {GREY}{}{RESET}", l.kind.icon(), l.title, l.status.code());
        }
        for d in &day.expiring_docs {
            println!("  {RED}!{RESET} {} expires", d.name);
        }
    }

    Ok(())
}
