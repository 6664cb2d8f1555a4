use crate::cli::parser::{Commands, LeaveAction};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::del::DeleteLogic;
use crate::core::interval::{DateRange, inclusive_day_count};
use crate::db::store::CollectionStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Leave, LeaveKind, LeaveStatus, new_id};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{BLUE, GREEN, GREY, colorize_optional, paint};
use crate::utils::date::{parse_date_arg, parse_optional_date};
use crate::utils::formatting::{days_label, format_date, short_id};
use crate::utils::table::{Column, Table};

fn kind_arg(raw: &str) -> AppResult<LeaveKind> {
    LeaveKind::from_code(raw).ok_or_else(|| AppError::InvalidCategory(raw.to_string()))
}

fn status_arg(raw: &str) -> AppResult<LeaveStatus> {
    LeaveStatus::from_code(raw).ok_or_else(|| AppError::InvalidStatus(raw.to_string()))
}

fn status_color(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Planned => BLUE,
        LeaveStatus::Approved => GREEN,
        LeaveStatus::Completed => GREY,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Leave { action } = cmd else {
        return Ok(());
    };

    let pool = super::open_logbook(cfg)?;

    match action {
        LeaveAction::Add {
            title,
            kind,
            start,
            end,
            status,
            notes,
        } => {
            let range = DateRange::new(parse_date_arg(start)?, parse_date_arg(end)?)?;

            let leave = AddLogic::save(
                &pool,
                Leave {
                    id: new_id(),
                    title: title.trim().to_string(),
                    kind: kind_arg(kind)?,
                    start_date: range.start,
                    end_date: range.end,
                    status: status_arg(status)?,
                    notes: notes.clone(),
                },
                "add",
            )?;

            success(format!(
                "{} {} {} planned: {} → {}",
                leave.kind.icon(),
                short_id(&leave.id),
                leave.title,
                format_date(leave.start_date, &cfg.date_format),
                format_date(leave.end_date, &cfg.date_format)
            ));
        }

        LeaveAction::Edit {
            id,
            title,
            kind,
            start,
            end,
            status,
            notes,
        } => {
            let current = CollectionStore::<Leave>::new(&pool).resolve(id)?;

            let range = DateRange::new(
                parse_optional_date(start.as_ref())?.unwrap_or(current.start_date),
                parse_optional_date(end.as_ref())?.unwrap_or(current.end_date),
            )?;

            let updated = Leave {
                id: current.id,
                title: title.clone().unwrap_or(current.title),
                kind: kind.as_deref().map(kind_arg).transpose()?.unwrap_or(current.kind),
                start_date: range.start,
                end_date: range.end,
                status: status
                    .as_deref()
                    .map(status_arg)
                    .transpose()?
                    .unwrap_or(current.status),
                notes: notes.clone().unwrap_or(current.notes),
            };

            let updated = AddLogic::save(&pool, updated, "edit")?;
            success(format!("Leave {} updated.", short_id(&updated.id)));
        }

        LeaveAction::List => {
            let leaves = CollectionStore::<Leave>::new(&pool).list()?;

            if leaves.is_empty() {
                info("No leave or courses planned.");
                return Ok(());
            }

            header("🌴", "Leave and courses");

            let mut table = Table::new(vec![
                Column::new("ID", 8),
                Column::new("TITLE", 28),
                Column::new("TYPE", 10),
                Column::new("FROM", 10),
                Column::new("TO", 10),
                Column::new("DAYS", 9),
                Column::new("STATUS", 10),
                Column::new("NOTES", 30),
            ])
            .with_separator(&cfg.separator_char);

            for l in &leaves {
                table.add_row(vec![
                    short_id(&l.id).to_string(),
                    l.title.clone(),
                    l.kind.code().to_string(),
                    format_date(l.start_date, &cfg.date_format),
                    format_date(l.end_date, &cfg.date_format),
                    days_label(inclusive_day_count(l.start_date, l.end_date)),
                    paint(status_color(l.status), l.status.code()),
                    colorize_optional(&l.notes),
                ]);
            }
            println!("{}", table.render());
        }

        LeaveAction::Del { id } => {
            let removed: Leave = DeleteLogic::apply(&pool, id)?;
            success(format!(
                "Leave {} ({}) deleted.",
                short_id(&removed.id),
                removed.title
            ));
        }
    }

    Ok(())
}
