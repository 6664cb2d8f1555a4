use crate::cli::parser::{Commands, SeaTimeAction};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::aggregate::historical_total_days;
use crate::core::del::DeleteLogic;
use crate::core::interval::{DateRange, inclusive_day_count};
use crate::db::store::CollectionStore;
use crate::errors::AppResult;
use crate::models::{SeaTimeEntry, new_id};
use crate::ui::messages::{field, header, info, success};
use crate::utils::colors::{color_for_days, paint};
use crate::utils::date::parse_date_arg;
use crate::utils::formatting::{days_label, format_date, short_id};
use crate::utils::table::{Column, Table};

/// Name stored when an old embarkation is logged without a vessel.
pub const DEFAULT_VESSEL: &str = "Historical embarkation";

fn vessel_or_default(vessel: Option<&str>) -> String {
    match vessel.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => DEFAULT_VESSEL.to_string(),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::SeaTime { action } = cmd else {
        return Ok(());
    };

    let pool = super::open_logbook(cfg)?;

    match action {
        SeaTimeAction::Add { vessel, start, end } => {
            let range = DateRange::new(parse_date_arg(start)?, parse_date_arg(end)?)?;

            let entry = AddLogic::save(
                &pool,
                SeaTimeEntry {
                    id: new_id(),
                    vessel_name: vessel_or_default(vessel.as_deref()),
                    start_date: range.start,
                    end_date: range.end,
                },
                "add",
            )?;

            success(format!(
                "Sea time {} on {}: {}",
                short_id(&entry.id),
                entry.vessel_name,
                days_label(range.days())
            ));
        }

        SeaTimeAction::List => {
            let entries = CollectionStore::<SeaTimeEntry>::new(&pool).list()?;

            if entries.is_empty() {
                info("No historical sea time recorded.");
                return Ok(());
            }

            header("🧭", "Historical sea time");

            let mut table = Table::new(vec![
                Column::new("ID", 8),
                Column::new("VESSEL", 28),
                Column::new("FROM", 10),
                Column::new("TO", 10),
                Column::new("DAYS", 10),
            ])
            .with_separator(&cfg.separator_char);

            for e in &entries {
                table.add_row(vec![
                    short_id(&e.id).to_string(),
                    e.vessel_name.clone(),
                    format_date(e.start_date, &cfg.date_format),
                    format_date(e.end_date, &cfg.date_format),
                    days_label(inclusive_day_count(e.start_date, e.end_date)),
                ]);
            }
            println!("{}", table.render());

            let total = historical_total_days(&entries);
            field("Total", paint(color_for_days(total), &days_label(total)));
        }

        SeaTimeAction::Del { id } => {
            let removed: SeaTimeEntry = DeleteLogic::apply(&pool, id)?;
            success(format!(
                "Sea time {} on {} deleted.",
                short_id(&removed.id),
                removed.vessel_name
            ));
        }
    }

    Ok(())
}
