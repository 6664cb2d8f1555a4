use crate::cli::parser::{Commands, RotationAction};
use crate::config::Config;
use crate::core::aggregate::active_rotation_queue;
use crate::core::del::DeleteLogic;
use crate::core::interval::inclusive_day_count;
use crate::core::rotation::{RotationLogic, RotationPatch};
use crate::core::scheduler::RotationTemplate;
use crate::core::status::rotation_status;
use crate::db::store::CollectionStore;
use crate::errors::AppResult;
use crate::models::{Regime, Rotation};
use crate::ui::messages::{header, info, success, warning};
use crate::ui::prompt::ask_confirmation;
use crate::utils::colors::{colorize_optional, paint};
use crate::utils::date::{parse_date_arg, parse_optional_date};
use crate::utils::formatting::{days_label, format_date, short_id};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

/// Unknown labels fall back to 14x14, with a warning.
fn regime_arg(raw: &str) -> Regime {
    Regime::parse_strict(raw).unwrap_or_else(|| {
        let fallback = Regime::default();
        warning(format!("Unrecognized regime '{raw}', using {fallback}"));
        fallback
    })
}

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    let Commands::Rotation { action } = cmd else {
        return Ok(());
    };

    let pool = super::open_logbook(cfg)?;

    match action {
        RotationAction::Add {
            vessel,
            company,
            position,
            location,
            start,
            end,
            regime,
            notes,
            repeat,
        } => {
            let regime = regime
                .as_deref()
                .map(regime_arg)
                .unwrap_or_else(|| cfg.regime());
            let start = parse_date_arg(start)?;
            let end = parse_optional_date(end.as_ref())?;

            if *repeat && end.is_some() {
                warning("--end is ignored with --repeat: every period follows the regime.");
            }

            let template = RotationTemplate {
                vessel_name: vessel.trim().to_string(),
                company_name: company.trim().to_string(),
                position: position.trim().to_string(),
                location: location.trim().to_string(),
                notes: notes.clone(),
            };

            let created = RotationLogic::create(&pool, template, regime, start, end, *repeat)?;

            if *repeat {
                success(format!(
                    "{} rotations scheduled ({}) from {}",
                    created.len(),
                    regime,
                    format_date(start, &cfg.date_format)
                ));
            }
            for r in &created {
                success(format!(
                    "Rotation {} on {}: {} → {}",
                    short_id(&r.id),
                    r.vessel_name,
                    format_date(r.start_date, &cfg.date_format),
                    format_date(r.end_date, &cfg.date_format)
                ));
            }
        }

        RotationAction::Edit {
            id,
            vessel,
            company,
            position,
            location,
            start,
            end,
            regime,
            notes,
        } => {
            let current = CollectionStore::<Rotation>::new(&pool).resolve(id)?;
            let patch = RotationPatch {
                vessel_name: vessel.clone(),
                company_name: company.clone(),
                position: position.clone(),
                location: location.clone(),
                start_date: parse_optional_date(start.as_ref())?,
                end_date: parse_optional_date(end.as_ref())?,
                regime: regime.as_deref().map(regime_arg),
                notes: notes.clone(),
            };

            let updated = RotationLogic::update(&pool, current, patch)?;
            success(format!(
                "Rotation {} updated: {} → {}",
                short_id(&updated.id),
                format_date(updated.start_date, &cfg.date_format),
                format_date(updated.end_date, &cfg.date_format)
            ));
        }

        RotationAction::List { all } => {
            let rotations = CollectionStore::<Rotation>::new(&pool).list()?;
            let shown: Vec<&Rotation> = if *all {
                rotations.iter().collect()
            } else {
                active_rotation_queue(&rotations, today)
            };

            if shown.is_empty() {
                info(if *all {
                    "No rotations recorded."
                } else {
                    "No upcoming or ongoing rotations."
                });
                return Ok(());
            }

            header(
                "⚓",
                if *all {
                    "All rotations"
                } else {
                    "Upcoming and ongoing rotations"
                },
            );
            println!("{}", rotation_table(&shown, cfg, today).render());
        }

        RotationAction::Del { id } => {
            let removed: Rotation = DeleteLogic::apply(&pool, id)?;
            success(format!(
                "Rotation {} on {} deleted.",
                short_id(&removed.id),
                removed.vessel_name
            ));
        }

        RotationAction::Clear { yes } => {
            if !*yes
                && !ask_confirmation("Delete ALL rotations? This action is irreversible.")
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = DeleteLogic::clear::<Rotation>(&pool)?;
            success(format!("{removed} rotation(s) deleted."));
        }
    }

    Ok(())
}

fn rotation_table(rotations: &[&Rotation], cfg: &Config, today: NaiveDate) -> Table {
    let mut table = Table::new(vec![
        Column::new("ID", 8),
        Column::new("VESSEL", 24),
        Column::new("COMPANY", 18),
        Column::new("POSITION", 16),
        Column::new("EMBARK", 10),
        Column::new("DISEMBARK", 10),
        Column::new("DAYS", 9),
        Column::new("REGIME", 7),
        Column::new("STATUS", 10),
    ])
    .with_separator(&cfg.separator_char);

    for r in rotations {
        let status = rotation_status(r.start_date, r.end_date, today);
        table.add_row(vec![
            short_id(&r.id).to_string(),
            r.vessel_name.clone(),
            colorize_optional(&r.company_name),
            colorize_optional(&r.position),
            format_date(r.start_date, &cfg.date_format),
            format_date(r.end_date, &cfg.date_format),
            days_label(inclusive_day_count(r.start_date, r.end_date)),
            r.regime.label(),
            paint(status.color(), status.label()),
        ]);
    }

    table
}
