use crate::config::Config;
use crate::core::aggregate::Dashboard;
use crate::core::interval::inclusive_day_count;
use crate::core::status::{RotationStatus, document_status};
use crate::db::store::CollectionStore;
use crate::errors::AppResult;
use crate::models::{Rotation, SeaTimeEntry, TrainingDocument};
use crate::ui::messages::{field, header};
use crate::utils::colors::{GREY, RED, RESET, YELLOW, color_for_days, paint};
use crate::utils::formatting::{days_label, format_date, format_optional_date};
use chrono::NaiveDate;

pub fn handle(cfg: &Config, today: NaiveDate) -> AppResult<()> {
    let pool = super::open_logbook(cfg)?;

    let rotations = CollectionStore::<Rotation>::new(&pool).list()?;
    let historical = CollectionStore::<SeaTimeEntry>::new(&pool).list()?;
    let docs = CollectionStore::<TrainingDocument>::new(&pool).list()?;

    let dash = Dashboard::build(&rotations, &historical, &docs, today, cfg.urgent_preview);

    header(
        "⚓",
        format!("Logbook on {}", format_date(dash.today, &cfg.date_format)),
    );

    field(
        &format!("Days onboard {}", dash.year),
        paint(
            color_for_days(dash.days_onboard_this_year),
            &days_label(dash.days_onboard_this_year),
        ),
    );
    field(
        "Career sea time",
        paint(
            color_for_days(dash.total_career_days),
            &days_label(dash.total_career_days),
        ),
    );

    match dash.next {
        Some((r, status)) => {
            let (label, when) = match status {
                RotationStatus::Ongoing => (
                    "Onboard",
                    format!(
                        "until {} ({} left)",
                        format_date(r.end_date, &cfg.date_format),
                        days_label(inclusive_day_count(today, r.end_date))
                    ),
                ),
                _ => (
                    "Next embark",
                    format!(
                        "{} (in {})",
                        format_date(r.start_date, &cfg.date_format),
                        days_label((r.start_date - today).num_days())
                    ),
                ),
            };
            field(
                label,
                format!(
                    "{} {} [{}] {}",
                    paint(status.color(), &r.vessel_name),
                    r.position,
                    r.regime,
                    when
                ),
            );
        }
        None => field("Next embark", format!("{GREY}ashore, nothing planned{RESET}")),
    }

    let urgent_color = if dash.urgent_count > 0 { RED } else { GREY };
    field(
        "Documents to renew",
        paint(urgent_color, &dash.urgent_count.to_string()),
    );

    for d in &dash.urgent_preview {
        let status = document_status(d.expiry_date, today);
        println!(
            "    {} {} {}",
            paint(status.color(), &format!("{:<8}", status.label())),
            d.name,
            paint(
                YELLOW,
                &format_optional_date(d.expiry_date, &cfg.date_format, "--")
            )
        );
    }

    if dash.urgent_count > dash.urgent_preview.len() {
        println!(
            "    {GREY}… and {} more (marinerlog doc list){RESET}",
            dash.urgent_count - dash.urgent_preview.len()
        );
    }

    println!();
    Ok(())
}
