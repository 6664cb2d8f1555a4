use crate::core::add::AddLogic;
use crate::core::interval::DateRange;
use crate::core::scheduler::{RotationTemplate, end_date_for, generate_schedule};
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{Regime, Rotation, new_id};
use chrono::NaiveDate;

/// Partial update of a stored rotation; `None` keeps the current value.
#[derive(Debug, Default)]
pub struct RotationPatch {
    pub vessel_name: Option<String>,
    pub company_name: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub regime: Option<Regime>,
    pub notes: Option<String>,
}

pub struct RotationLogic;

impl RotationLogic {
    /// Create one rotation, or a whole schedule when `repeat` is set.
    ///
    /// Without `end`, the disembark date is prefilled from the regime.
    /// In repeat mode `end` is ignored: every period follows the regime.
    pub fn create(
        pool: &DbPool,
        template: RotationTemplate,
        regime: Regime,
        start: NaiveDate,
        end: Option<NaiveDate>,
        repeat: bool,
    ) -> AppResult<Vec<Rotation>> {
        if repeat {
            let schedule = generate_schedule(&template, regime, start);
            AddLogic::save_all(pool, &schedule, "add")?;

            audit_or_warn(
                &pool.conn,
                "schedule",
                &regime.label(),
                &format!("Generated {} rotations from {}", schedule.len(), start),
            );
            return Ok(schedule);
        }

        let end = end.unwrap_or_else(|| end_date_for(start, regime));
        let range = DateRange::new(start, end)?;

        let rotation = template.into_rotation(new_id(), range.start, range.end, regime);
        Ok(vec![AddLogic::save(pool, rotation, "add")?])
    }

    /// Apply `patch` to `current`, keeping its id.
    ///
    /// Moving the start date without giving an end recomputes the end from
    /// the (possibly new) regime, like the create form does.
    pub fn update(pool: &DbPool, current: Rotation, patch: RotationPatch) -> AppResult<Rotation> {
        let regime = patch.regime.unwrap_or(current.regime);
        let start = patch.start_date.unwrap_or(current.start_date);
        let end = match (patch.end_date, patch.start_date) {
            (Some(end), _) => end,
            (None, Some(new_start)) => end_date_for(new_start, regime),
            (None, None) => current.end_date,
        };
        let range = DateRange::new(start, end)?;

        let updated = Rotation {
            id: current.id,
            vessel_name: patch.vessel_name.unwrap_or(current.vessel_name),
            company_name: patch.company_name.unwrap_or(current.company_name),
            position: patch.position.unwrap_or(current.position),
            location: patch.location.unwrap_or(current.location),
            start_date: range.start,
            end_date: range.end,
            regime,
            notes: patch.notes.unwrap_or(current.notes),
        };

        AddLogic::save(pool, updated, "edit")
    }
}
