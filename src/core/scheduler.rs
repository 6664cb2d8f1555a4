//! Rotation recurrence: turn one seed rotation and a regime into a year of
//! on/off periods.

use crate::models::{Regime, Rotation, new_id};
use chrono::{Days, Months, NaiveDate};

/// Hard cap on generated periods.
pub const MAX_PERIODS: usize = 12;

/// The user-entered fields copied into every generated rotation.
#[derive(Debug, Clone, Default)]
pub struct RotationTemplate {
    pub vessel_name: String,
    pub company_name: String,
    pub position: String,
    pub location: String,
    pub notes: String,
}

impl RotationTemplate {
    pub fn into_rotation(
        self,
        id: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        regime: Regime,
    ) -> Rotation {
        Rotation {
            id,
            vessel_name: self.vessel_name,
            company_name: self.company_name,
            position: self.position,
            location: self.location,
            start_date,
            end_date,
            regime,
            notes: self.notes,
        }
    }
}

fn add_days(day: NaiveDate, n: u32) -> NaiveDate {
    day.checked_add_days(Days::new(u64::from(n)))
        .unwrap_or(NaiveDate::MAX)
}

/// Default disembark date for a rotation starting on `start`: `start + days_on`.
pub fn end_date_for(start: NaiveDate, regime: Regime) -> NaiveDate {
    add_days(start, regime.days_on())
}

/// Generate consecutive periods starting at `start`.
///
/// Each period ends `days_on` days after it starts, the next one starts
/// `days_off` days after that. Generation stops after [`MAX_PERIODS`]
/// periods, or as soon as the next start falls more than one year after
/// `start`. Every period gets a fresh id; the seed's id is never reused.
pub fn generate_schedule(
    template: &RotationTemplate,
    regime: Regime,
    start: NaiveDate,
) -> Vec<Rotation> {
    let limit = start
        .checked_add_months(Months::new(12))
        .unwrap_or(NaiveDate::MAX);

    let mut out = Vec::with_capacity(MAX_PERIODS);
    let mut current = start;

    for i in 0..MAX_PERIODS {
        let end = end_date_for(current, regime);

        let mut period = template.clone();
        if period.notes.trim().is_empty() {
            period.notes = format!("Auto-generated schedule ({}/{})", i + 1, MAX_PERIODS);
        }
        out.push(period.into_rotation(new_id(), current, end, regime));

        current = add_days(end, regime.days_off());
        if current > limit {
            break;
        }
    }

    out
}
