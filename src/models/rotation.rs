use super::collection::Collection;
use super::regime::Regime;
use crate::db::store::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A worked period aboard a vessel (embarkation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub id: String,
    pub vessel_name: String,
    pub company_name: String,
    pub position: String,
    pub location: String,
    pub start_date: NaiveDate, // embark day
    pub end_date: NaiveDate,   // disembark day, >= start_date
    pub regime: Regime,
    #[serde(default)]
    pub notes: String,
}

impl Record for Rotation {
    const COLLECTION: Collection = Collection::Rotations;

    fn id(&self) -> &str {
        &self.id
    }

    /// Most recent embarkation first.
    fn sort_for_listing(items: &mut [Self]) {
        items.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    }
}
