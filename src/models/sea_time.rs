use super::collection::Collection;
use crate::db::store::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sea time earned before the logbook was adopted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeaTimeEntry {
    pub id: String,
    pub vessel_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Record for SeaTimeEntry {
    const COLLECTION: Collection = Collection::SeaTime;

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_for_listing(items: &mut [Self]) {
        items.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    }
}
