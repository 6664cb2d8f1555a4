// src/export/model.rs

use crate::core::interval::{DateRange, inclusive_day_count};
use crate::core::status::{document_status, rotation_status};
use crate::db::store::Record;
use crate::models::{DiaryNote, Leave, Rotation, SeaTimeEntry, TrainingDocument};
use chrono::NaiveDate;

/// Flat, string-only view of a record for CSV / JSON export.
pub trait Exportable: Record {
    fn headers() -> &'static [&'static str];

    /// One row, aligned with [`Exportable::headers`]. Derived columns
    /// (day counts, status) are evaluated against `today`.
    fn row(&self, today: NaiveDate) -> Vec<String>;

    /// Dates the record covers, used by `--range` filtering.
    fn span(&self) -> DateRange;
}

fn opt_date(d: Option<NaiveDate>) -> String {
    d.map(|d| d.to_string()).unwrap_or_default()
}

impl Exportable for Rotation {
    fn headers() -> &'static [&'static str] {
        &[
            "id", "vessel", "company", "position", "location", "start", "end", "days",
            "regime", "status", "notes",
        ]
    }

    fn row(&self, today: NaiveDate) -> Vec<String> {
        vec![
            self.id.clone(),
            self.vessel_name.clone(),
            self.company_name.clone(),
            self.position.clone(),
            self.location.clone(),
            self.start_date.to_string(),
            self.end_date.to_string(),
            inclusive_day_count(self.start_date, self.end_date).to_string(),
            self.regime.label(),
            rotation_status(self.start_date, self.end_date, today)
                .label()
                .to_string(),
            self.notes.clone(),
        ]
    }

    fn span(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

impl Exportable for SeaTimeEntry {
    fn headers() -> &'static [&'static str] {
        &["id", "vessel", "start", "end", "days"]
    }

    fn row(&self, _today: NaiveDate) -> Vec<String> {
        vec![
            self.id.clone(),
            self.vessel_name.clone(),
            self.start_date.to_string(),
            self.end_date.to_string(),
            inclusive_day_count(self.start_date, self.end_date).to_string(),
        ]
    }

    fn span(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

impl Exportable for Leave {
    fn headers() -> &'static [&'static str] {
        &["id", "title", "type", "start", "end", "days", "status", "notes"]
    }

    fn row(&self, _today: NaiveDate) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.kind.code().to_string(),
            self.start_date.to_string(),
            self.end_date.to_string(),
            inclusive_day_count(self.start_date, self.end_date).to_string(),
            self.status.code().to_string(),
            self.notes.clone(),
        ]
    }

    fn span(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

/// Attachment payloads are not exported, only their file name.
impl Exportable for TrainingDocument {
    fn headers() -> &'static [&'static str] {
        &[
            "id", "name", "type", "institution", "issued", "expires", "number", "status",
            "attachment", "notes",
        ]
    }

    fn row(&self, today: NaiveDate) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.kind.code().to_string(),
            self.institution.clone(),
            self.issue_date.to_string(),
            opt_date(self.expiry_date),
            self.doc_number.clone().unwrap_or_default(),
            document_status(self.expiry_date, today).label().to_string(),
            self.attachment
                .as_ref()
                .map(|a| a.name.clone())
                .unwrap_or_default(),
            self.notes.clone(),
        ]
    }

    /// From issue to expiry; open-ended documents only cover their issue day.
    fn span(&self) -> DateRange {
        DateRange {
            start: self.issue_date,
            end: self.expiry_date.unwrap_or(self.issue_date).max(self.issue_date),
        }
    }
}

impl Exportable for DiaryNote {
    fn headers() -> &'static [&'static str] {
        &["id", "timestamp", "category", "tags", "content"]
    }

    fn row(&self, _today: NaiveDate) -> Vec<String> {
        vec![
            self.id.clone(),
            self.timestamp.to_rfc3339(),
            self.category.code().to_string(),
            self.tags.iter().cloned().collect::<Vec<_>>().join(" "),
            self.content.clone(),
        ]
    }

    fn span(&self) -> DateRange {
        DateRange::single(self.timestamp.date_naive())
    }
}
