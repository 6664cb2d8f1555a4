//! Tri-state classifiers for documents and rotations.

use crate::utils::colors::{BLUE, GREEN, GREY, RED, YELLOW};
use chrono::NaiveDate;
use serde::Serialize;

/// Days before expiry at which a document starts to be flagged.
pub const EXPIRING_WINDOW_DAYS: i64 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocStatus {
    Valid,
    Expiring,
    Expired,
}

impl DocStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DocStatus::Valid => "valid",
            DocStatus::Expiring => "expiring",
            DocStatus::Expired => "expired",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            DocStatus::Valid => GREEN,
            DocStatus::Expiring => YELLOW,
            DocStatus::Expired => RED,
        }
    }

    pub fn is_urgent(&self) -> bool {
        !matches!(self, DocStatus::Valid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RotationStatus {
    Planned,
    Ongoing,
    Completed,
}

impl RotationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RotationStatus::Planned => "planned",
            RotationStatus::Ongoing => "onboard",
            RotationStatus::Completed => "completed",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RotationStatus::Planned => BLUE,
            RotationStatus::Ongoing => GREEN,
            RotationStatus::Completed => GREY,
        }
    }
}

/// `None` never expires. Otherwise: past expiry is `Expired`, within
/// [`EXPIRING_WINDOW_DAYS`] (inclusive, expiry day included) is `Expiring`.
pub fn document_status(expiry: Option<NaiveDate>, today: NaiveDate) -> DocStatus {
    let Some(expiry) = expiry else {
        return DocStatus::Valid;
    };

    let diff_days = (expiry - today).num_days();

    if diff_days < 0 {
        DocStatus::Expired
    } else if diff_days <= EXPIRING_WINDOW_DAYS {
        DocStatus::Expiring
    } else {
        DocStatus::Valid
    }
}

pub fn rotation_status(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> RotationStatus {
    if today < start {
        RotationStatus::Planned
    } else if today <= end {
        RotationStatus::Ongoing
    } else {
        RotationStatus::Completed
    }
}
