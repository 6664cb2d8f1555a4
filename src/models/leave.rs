use super::collection::Collection;
use crate::db::store::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    Course,
    Vacation,
    DayOff,
    TimeBank,
    Other,
}

impl LeaveKind {
    pub fn code(&self) -> &'static str {
        match self {
            LeaveKind::Course => "course",
            LeaveKind::Vacation => "vacation",
            LeaveKind::DayOff => "day-off",
            LeaveKind::TimeBank => "time-bank",
            LeaveKind::Other => "other",
        }
    }

    /// Helper: convert input code from CLI (any case, `-` or `_`)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().replace('_', "-").as_str() {
            "course" => Some(LeaveKind::Course),
            "vacation" => Some(LeaveKind::Vacation),
            "day-off" | "dayoff" => Some(LeaveKind::DayOff),
            "time-bank" | "timebank" => Some(LeaveKind::TimeBank),
            "other" => Some(LeaveKind::Other),
            _ => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            LeaveKind::Vacation => "🌴",
            LeaveKind::Course => "🎓",
            _ => "📅",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    #[default]
    Planned,
    Approved,
    Completed,
}

impl LeaveStatus {
    pub fn code(&self) -> &'static str {
        match self {
            LeaveStatus::Planned => "planned",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Completed => "completed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "planned" => Some(LeaveStatus::Planned),
            "approved" => Some(LeaveStatus::Approved),
            "completed" => Some(LeaveStatus::Completed),
            _ => None,
        }
    }
}

/// A planned course, vacation or other period ashore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leave {
    pub id: String,
    pub title: String,
    pub kind: LeaveKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: LeaveStatus,
    #[serde(default)]
    pub notes: String,
}

impl Record for Leave {
    const COLLECTION: Collection = Collection::Leaves;

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_for_listing(items: &mut [Self]) {
        items.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    }
}
