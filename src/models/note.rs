use super::collection::Collection;
use crate::db::store::Record;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteCategory {
    #[default]
    Professional,
    Personal,
    Studies,
    Health,
    Financial,
    Other,
}

impl NoteCategory {
    pub fn code(&self) -> &'static str {
        match self {
            NoteCategory::Professional => "professional",
            NoteCategory::Personal => "personal",
            NoteCategory::Studies => "studies",
            NoteCategory::Health => "health",
            NoteCategory::Financial => "financial",
            NoteCategory::Other => "other",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "professional" | "work" => Some(NoteCategory::Professional),
            "personal" => Some(NoteCategory::Personal),
            "studies" | "study" => Some(NoteCategory::Studies),
            "health" => Some(NoteCategory::Health),
            "financial" | "finance" => Some(NoteCategory::Financial),
            "other" => Some(NoteCategory::Other),
            _ => None,
        }
    }
}

/// Free-text diary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryNote {
    pub id: String,
    pub timestamp: DateTime<Local>,
    #[serde(default)]
    pub category: NoteCategory,
    pub content: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl DiaryNote {
    /// Tags are stored lowercased and trimmed, empty ones dropped.
    pub fn normalize_tags<I, S>(raw: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter()
            .map(|t| t.as_ref().trim().trim_start_matches('#').to_lowercase())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

impl Record for DiaryNote {
    const COLLECTION: Collection = Collection::Notes;

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_for_listing(items: &mut [Self]) {
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }
}
