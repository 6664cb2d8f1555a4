use super::collection::Collection;
use crate::db::store::Record;
use crate::errors::{AppError, AppResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Upper bound for attachment files (1.5 MiB), checked before encoding.
pub const MAX_ATTACHMENT_BYTES: u64 = 1_572_864;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocKind {
    Course,
    Certificate,
    Document, // passport, seaman's book, ...
}

impl DocKind {
    pub fn code(&self) -> &'static str {
        match self {
            DocKind::Course => "course",
            DocKind::Certificate => "certificate",
            DocKind::Document => "document",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "course" => Some(DocKind::Course),
            "certificate" | "cert" => Some(DocKind::Certificate),
            "document" | "doc" => Some(DocKind::Document),
            _ => None,
        }
    }
}

/// Opaque attachment: base64 payload plus the original file name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub data: String,
}

impl Attachment {
    pub fn from_bytes(name: &str, bytes: &[u8]) -> AppResult<Self> {
        let size = bytes.len() as u64;
        if size > MAX_ATTACHMENT_BYTES {
            return Err(AppError::AttachmentTooLarge {
                size,
                max: MAX_ATTACHMENT_BYTES,
            });
        }

        Ok(Self {
            name: name.to_string(),
            data: B64.encode(bytes),
        })
    }

    /// Read a file from disk, rejecting it before the read if it is too large.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let size = fs::metadata(path)?.len();
        if size > MAX_ATTACHMENT_BYTES {
            return Err(AppError::AttachmentTooLarge {
                size,
                max: MAX_ATTACHMENT_BYTES,
            });
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "attachment".to_string());

        Self::from_bytes(&name, &fs::read(path)?)
    }

    pub fn decode(&self) -> AppResult<Vec<u8>> {
        Ok(B64.decode(self.data.as_bytes())?)
    }
}

/// Training record, certificate or identity document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingDocument {
    pub id: String,
    pub name: String,
    pub kind: DocKind,
    #[serde(default)]
    pub institution: String,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>, // None => never expires
    #[serde(default)]
    pub doc_number: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub attachment: Option<Attachment>,
}

impl Record for TrainingDocument {
    const COLLECTION: Collection = Collection::Documents;

    fn id(&self) -> &str {
        &self.id
    }

    /// Soonest expiry first, documents without expiry last.
    fn sort_for_listing(items: &mut [Self]) {
        items.sort_by_key(|d| (d.expiry_date.is_none(), d.expiry_date));
    }
}
