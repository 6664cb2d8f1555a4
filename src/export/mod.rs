// src/export/mod.rs

mod to_csv;
mod fs_utils;
mod to_json;
pub mod logic;
pub mod model;
pub mod range;

pub use logic::ExportLogic;
pub use model::Exportable;

use crate::models::Collection;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for every export.
pub(crate) fn notify_export_success(label: &str, count: usize, path: &Path) {
    success(format!(
        "{label} export completed: {count} record(s) → {}",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Collections that can be exported (accounts and sessions cannot).
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    Rotations,
    SeaTime,
    Leaves,
    Documents,
    Notes,
}

impl ExportTarget {
    pub fn collection(&self) -> Collection {
        match self {
            ExportTarget::Rotations => Collection::Rotations,
            ExportTarget::SeaTime => Collection::SeaTime,
            ExportTarget::Leaves => Collection::Leaves,
            ExportTarget::Documents => Collection::Documents,
            ExportTarget::Notes => Collection::Notes,
        }
    }
}
