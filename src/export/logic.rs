// src/export/logic.rs

use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::store::CollectionStore;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::Exportable;
use crate::export::range::parse_range;
use crate::export::to_csv::write_csv;
use crate::export::to_json::write_json;
use crate::export::{ExportFormat, ExportTarget, notify_export_success};
use crate::models::{DiaryNote, Leave, Rotation, SeaTimeEntry, TrainingDocument};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one collection.
    ///
    /// - `range`: `None`, `"all"` or an expression accepted by
    ///   [`parse_range`]; records whose dates overlap it are kept.
    /// - `file`: absolute output path; an existing file needs `force` or
    ///   confirmation.
    pub fn export(
        pool: &DbPool,
        target: ExportTarget,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
        today: NaiveDate,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);
        let path = path.as_path();

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let count = match target {
            ExportTarget::Rotations => {
                Self::export_records::<Rotation>(pool, format, path, range, today)?
            }
            ExportTarget::SeaTime => {
                Self::export_records::<SeaTimeEntry>(pool, format, path, range, today)?
            }
            ExportTarget::Leaves => Self::export_records::<Leave>(pool, format, path, range, today)?,
            ExportTarget::Documents => {
                Self::export_records::<TrainingDocument>(pool, format, path, range, today)?
            }
            ExportTarget::Notes => {
                Self::export_records::<DiaryNote>(pool, format, path, range, today)?
            }
        };

        audit_or_warn(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!(
                "Exported {} {} as {}",
                count,
                target.collection().key(),
                format.as_str()
            ),
        );

        Ok(count)
    }

    fn export_records<T: Exportable>(
        pool: &DbPool,
        format: ExportFormat,
        path: &Path,
        range: Option<&str>,
        today: NaiveDate,
    ) -> AppResult<usize> {
        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows: Vec<Vec<String>> = CollectionStore::<T>::new(pool)
            .list()?
            .iter()
            .filter(|rec| bounds.is_none_or(|b| b.overlaps(&rec.span())))
            .map(|rec| rec.row(today))
            .collect();

        if rows.is_empty() {
            warning("No records match the requested range; writing an empty export.");
        }

        match format {
            ExportFormat::Csv => write_csv(path, T::headers(), &rows)?,
            ExportFormat::Json => write_json(path, T::headers(), &rows)?,
        }

        notify_export_success(T::COLLECTION.key(), rows.len(), path);
        Ok(rows.len())
    }
}
