use crate::config::Config;
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the logbook database to `dest_file`, optionally zipped.
    /// Returns the final path, or `None` when the user declined to overwrite.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<Option<PathBuf>> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::Other(format!(
                "Database not found: {}",
                src.display()
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if dest.exists()
            && !ask_confirmation(&format!(
                "The file '{}' already exists. Overwrite it?",
                dest.display()
            ))
        {
            info("Backup cancelled by user.");
            return Ok(None);
        }

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress {
            let compressed = compress_backup(dest)?;
            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            }
            compressed
        } else {
            dest.to_path_buf()
        };

        // The copy is already on disk; a closed source only skips the audit line.
        if let Ok(pool) = DbPool::new(&cfg.database) {
            audit_or_warn(
                &pool.conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(Some(final_path))
    }
}

/// Zip `path` next to itself (`<name>.zip`).
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "marinerlog.sqlite".to_string());

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
