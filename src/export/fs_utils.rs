// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::ui::prompt::ask_confirmation;
use std::path::Path;

/// Check whether a file can be created or overwritten.
///
/// - file does NOT exist → Ok
/// - file exists and `force` → Ok
/// - file exists and `force == false` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if ask_confirmation("Overwrite?") {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        ))
    }
}
