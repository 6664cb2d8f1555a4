use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report keys missing from the file on disk. Returns how many.
    pub fn check(path: &Path) -> AppResult<usize> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {} (defaults in use). Run `marinerlog init`.",
                path.display()
            ));
            return Ok(0);
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let missing = migrate::missing_fields(&content)?;

        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!(
                "Missing field(s): {} (run `config --migrate`)",
                missing.join(", ")
            ));
        }
        Ok(missing.len())
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        let added = migrate::migrate_file(path)?;
        if added.is_empty() {
            info("Configuration already up to date.");
        } else {
            success(format!("Added field(s): {}", added.join(", ")));
        }
        Ok(())
    }

    /// Open the file in `editor`, then $EDITOR / $VISUAL, then nano/notepad.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            Ok(_) | Err(_) => {
                error(format!(
                    "Failed to edit configuration file using fallback '{}'",
                    default_editor
                ));
                Err(AppError::Config(format!("no usable editor for {}", path.display())))
            }
        }
    }
}
