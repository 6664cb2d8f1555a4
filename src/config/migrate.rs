//! Keep an existing config file in step with the current `Config` struct.
//!
//! Older files may lack keys added since they were written. Serde fills
//! those with defaults at load time; `config --check` lists them and
//! `config --migrate` writes them back so the file documents every option.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config("configuration file is not a YAML mapping".into())),
    }
}

/// Keys present in the current schema but absent from `content`.
pub fn missing_fields(content: &str) -> AppResult<Vec<String>> {
    let current = parse_mapping(content)?;

    Ok(default_mapping()?
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value, keeping existing values.
/// Returns the keys that were added; the file is untouched when none are.
pub fn migrate_file(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let mut current = parse_mapping(&content)?;

    let mut added = Vec::new();
    for (k, v) in default_mapping()? {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    if !added.is_empty() {
        fs::write(path, serde_yaml::to_string(&Value::Mapping(current))?)?;
    }

    Ok(added)
}
