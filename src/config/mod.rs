use crate::errors::AppResult;
use crate::models::Regime;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Regime label used when `rotation add` gets no `--regime`.
    #[serde(default = "default_regime")]
    pub default_regime: String,
    /// strftime pattern for dates shown on screen.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Refuse data commands until someone is logged in.
    #[serde(default)]
    pub require_login: bool,
    /// How many urgent documents the dashboard lists.
    #[serde(default = "default_urgent_preview")]
    pub urgent_preview: usize,
}

fn default_regime() -> String {
    Regime::default().label()
}
fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_urgent_preview() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_regime: default_regime(),
            date_format: default_date_format(),
            separator_char: default_separator_char(),
            require_login: false,
            urgent_preview: default_urgent_preview(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("marinerlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".marinerlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("marinerlog.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("marinerlog.sqlite")
    }

    /// `--db` value as a path: `~/` expanded, relative names placed in
    /// the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    pub fn regime(&self) -> Regime {
        Regime::parse(&self.default_regime)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&Self::with_database(db_path.clone()))?;
            fs::write(Self::config_file(), yaml)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
