//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database file without touching the schema.
    pub fn new(path: &str) -> rusqlite::Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open the database file and bring the schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        init_db(&pool.conn)?;
        Ok(pool)
    }

    /// Private in-memory database with the current schema.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}
