pub mod auth;
pub mod backup;
pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod doc;
pub mod export;
pub mod init;
pub mod leave;
pub mod log;
pub mod note;
pub mod rotation;
pub mod seatime;

use crate::config::Config;
use crate::core::auth::SessionContext;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the logbook for a data command, enforcing `require_login`.
pub(crate) fn open_logbook(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::open(&cfg.database)?;
    SessionContext::load(&pool)?.ensure(cfg.require_login)?;
    Ok(pool)
}
