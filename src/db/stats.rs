use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::AppResult;
use crate::models::Collection;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) RECORDS PER COLLECTION
    //
    println!("{}• Records:{}", CYAN, RESET);
    for c in Collection::ALL {
        let n = store::count(&pool.conn, c)?;
        let color = if n > 0 { GREEN } else { GREY };
        println!("    {:<10} {}{}{}", c.key(), color, n, RESET);
    }

    //
    // 3) LAST WRITE
    //
    let last_write: Option<String> = pool
        .conn
        .query_row(
            "SELECT updated_at FROM collections ORDER BY updated_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!(
        "{}• Last write:{} {}",
        CYAN,
        RESET,
        last_write.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 4) SCHEMA VERSION
    //
    let versions = applied_versions(&pool.conn)?;
    println!(
        "{}• Schema:{} {} migration(s), latest {}",
        CYAN,
        RESET,
        versions.len(),
        versions.last().map(String::as_str).unwrap_or("--")
    );

    println!();
    Ok(())
}
