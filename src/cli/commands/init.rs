use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::audit_or_warn;
use crate::db::migrate::print_applied;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped with `--test`)
///  - the SQLite database, with all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing marinerlog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::new(&db_path)?;
    let applied = init_db(&pool.conn)?;
    print_applied(&applied);
    println!("✅ Database initialized at {}", &db_path);

    audit_or_warn(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 marinerlog initialization completed!");
    Ok(())
}
