//! marinerlog library root.
//! Exposes the CLI parser, the high-level run() function, the date-interval
//! accounting engine and the storage layer.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::date::resolve_today;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let today = resolve_today(cli.today.as_ref())?;

    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg, today),
        Commands::Register { .. }
        | Commands::Login { .. }
        | Commands::Logout
        | Commands::Whoami
        | Commands::ResetPassword { .. } => commands::auth::handle(&cli.command, cfg),
        Commands::Rotation { .. } => commands::rotation::handle(&cli.command, cfg, today),
        Commands::SeaTime { .. } => commands::seatime::handle(&cli.command, cfg),
        Commands::Leave { .. } => commands::leave::handle(&cli.command, cfg),
        Commands::Doc { .. } => commands::doc::handle(&cli.command, cfg, today),
        Commands::Note { .. } => commands::note::handle(&cli.command, cfg),
        Commands::Dashboard => commands::dashboard::handle(cfg, today),
        Commands::Calendar { .. } => commands::calendar::handle(&cli.command, cfg, today),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
