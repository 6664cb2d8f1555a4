use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::{AuthLogic, AuthOutcome};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

fn report(outcome: AuthOutcome) {
    if outcome.success {
        success(outcome.message);
    } else {
        warning(outcome.message);
    }
}

/// Handle `register`, `login`, `logout`, `whoami` and `reset-password`.
/// These never require a session themselves.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database)?;

    match cmd {
        Commands::Register { email, password } => {
            report(AuthLogic::register(&pool, email, password)?);
        }
        Commands::Login { email, password } => {
            report(AuthLogic::login(&pool, email, password)?);
        }
        Commands::Logout => {
            if AuthLogic::logout(&pool)? {
                success("Logged out.");
            } else {
                info("No active session.");
            }
        }
        Commands::Whoami => match AuthLogic::current_user(&pool)? {
            Some(s) => println!("👤 {}", s.email),
            None => info("Not logged in."),
        },
        Commands::ResetPassword { email } => {
            if AuthLogic::reset_password(&pool, email)? {
                info(format!(
                    "A recovery link would be sent to {} (no mail channel configured).",
                    email.trim()
                ));
            } else {
                warning("Email not found.");
            }
        }
        _ => {}
    }

    Ok(())
}
