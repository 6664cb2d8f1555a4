use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Export {
        collection,
        format,
        file,
        range,
        force,
    } = cmd
    {
        let pool = super::open_logbook(cfg)?;
        ExportLogic::export(
            &pool,
            *collection,
            *format,
            file,
            range.as_deref(),
            *force,
            today,
        )?;
    }
    Ok(())
}
