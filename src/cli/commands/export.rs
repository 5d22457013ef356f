use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let session = open_session(cfg)?;
        ExportLogic::export(session.ledger(), *format, file, range.as_deref(), *force)?;
    }
    Ok(())
}
