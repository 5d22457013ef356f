use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut session = open_session(cfg)?;

        if session.ledger().is_empty() {
            info("The ledger is already empty.");
            return Ok(());
        }

        let prompt = format!(
            "Delete ALL {} activities? Templates and taxonomy are kept. This action is irreversible.",
            session.ledger().len()
        );
        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let n = session.clear_activities()?;
        success(format!("{n} activities deleted."));
    }

    Ok(())
}
