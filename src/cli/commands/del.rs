use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut session = open_session(cfg)?;

        let Some(activity) = session.ledger().get(*id) else {
            warning(format!("Activity #{id} not found. Nothing deleted."));
            return Ok(());
        };

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete #{} '{}' ({} {})? This action is irreversible.",
            activity.id,
            activity.episode,
            activity.start.format("%Y-%m-%d"),
            activity.time_range()
        );

        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        if session.remove_activity(*id)? {
            success(format!("Activity #{id} has been deleted."));
        }
    }

    Ok(())
}
