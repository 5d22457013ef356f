use crate::cli::commands::open_session;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::mins2readable;
use crate::utils::time;

/// Show the most recent activity and the default start of the next one.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = open_session(cfg)?;

    let Some(last) = session.ledger().last() else {
        info("No activities logged yet.");
        return Ok(());
    };

    header(format!("Last activity #{}", last.id));
    println!("Episode:   {}", last.episode);
    println!(
        "When:      {} {} ({})",
        last.start.format("%Y-%m-%d"),
        last.time_range(),
        mins2readable(last.duration, false, false)
    );
    println!("Category:  {}", last.classification);
    println!("Location:  {}", last.location.display());
    if !last.description.is_empty() {
        println!("Note:      {}", last.description);
    }

    let next = session.ledger().suggest_start(
        time::now(),
        cfg.gap_threshold(),
        cfg.default_duration(),
    );
    println!("\nNext entry would start at {}", next.format("%Y-%m-%d %H:%M"));
    Ok(())
}
