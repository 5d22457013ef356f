use crate::cli::commands::open_session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{Document, DocumentStore};
use tracing::info;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the data directory
///  - the starter taxonomy and templates, unless documents already exist
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rdaylog…");

    let cfg = Config::init_all(cli.data_dir.as_deref(), cli.test)?;
    let session = open_session(&cfg)?;

    let mut created = 0;
    for doc in Document::ALL {
        // Existing documents are left untouched, even unreadable ones.
        if session.store().load(doc)?.is_none() {
            session.save(doc)?;
            println!("📄 Created {}", session.store().path_of(doc).display());
            created += 1;
        }
    }

    info!(data_dir = %cfg.data_dir, created, "initialized");
    println!("🎉 rdaylog initialization completed!");
    Ok(())
}
