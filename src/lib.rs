//! rdaylog library root.
//! Exposes the CLI parser, the high-level run() function and the activity
//! ledger / taxonomy / template / recommendation services.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, cfg),
        Commands::Last => cli::commands::last::handle(cfg),
        Commands::Recommend { .. } => cli::commands::recommend::handle(&cli.command, cfg),
        Commands::Template { .. } => cli::commands::template::handle(&cli.command, cfg),
        Commands::Taxonomy { .. } => cli::commands::taxonomy::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_dir) = &cli.data_dir {
        cfg.set_data_dir(custom_dir);
    }

    // Logging is best-effort: a read-only data dir must not block the CLI.
    if let Err(e) = utils::logging::enable_logging(&cfg.data_path(), &cfg.log_level, cli.verbose) {
        ui::messages::warning(format!("Logging disabled: {e}"));
    }

    dispatch(&cli, &cfg)
}
