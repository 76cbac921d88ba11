//! rWorkday library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (day state machine, history, chart layout, export).

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
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::action::Action;
use crate::core::clock::{Clock, SystemClock};
use db::store::SqliteDayStore;
use errors::AppResult;
use tracing::debug;

/// Central command dispatcher
///
/// Commands working on days get one store opened for the whole session.
pub fn dispatch(cli: &Cli, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    let action = match &cli.command {
        Commands::Init => return cli::commands::init::handle(cli),
        Commands::Config { .. } => return cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => return cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => return cli::commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => return cli::commands::backup::handle(&cli.command, cfg),
        Commands::StartTransfer => Some(Action::StartTransfer),
        Commands::StartWork => Some(Action::StartWork),
        Commands::EndWork => Some(Action::EndWork),
        Commands::EndTransfer => Some(Action::EndTransfer),
        _ => None,
    };

    let mut store = SqliteDayStore::open(&cfg.database)?;
    debug!("opened store at {}", cfg.database);

    if let Some(action) = action {
        return cli::commands::action::handle(action, cfg, &mut store, clock);
    }

    match &cli.command {
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg, &mut store, clock),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg, &mut store),
        Commands::Chart { .. } => cli::commands::chart::handle(&cli.command, cfg, &mut store, clock),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, &mut store),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, &mut store),
        _ => Ok(()),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load the config once
    let mut cfg = Config::load()?;
    utils::logging::enable_logging(&cfg.log_level);

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg, &SystemClock)
}
