//! hoslog library root.
//! Duty timeline, cycle usage and travel estimate engines, plus the CLI
//! front end used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &std::path::Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::List { .. } => cli::commands::list::handle(&cli.command),
        Commands::Path { .. } => cli::commands::path::handle(&cli.command, cfg),
        Commands::Sheet { .. } => cli::commands::sheet::handle(&cli.command, cfg),
        Commands::Cycle { .. } => cli::commands::cycle::handle(&cli.command),
        Commands::Travel { .. } => cli::commands::travel::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    // init must not choke on a broken existing file
    let cfg = if matches!(cli.command, Commands::Init { .. }) {
        Config::default()
    } else {
        Config::load_from(&config_path)?
    };

    dispatch(&cli, &cfg, &config_path)
}
