//! koyomi library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! date-annotation core (catalog, resolver, grid, overlay).

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // A --plain flag beats the configured color preference.
    let plain = cli.plain || !cfg.use_color;

    match &cli.command {
        Commands::Month { .. } => cli::commands::month::handle(&cli.command, cfg, plain),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, plain),
        Commands::Next { .. } => cli::commands::next::handle(&cli.command),
        Commands::Legend => cli::commands::legend::handle(&cli.command, plain),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is read once per invocation.
    let cfg = Config::load();

    dispatch(&cli, &cfg)
}
