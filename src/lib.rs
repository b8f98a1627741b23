//! eco2ve-timesheet library root.
//! Exposes the CLI parser, the high-level run() function and the pipeline
//! modules (roster, worklog aggregation, timesheet export).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod schema;
pub mod sheet;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::env;

/// Environment variable holding `log` filter directives.
pub const LOG_ENV: &str = "ECO2VE_TIMESHEET_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Generate { .. } => cli::commands::generate::handle(&cli.command, cfg),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Config { .. } => {
            let path = cli.config.clone().unwrap_or_else(Config::config_file);
            cli::commands::config::handle(&cli.command, cfg, &path)
        }
    }
}

fn init_logging(verbose: bool) {
    let filters = env::var(LOG_ENV)
        .unwrap_or_else(|_| if verbose { "debug" } else { "warn" }.to_string());
    // a logger may already be installed when embedded
    let _ = pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = Config::load(cli.config.as_deref())?;

    dispatch(&cli, &cfg)
}
