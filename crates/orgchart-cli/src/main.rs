//! Orgchart CLI
//!
//! Interactive command loop over an in-memory organisational hierarchy.

use std::path::PathBuf;

use clap::Parser;
use orgchart_core::logging_facility::{self, Profile};

mod commands;
mod config;
mod render;

#[derive(Debug, Parser)]
#[command(name = "orgchart")]
#[command(about = "Orgchart - build a reporting hierarchy one command at a time", long_about = None)]
struct Cli {
    /// Logging profile (development, production, test)
    #[arg(long, env = "ORGCHART_LOG_PROFILE", default_value = "development")]
    log_profile: Profile,

    /// TOML file overriding role limits
    #[arg(long, env = "ORGCHART_LIMITS")]
    limits: Option<PathBuf>,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print the final hierarchy as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let limits = config::load_limits(cli.limits.as_deref())?;
    let args = commands::session::SessionArgs {
        limits,
        script: cli.script,
        json: cli.json,
    };
    commands::session::execute(args)
}
