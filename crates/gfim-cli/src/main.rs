//! GFIM CLI - Command-line interface for the daily market analytics engine.
//!
//! # Usage
//!
//! ```bash
//! # Load a day's raw trade rows into a source table
//! gfim load --table treasury-bills --file bills-2026-01-30.json
//!
//! # Run the daily engine
//! gfim run --date 2026-01-30
//!
//! # Inspect the results
//! gfim show summary --date 2026-01-30
//! gfim show curve --date 2026-01-30 --format csv
//! gfim show alerts --date 2026-01-30
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Logs go to stderr so formatted output stays pipeable.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let context = commands::Context::from_cli(&cli)?;

    match cli.command {
        Commands::Run(args) => commands::run::execute(args, &context)?,
        Commands::Load(args) => commands::load::execute(args, &context)?,
        Commands::Show(args) => commands::show::execute(args, &context)?,
    }

    Ok(())
}
