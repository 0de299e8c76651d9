//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{LoadArgs, RunArgs, ShowArgs};

/// GFIM - Ghana Fixed Income Market daily analytics CLI
#[derive(Parser)]
#[command(name = "gfim")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Path to the market database file
    #[arg(long, env = "GFIM_STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the daily analytics pipeline for one trade date
    Run(RunArgs),

    /// Load raw trade rows from a JSON file into a source table
    Load(LoadArgs),

    /// Display stored results for one trade date
    Show(ShowArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (one record per line)
    Minimal,
}
