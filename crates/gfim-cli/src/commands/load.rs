//! Load command implementation.
//!
//! Upserts raw trade rows from a JSON file into one source table.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};

use gfim_core::records::RawTradeRecord;
use gfim_core::types::SourceTable;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliError;
use crate::output::print_success;

/// Arguments for the load command.
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Source table to load into
    #[arg(short, long, value_enum)]
    pub table: TableChoice,

    /// JSON file holding an array of raw trade rows
    #[arg(long)]
    pub file: PathBuf,
}

/// Source table choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableChoice {
    /// Newly issued GOG notes and bonds
    NewGog,
    /// Previously issued GOG notes and bonds
    OldGog,
    /// Treasury bills
    TreasuryBills,
    /// Corporate bonds
    Corporate,
}

impl From<TableChoice> for SourceTable {
    fn from(choice: TableChoice) -> Self {
        match choice {
            TableChoice::NewGog => SourceTable::NewGogNotesAndBonds,
            TableChoice::OldGog => SourceTable::OldGogNotesAndBonds,
            TableChoice::TreasuryBills => SourceTable::TreasuryBills,
            TableChoice::Corporate => SourceTable::Corporate,
        }
    }
}

/// Execute the load command.
pub fn execute(args: LoadArgs, context: &Context) -> Result<()> {
    let path = args.file.display().to_string();
    let content = std::fs::read_to_string(&args.file).map_err(|e| CliError::InvalidInput {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    let records: Vec<RawTradeRecord> =
        serde_json::from_str(&content).map_err(|e| CliError::InvalidInput {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    let table: SourceTable = args.table.into();
    let count = context
        .store
        .upsert_raw_records(table, &records)
        .map_err(CliError::Store)?;

    match context.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "table": table.table_name(),
                "file": path,
                "loaded": count,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => println!("{}", count),
        OutputFormat::Table | OutputFormat::Csv => {
            print_success(&format!("loaded {} rows into {}", count, table.table_name()));
        }
    }

    Ok(())
}
