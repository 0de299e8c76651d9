//! Run command implementation.
//!
//! Executes the daily pipeline for one trade date.

use anyhow::Result;
use clap::Args;

use gfim_engine::QuantEngine;

use crate::cli::OutputFormat;
use crate::commands::{resolve_date, Context};
use crate::output::{print_header, print_output, print_success, KeyValue};

/// Arguments for the run command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Trade date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Compute everything but write nothing
    #[arg(long)]
    pub dry_run: bool,
}

/// Execute the run command.
pub fn execute(args: RunArgs, context: &Context) -> Result<()> {
    let date = resolve_date(&args.date)?;
    let engine = QuantEngine::new(context.store.clone(), context.config.clone());

    let report = if args.dry_run {
        engine.dry_run(date)?
    } else {
        engine.run(date)?
    };

    match context.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Minimal => {
            println!("{}", serde_json::to_string(&report)?);
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("Date", report.date.to_string()),
                KeyValue::new("Metrics", report.metric_count.to_string()),
                KeyValue::new("Skipped rows", report.skipped_rows.to_string()),
                KeyValue::new("Curve points", report.curve_point_count.to_string()),
                KeyValue::new("Spread alerts", report.spread_alert_count.to_string()),
                KeyValue::new("Volume alerts", report.volume_alert_count.to_string()),
                KeyValue::new(
                    "Failed sections",
                    if report.failed_sections.is_empty() {
                        "none".to_string()
                    } else {
                        report.failed_sections.join(", ")
                    },
                ),
                KeyValue::new("Persisted", report.persisted.to_string()),
            ];
            if context.format == OutputFormat::Table {
                print_header("Engine Run");
            }
            print_output(&rows, context.format)?;
            if context.format == OutputFormat::Table && report.failed_sections.is_empty() {
                print_success("run complete");
            }
        }
    }

    Ok(())
}
