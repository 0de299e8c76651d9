//! Show command implementation.
//!
//! Displays stored engine results for one trade date.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use gfim_core::records::{DailySummary, MarketAlert, SecurityMetric, YieldCurvePoint};

use crate::cli::OutputFormat;
use crate::commands::{resolve_date, Context};
use crate::error::CliError;
use crate::output::{fmt_opt, fmt_volume, print_header, print_output, KeyValue};

/// Arguments for the show command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(subcommand)]
    pub command: ShowCommand,
}

/// Show subcommands.
#[derive(Subcommand, Debug)]
pub enum ShowCommand {
    /// Daily market summary
    Summary(DateArg),

    /// Benchmark yield curve points
    Curve(DateArg),

    /// Per-security metrics
    Metrics(DateArg),

    /// Market alerts
    Alerts(DateArg),
}

/// A single optional date argument.
#[derive(Args, Debug)]
pub struct DateArg {
    /// Trade date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Execute the show command.
pub fn execute(args: ShowArgs, context: &Context) -> Result<()> {
    match args.command {
        ShowCommand::Summary(date_arg) => show_summary(&date_arg, context),
        ShowCommand::Curve(date_arg) => show_curve(&date_arg, context),
        ShowCommand::Metrics(date_arg) => show_metrics(&date_arg, context),
        ShowCommand::Alerts(date_arg) => show_alerts(&date_arg, context),
    }
}

fn show_summary(args: &DateArg, context: &Context) -> Result<()> {
    let date = resolve_date(&args.date)?;
    let summary = context.store.daily_summary(date).map_err(CliError::Store)?;

    let Some(summary) = summary else {
        println!("No summary for {}.", date);
        return Ok(());
    };

    match context.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Minimal => println!("{}", serde_json::to_string(&summary)?),
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = summary_rows(&summary);
            if context.format == OutputFormat::Table {
                print_header(&format!("Market Summary {}", date));
            }
            print_output(&rows, context.format)?;
        }
    }
    Ok(())
}

fn summary_rows(summary: &DailySummary) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Date", summary.date.to_string()),
        KeyValue::new("Curve shape", summary.curve_shape.to_string()),
        KeyValue::new("Curve slope", format!("{:.2}", summary.curve_slope)),
        KeyValue::new("91D-10Y spread", fmt_opt(summary.spread_91d_10y, 2)),
        KeyValue::new("GOG volume", format!("{:.0}", summary.total_volume_gog)),
        KeyValue::new("T-bill volume", format!("{:.0}", summary.total_volume_tbill)),
        KeyValue::new(
            "Corporate volume",
            format!("{:.0}", summary.total_volume_corporate),
        ),
        KeyValue::new(
            "Most active",
            summary.most_active_isin.clone().unwrap_or_else(|| "-".into()),
        ),
        KeyValue::new("Inflation rate", format!("{:.1}%", summary.inflation_rate)),
        KeyValue::new("Policy rate", format!("{:.1}%", summary.policy_rate)),
    ]
}

/// Curve point display row.
#[derive(Tabled, Serialize)]
struct CurveRow {
    #[tabled(rename = "Bucket")]
    bucket: String,
    #[tabled(rename = "Days")]
    days: u32,
    #[tabled(rename = "Yield (%)")]
    yield_pct: String,
    #[tabled(rename = "Curve")]
    curve_type: String,
}

impl From<&YieldCurvePoint> for CurveRow {
    fn from(point: &YieldCurvePoint) -> Self {
        Self {
            bucket: point.maturity_bucket.to_string(),
            days: point.maturity_days,
            yield_pct: format!("{:.4}", point.yield_pct),
            curve_type: point.curve_type.clone(),
        }
    }
}

fn show_curve(args: &DateArg, context: &Context) -> Result<()> {
    let date = resolve_date(&args.date)?;
    let points = context
        .store
        .curve_points_for_date(date)
        .map_err(CliError::Store)?;

    if context.format == OutputFormat::Table {
        print_header(&format!("Yield Curve {}", date));
    }
    let rows: Vec<CurveRow> = points.iter().map(CurveRow::from).collect();
    print_output(&rows, context.format)?;
    Ok(())
}

/// Security metric display row.
#[derive(Tabled, Serialize)]
struct MetricRow {
    #[tabled(rename = "ISIN")]
    isin: String,
    #[tabled(rename = "Type")]
    security_type: String,
    #[tabled(rename = "YTM (%)")]
    ytm: String,
    #[tabled(rename = "Real (%)")]
    real_yield: String,
    #[tabled(rename = "Duration")]
    modified_duration: String,
    #[tabled(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Liquidity")]
    liquidity: String,
    #[tabled(rename = "Spread")]
    spread_vs_govt: String,
    #[tabled(rename = "Spike")]
    volume_spike: String,
}

impl From<&SecurityMetric> for MetricRow {
    fn from(metric: &SecurityMetric) -> Self {
        Self {
            isin: metric.isin.clone(),
            security_type: metric.security_type.to_string(),
            ytm: fmt_opt(metric.ytm, 4),
            real_yield: fmt_opt(metric.real_yield, 2),
            modified_duration: fmt_opt(metric.modified_duration, 2),
            volume: fmt_volume(metric.volume),
            liquidity: metric.liquidity_score.to_string(),
            spread_vs_govt: fmt_opt(metric.spread_vs_govt, 4),
            volume_spike: match metric.volume_spike_flag {
                Some(true) => "yes".into(),
                Some(false) => "no".into(),
                None => "-".into(),
            },
        }
    }
}

fn show_metrics(args: &DateArg, context: &Context) -> Result<()> {
    let date = resolve_date(&args.date)?;
    let metrics = context
        .store
        .metrics_for_date(date)
        .map_err(CliError::Store)?;

    match context.format {
        // Full records for machine formats; the table is a digest.
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&metrics)?),
        OutputFormat::Table | OutputFormat::Csv | OutputFormat::Minimal => {
            if context.format == OutputFormat::Table {
                print_header(&format!("Security Metrics {}", date));
            }
            let rows: Vec<MetricRow> = metrics.iter().map(MetricRow::from).collect();
            print_output(&rows, context.format)?;
        }
    }
    Ok(())
}

/// Market alert display row.
#[derive(Tabled, Serialize)]
struct AlertRow {
    #[tabled(rename = "ISIN")]
    isin: String,
    #[tabled(rename = "Type")]
    alert_type: String,
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Message")]
    message: String,
}

impl From<&MarketAlert> for AlertRow {
    fn from(alert: &MarketAlert) -> Self {
        Self {
            isin: alert.isin.clone(),
            alert_type: alert.alert_type.to_string(),
            severity: alert.severity.to_string(),
            message: alert.alert_message.clone(),
        }
    }
}

fn show_alerts(args: &DateArg, context: &Context) -> Result<()> {
    let date = resolve_date(&args.date)?;
    let alerts = context
        .store
        .alerts_for_date(date)
        .map_err(CliError::Store)?;

    if context.format == OutputFormat::Table {
        print_header(&format!("Market Alerts {}", date));
    }
    let rows: Vec<AlertRow> = alerts.iter().map(AlertRow::from).collect();
    print_output(&rows, context.format)?;
    Ok(())
}
