//! CLI command implementations.

pub mod load;
pub mod run;
pub mod show;

// Re-export argument structs for the top-level parser
pub use load::LoadArgs;
pub use run::RunArgs;
pub use show::ShowArgs;

use std::path::PathBuf;
use std::sync::Arc;

use gfim_core::types::TradeDate;
use gfim_engine::EngineConfig;
use gfim_storage::{MarketStore, RedbStore};

use crate::cli::{Cli, OutputFormat};
use crate::error::{CliError, CliResult};

/// Resolved globals shared by every command.
pub struct Context {
    /// Open market store.
    pub store: Arc<dyn MarketStore>,
    /// Engine configuration.
    pub config: EngineConfig,
    /// Output format.
    pub format: OutputFormat,
}

impl Context {
    /// Resolves the store and configuration from the global CLI flags.
    ///
    /// The store path is taken from `--store` (or `GFIM_STORE`), falling
    /// back to the configuration's `storage_path`; missing parent
    /// directories are created.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let config = match &cli.config {
            Some(path) => EngineConfig::from_file(path)?,
            None => EngineConfig::default(),
        };

        let path: PathBuf = cli
            .store
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.storage_path));
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let store = RedbStore::open(&path)?;

        Ok(Self {
            store: Arc::new(store),
            config,
            format: cli.format,
        })
    }
}

/// Parses a trade date, defaulting to today when absent.
pub fn resolve_date(date: &Option<String>) -> CliResult<TradeDate> {
    match date {
        Some(s) => TradeDate::parse(s).map_err(|_| CliError::InvalidDate(s.clone())),
        None => Ok(TradeDate::today()),
    }
}
