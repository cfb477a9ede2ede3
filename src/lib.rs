pub mod cli;
pub mod config;
pub mod core;
pub mod store;

pub use crate::core::dataset::{Customer, Dataset, Fund};
pub use crate::core::diversify::{analyze, AnalysisResult};
pub use crate::core::error::{AnalysisError, DatasetError};

use anyhow::{Context, Result};
use store::DatasetStore;
use tracing::{debug, info};

/// Commands the application can execute against a loaded dataset.
pub enum AppCommand {
    Clients,
    Analyze { client_id: Option<String>, json: bool },
    Report,
}

pub fn run_command(
    command: AppCommand,
    dataset_path: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    info!("Diversification scorer starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let dataset_path = dataset_path
        .map(str::to_string)
        .or_else(|| config.dataset_path.clone())
        .context("No dataset given. Pass --dataset or set dataset_path in the config file")?;

    let dataset = Dataset::from_path(&dataset_path)
        .with_context(|| format!("Failed to load dataset from {dataset_path}"))?;

    // Ingest replaces the store's dataset wholesale; the command then
    // works off one snapshot for its entire run.
    let store = DatasetStore::new();
    store.replace(dataset);
    let snapshot = store.snapshot();

    match command {
        AppCommand::Clients => cli::clients::run(&snapshot),
        AppCommand::Analyze { client_id, json } => cli::analyze::run(
            &snapshot,
            client_id.as_deref(),
            json,
            config.currency.as_deref(),
        ),
        AppCommand::Report => cli::report::run(&snapshot),
    }
}
