//! Error types for dataset ingest and the diversification engine.
//!
//! All variants are recoverable conditions reported to the caller;
//! none are fatal to the process.

use thiserror::Error;

/// Errors raised while resolving and analyzing a customer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// No customer with the given id exists in the dataset.
    #[error("customer '{client_id}' not found")]
    CustomerNotFound { client_id: String },

    /// The customer exists but holds no funds.
    #[error("customer '{client_id}' has no funds to analyze")]
    NoFundsToAnalyze { client_id: String },

    /// The query did not carry a client id.
    #[error("a client id is required")]
    MissingClientId,
}

/// Errors raised while ingesting a portfolio dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The payload was valid JSON but not an array of customer records.
    #[error("invalid dataset: expected a JSON array of customer records")]
    InvalidShape,

    /// The payload was an empty array.
    #[error("invalid dataset: no customer records found")]
    Empty,

    #[error("failed to read dataset file: {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset JSON")]
    Parse(#[from] serde_json::Error),
}
