//! Core business logic abstractions

pub mod dataset;
pub mod diversify;
pub mod error;
pub mod log;

// Re-export main types for cleaner imports
pub use dataset::{Customer, Dataset, Fund};
pub use diversify::{analyze, AnalysisResult};
pub use error::{AnalysisError, DatasetError};
