//! Error types for the determination engine and its loaders

use chrono::NaiveDate;
use thiserror::Error;

/// Failure of a determination run
///
/// The engine has a single failure mode: a date-indexed table with no row in force
/// at the requested date. Invalid numeric input never errors, it is coerced to zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("no applicable rate in table `{table}` for {date} (date precedes the first entry)")]
    NoApplicableRate { table: &'static str, date: NaiveDate },
}

/// Failure while reading rate tables or profiles from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rate table `{0}` has no rows")]
    EmptyTable(&'static str),
}
