//! Error types for placement-io

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Placement core error: {0}")]
    Core(#[from] placement_core::Error),

    #[error("IO error at {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Malformed plan: {0}")]
    MalformedPlan(String),
}

impl Error {
    /// Attach the offending path to an I/O error
    pub fn file(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::File {
            path: path.display().to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
