//! Error type for the placement pipeline and its configuration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] placement_core::Error),

    #[error(transparent)]
    Io(#[from] placement_io::Error),

    #[error("Invalid configuration {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot read configuration {path}: {source}")]
    ConfigFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
