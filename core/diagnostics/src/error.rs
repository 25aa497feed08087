//! FILENAME: core/diagnostics/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed to create log dir at {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to open log file {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Log file not initialized")]
    NotInitialized,

    #[error("Log lock poisoned")]
    Poisoned,

    #[error("Log IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("A global logger is already installed")]
    AlreadyInstalled,
}
