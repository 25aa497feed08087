//! FILENAME: core/picksheet/src/error.rs

use labels::LabelError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Label(#[from] LabelError),

    #[error("Could not load font family '{family}' from {dir:?}: {source}")]
    FontLoad {
        dir: PathBuf,
        family: String,
        source: genpdf::error::Error,
    },

    #[error("PDF error: {0}")]
    Pdf(#[from] genpdf::error::Error),

    #[error("Input not found: {0:?}")]
    InputNotFound(PathBuf),

    #[error("Not a directory: {0:?}")]
    NotADirectory(PathBuf),

    #[error("Not a file: {0:?}")]
    NotAFile(PathBuf),

    #[error("No PDF files in {0:?}")]
    NoInputs(PathBuf),

    #[error("No orders could be parsed from the input")]
    NoOrders,
}
