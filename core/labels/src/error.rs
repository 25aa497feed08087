//! FILENAME: core/labels/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("Could not extract text from {path:?}: {message}")]
    Extract { path: PathBuf, message: String },

    #[error("Label text too short ({0} bytes)")]
    TooShort(usize),

    #[error("Order number could not be parsed")]
    MissingOrderNumber,

    #[error("Tracking number could not be parsed")]
    MissingTrackingNumber,

    #[error("Could not match item information")]
    MissingItem,
}
