//! FILENAME: core/labels/src/extract.rs
// PURPOSE: Text layer extraction from label PDFs.
// CONTEXT: pdf-extract can panic on malformed content streams; that is reported as an error.

use crate::LabelError;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

/// Extract the full text of a PDF file.
pub fn extract_text(path: &Path) -> Result<String, LabelError> {
    if !path.is_file() {
        return Err(LabelError::Extract {
            path: path.to_path_buf(),
            message: "file not found".to_string(),
        });
    }

    let outcome = catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text(path)));

    match outcome {
        Ok(Ok(text)) => {
            log::debug!(target: "LABELS", "Extracted {} bytes from {}", text.len(), path.display());
            Ok(text)
        }
        Ok(Err(e)) => Err(LabelError::Extract {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
        Err(_) => Err(LabelError::Extract {
            path: path.to_path_buf(),
            message: "extractor panicked on malformed document".to_string(),
        }),
    }
}
