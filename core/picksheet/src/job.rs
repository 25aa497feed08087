//! FILENAME: core/picksheet/src/job.rs
// PURPOSE: The startPdf job: label PDF(s) in, pickup and pick sheet PDF out.

use crate::{render, FontSpec, PickSheet, SheetError};
use chrono::NaiveDate;
use labels::{extract_text, parse_labels};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequest {
    /// A label PDF, or a folder of them when `folder` is set
    pub input: PathBuf,
    pub folder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSettings {
    pub fonts: FontSpec,
    /// Defaults to the directory of the input
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobReport {
    pub output: PathBuf,
    pub files: usize,
    pub labels: usize,
    pub orders: usize,
    pub rejected: usize,
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Resolve the label files a request refers to.
/// Folder inputs are scanned one level deep and returned in name order.
pub fn collect_inputs(request: &JobRequest) -> Result<Vec<PathBuf>, SheetError> {
    let input = &request.input;
    if !input.exists() {
        return Err(SheetError::InputNotFound(input.clone()));
    }

    if !request.folder {
        if !input.is_file() {
            return Err(SheetError::NotAFile(input.clone()));
        }
        return Ok(vec![input.clone()]);
    }

    if !input.is_dir() {
        return Err(SheetError::NotADirectory(input.clone()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(input)? {
        let path = entry?.path();
        if path.is_file() && is_pdf(&path) {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(SheetError::NoInputs(input.clone()));
    }
    Ok(files)
}

/// `<dir>/picksheet-YYYY-MM-DD.pdf`, where `dir` is the configured output
/// directory or the directory the input lives in.
pub fn output_path(request: &JobRequest, settings: &JobSettings, date: NaiveDate) -> PathBuf {
    let dir = match &settings.output_dir {
        Some(dir) => dir.clone(),
        None if request.folder => request.input.clone(),
        None => request
            .input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };
    dir.join(format!("picksheet-{}.pdf", date.format("%Y-%m-%d")))
}

/// Run the whole job. No sheet is written when no order could be parsed.
pub fn run(request: &JobRequest, settings: &JobSettings) -> Result<JobReport, SheetError> {
    log::info!(
        target: "JOB",
        "Got input {} with folder: {}",
        request.input.display(),
        request.folder
    );

    let files = collect_inputs(request)?;

    let mut orders = Vec::new();
    let mut labels = 0;
    let mut rejected = 0;
    for file in &files {
        let text = extract_text(file)?;
        let parsed = parse_labels(&text);
        labels += parsed.label_count();
        rejected += parsed.rejected.len();
        orders.extend(parsed.orders);
    }

    let sheet = PickSheet::from_orders(&orders);
    if sheet.is_empty() {
        return Err(SheetError::NoOrders);
    }

    let output = output_path(request, settings, chrono::Local::now().date_naive());
    if let Some(dir) = output.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    render(&sheet, &settings.fonts, &output)?;

    Ok(JobReport {
        output,
        files: files.len(),
        labels,
        orders: orders.len(),
        rejected,
    })
}
