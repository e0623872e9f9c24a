// One run: scan -> extract -> export

use std::path::{Path, PathBuf};

use crate::config;
use crate::error::RunError;
use crate::types::{ExtractionRecord, RunOutcome};
use crate::{export, extract, scan};

/// Check the two form fields before any I/O happens. The output path gets
/// the spreadsheet extension appended when it is missing, matching what a
/// native save dialog would have defaulted to.
pub fn validate(folder_field: &str, output_field: &str) -> Result<(PathBuf, PathBuf), RunError> {
    let folder_field = folder_field.trim();
    let output_field = output_field.trim();

    if folder_field.is_empty() {
        return Err(RunError::EmptyInput("the folder with PDFs"));
    }
    if output_field.is_empty() {
        return Err(RunError::EmptyInput("where to save the spreadsheet"));
    }

    let folder = PathBuf::from(folder_field);
    let output = if output_field.ends_with(config::SHEET_EXTENSION) {
        PathBuf::from(output_field)
    } else {
        PathBuf::from(format!("{output_field}{}", config::SHEET_EXTENSION))
    };

    Ok((folder, output))
}

/// Scan plus extract, no writing. The shell calls this first so per-file
/// warnings can be shown even when the export step later fails.
pub fn gather(folder: &Path) -> Result<(Vec<ExtractionRecord>, Vec<String>), RunError> {
    let candidates = scan::pdf_entries(folder)?;
    Ok(extract::extract_folder(&candidates))
}

/// The whole pipeline for one user action. Per-file failures come back as
/// warnings inside the outcome; only a missing folder or a failed save
/// aborts the run. Nothing is written when no file produced a record.
pub fn execute(folder: &Path, output: &Path) -> Result<RunOutcome, RunError> {
    let (records, warnings) = gather(folder)?;

    if records.is_empty() {
        return Ok(RunOutcome::Nothing { warnings });
    }

    export::write_workbook(&records, output)?;
    Ok(RunOutcome::Exported {
        output: output.to_path_buf(),
        rows: records.len(),
        warnings,
    })
}
