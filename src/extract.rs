// PDF text extraction - pure Rust via lopdf

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lopdf::Document;

use crate::types::ExtractionRecord;

/// Parse one PDF and pull the embedded text of every page in document
/// order. Page texts are joined with a blank line and the whole thing is
/// trimmed at the end. The document handle is dropped on every exit path.
pub fn extract_file(path: &Path) -> Result<ExtractionRecord> {
    let document = Document::load(path).context("could not parse as PDF")?;
    let pages = document.get_pages();

    let mut text = String::new();
    for &number in pages.keys() {
        let page_text = document
            .extract_text(&[number])
            .with_context(|| format!("could not read text of page {number}"))?;
        text.push_str(&page_text);
        text.push_str("\n\n");
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ExtractionRecord {
        file_name,
        text: text.trim().to_string(),
        page_count: pages.len(),
    })
}

/// Run the extractor over every candidate. A file that fails to parse is
/// skipped with a warning; the rest of the batch still goes through.
pub fn extract_folder(candidates: &[PathBuf]) -> (Vec<ExtractionRecord>, Vec<String>) {
    let mut records = Vec::new();
    let mut warnings = Vec::new();

    for path in candidates {
        match extract_file(path) {
            Ok(record) => records.push(record),
            Err(err) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                warnings.push(format!("Could not process {name}: {err:#}"));
            }
        }
    }

    (records, warnings)
}
