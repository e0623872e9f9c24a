// Folder scanner: list a directory, keep the .pdf entries

use std::path::{Path, PathBuf};

use crate::config;
use crate::error::RunError;

/// List the entries of `folder` whose name ends with `.pdf` (case-sensitive
/// suffix match, no content detection). Order is whatever the platform's
/// directory listing yields; it is not sorted.
pub fn pdf_entries(folder: &Path) -> Result<Vec<PathBuf>, RunError> {
    if !folder.exists() {
        return Err(RunError::MissingFolder(folder.to_path_buf()));
    }

    let entries = std::fs::read_dir(folder).map_err(|source| RunError::FolderRead {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| RunError::FolderRead {
            path: folder.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        if name.to_string_lossy().ends_with(config::PDF_EXTENSION) {
            candidates.push(entry.path());
        }
    }

    Ok(candidates)
}
