use std::path::PathBuf;

/// Failures that abort a whole run. Per-file extraction failures are not
/// here on purpose: they are collected as warnings and the run continues.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("The folder {0:?} does not exist.")]
    MissingFolder(PathBuf),

    #[error("Select {0} before running.")]
    EmptyInput(&'static str),

    #[error("Could not read folder {path:?}: {source}")]
    FolderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not save the spreadsheet: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),
}
