// Configuration constants for pdf2sheet
use std::env;
use std::path::PathBuf;

// Candidate filter: exact suffix match, no content sniffing
pub const PDF_EXTENSION: &str = ".pdf";

// Spreadsheet output
pub const SHEET_EXTENSION: &str = ".xlsx";
pub const DEFAULT_OUTPUT_NAME: &str = "extracted_text.xlsx";

// xlsx hard limit on characters per cell
pub const MAX_CELL_CHARS: usize = 32_767;

// How deep the browse picker walks below its starting directory
pub const PICKER_DEPTH: usize = 3;

// Starting directory for the browse pickers, nothing else
pub fn picker_start_dir() -> PathBuf {
    env::var("PDF2SHEET_BROWSE_DIR")
        .map(PathBuf::from)
        .ok()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
