// Tabular exporter: records -> one-worksheet xlsx

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::config;
use crate::types::ExtractionRecord;

const HEADERS: [&str; 3] = ["File Name", "Extracted Text", "Page Count"];

/// Write one worksheet: a header row, then one row per record in input
/// order. An existing file at `path` is overwritten. Callers skip this
/// entirely when there are no records.
pub fn write_workbook(records: &[ExtractionRecord], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let bold = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, &record.file_name)?;
        worksheet.write_string(row, 1, clamp_cell(&record.text))?;
        worksheet.write_number(row, 2, record.page_count as f64)?;
    }

    worksheet.set_column_width(0, 32)?;
    worksheet.set_column_width(1, 80)?;

    workbook.save(path)?;
    Ok(())
}

// xlsx refuses cells over 32,767 characters; a long PDF must not sink the
// whole export, so clip on a char boundary.
fn clamp_cell(text: &str) -> &str {
    match text.char_indices().nth(config::MAX_CELL_CHARS) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}
