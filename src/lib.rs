// pdf2sheet - batch PDF text extraction to a spreadsheet

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod run;
pub mod scan;
pub mod types;
