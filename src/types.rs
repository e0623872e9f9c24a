// Core types for pdf2sheet

use std::path::PathBuf;

/// One row of output data: a single successfully processed PDF file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRecord {
    pub file_name: String,
    pub text: String,
    pub page_count: usize,
}

/// What one run hands back to the interaction shell.
#[derive(Debug)]
pub enum RunOutcome {
    /// The workbook was written with `rows` data rows.
    Exported {
        output: PathBuf,
        rows: usize,
        warnings: Vec<String>,
    },
    /// No PDF produced a record; nothing was written.
    Nothing { warnings: Vec<String> },
}

/// Severity of a modal notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Warning,
    Info,
}

/// A user-facing modal notification, dismissed with any key.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }
}
