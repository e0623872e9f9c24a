// Form screen rendering: two path fields, focus highlight, key hints

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::theme::SheetTheme;
use crate::App;

/// Which of the two path fields holds focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Folder,
    Output,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Folder => Field::Output,
            Field::Output => Field::Folder,
        }
    }
}

const FOLDER_ROW: u16 = 3;
const OUTPUT_ROW: u16 = 6;
const STATUS_ROW: u16 = 9;

pub fn draw(stdout: &mut impl Write, app: &App) -> Result<()> {
    let (term_width, term_height) = terminal::size().unwrap_or((80, 24));

    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    // Two-line header bar
    let title = "PDF \u{2192} Spreadsheet Extractor";
    execute!(
        stdout,
        MoveTo(0, 0),
        SetBackgroundColor(SheetTheme::accent_header()),
        SetForegroundColor(SheetTheme::text_header()),
        SetAttribute(Attribute::Bold),
        Print(format!("  {:<width$}", title, width = (term_width.saturating_sub(2)) as usize)),
        SetAttribute(Attribute::Reset),
        MoveTo(0, 1),
        SetBackgroundColor(SheetTheme::accent_header()),
        Print(" ".repeat(term_width as usize)),
        ResetColor
    )?;

    draw_field(
        stdout,
        FOLDER_ROW,
        term_width,
        "PDF folder",
        &app.folder_field,
        app.focus == Field::Folder,
    )?;
    draw_field(
        stdout,
        OUTPUT_ROW,
        term_width,
        "Save spreadsheet as",
        &app.output_field,
        app.focus == Field::Output,
    )?;

    if !app.status_message.is_empty() {
        execute!(
            stdout,
            MoveTo(2, STATUS_ROW),
            SetForegroundColor(SheetTheme::text_secondary()),
            Print(&app.status_message),
            ResetColor
        )?;
    }

    // Key hints in the bottom status bar
    let hints = "  Tab Switch field  \u{2022}  Ctrl+O Browse  \u{2022}  Enter Extract  \u{2022}  Esc Quit";
    execute!(
        stdout,
        MoveTo(0, term_height.saturating_sub(1)),
        SetBackgroundColor(SheetTheme::bg_status()),
        SetForegroundColor(SheetTheme::text_status()),
        Print(format!("{:<width$}", hints, width = term_width as usize)),
        ResetColor
    )?;

    stdout.flush()?;
    Ok(())
}

fn draw_field(
    stdout: &mut impl Write,
    row: u16,
    term_width: u16,
    label: &str,
    value: &str,
    focused: bool,
) -> Result<()> {
    let label_color = if focused {
        SheetTheme::text_primary()
    } else {
        SheetTheme::text_secondary()
    };
    execute!(
        stdout,
        MoveTo(2, row),
        SetForegroundColor(label_color),
        Print(format!("{label}:")),
        ResetColor
    )?;

    // Field box is the full width minus margins; keep the tail of long
    // paths visible because that is the part the user is editing.
    let box_width = (term_width as usize).saturating_sub(4).max(10);
    let visible: String = tail_chars(value, box_width.saturating_sub(2));
    let cursor = if focused { "_" } else { " " };

    execute!(
        stdout,
        MoveTo(2, row + 1),
        SetBackgroundColor(SheetTheme::accent_field()),
        SetForegroundColor(SheetTheme::text_primary()),
        Print(format!(" {visible}")),
        SetForegroundColor(SheetTheme::text_dim()),
        Print(format!(
            "{cursor}{:<pad$}",
            "",
            pad = box_width.saturating_sub(visible.chars().count() + 2)
        )),
        ResetColor
    )?;
    Ok(())
}

fn tail_chars(value: &str, max: usize) -> String {
    let count = value.chars().count();
    if count <= max {
        value.to_string()
    } else {
        value.chars().skip(count - max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_toggles_between_the_two_fields() {
        assert_eq!(Field::Folder.next(), Field::Output);
        assert_eq!(Field::Output.next(), Field::Folder);
    }

    #[test]
    fn long_values_show_their_tail() {
        let long = "/very/long/path/to/some/deep/folder/with/pdfs";
        let shown = tail_chars(long, 10);
        assert_eq!(shown.chars().count(), 10);
        assert!(long.ends_with(&shown));

        assert_eq!(tail_chars("short", 10), "short");
    }
}
