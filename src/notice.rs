// Modal notification overlays, dismissed with any key

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    event::{self, Event},
    execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::theme::SheetTheme;
use pdf2sheet::types::{Notice, NoticeKind};

/// Draw `notice` as a centered box over whatever is on screen and block
/// until the user presses a key. The caller redraws afterwards.
pub fn show(stdout: &mut impl Write, notice: &Notice) -> Result<()> {
    let (term_width, term_height) = terminal::size().unwrap_or((80, 24));

    let box_width = (term_width as usize).saturating_sub(8).min(72).max(24);
    let inner = box_width - 4;
    let lines = wrap(&notice.body, inner);

    let box_height = (lines.len() + 4) as u16;
    let left = (term_width.saturating_sub(box_width as u16)) / 2;
    let top = (term_height.saturating_sub(box_height)) / 2;

    let accent = accent_for(notice.kind);

    // Title bar
    execute!(
        stdout,
        MoveTo(left, top),
        SetBackgroundColor(accent),
        SetForegroundColor(SheetTheme::text_header()),
        SetAttribute(Attribute::Bold),
        Print(format!(" {:<width$}", notice.title, width = box_width - 1)),
        SetAttribute(Attribute::Reset),
        ResetColor
    )?;

    // Body
    for (i, line) in lines.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(left, top + 1 + i as u16),
            SetBackgroundColor(SheetTheme::bg_status()),
            SetForegroundColor(SheetTheme::text_primary()),
            Print(format!("  {:<width$}  ", line, width = inner)),
            ResetColor
        )?;
    }

    // Footer
    execute!(
        stdout,
        MoveTo(left, top + 1 + lines.len() as u16),
        SetBackgroundColor(SheetTheme::bg_status()),
        Print(" ".repeat(box_width)),
        MoveTo(left, top + 2 + lines.len() as u16),
        SetBackgroundColor(SheetTheme::bg_status()),
        SetForegroundColor(SheetTheme::text_dim()),
        Print(format!("{:^width$}", "press any key", width = box_width)),
        ResetColor
    )?;

    stdout.flush()?;

    // Swallow everything until a key press
    loop {
        if let Event::Key(_) = event::read()? {
            break;
        }
    }
    Ok(())
}

fn accent_for(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Error => SheetTheme::error(),
        NoticeKind::Warning => SheetTheme::warning(),
        NoticeKind::Info => SheetTheme::success(),
    }
}

/// Greedy word wrap; explicit newlines in the body are kept.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
                lines.push(std::mem::take(&mut current));
            }
            if current.is_empty() {
                // A single over-long word gets hard-split
                let mut word = word;
                while word.chars().count() > width {
                    let cut = word
                        .char_indices()
                        .nth(width)
                        .map(|(i, _)| i)
                        .unwrap_or(word.len());
                    lines.push(word[..cut].to_string());
                    word = &word[cut..];
                }
                current.push_str(word);
            } else {
                current.push(' ');
                current.push_str(word);
            }
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
