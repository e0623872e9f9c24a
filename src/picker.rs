// Fuzzy browse pickers built on nucleo, drawn inside the existing
// alternate screen. The caller redraws its own screen afterwards.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use nucleo::{Config, Nucleo, Utf32String};

use crate::theme::SheetTheme;
use pdf2sheet::config;

/// Browse for the input folder: fuzzy-pick any directory under the
/// starting directory.
pub fn pick_folder() -> Result<Option<PathBuf>> {
    let start = config::picker_start_dir();
    let dirs = list_directories(&start, config::PICKER_DEPTH)?;

    if dirs.is_empty() {
        return Ok(None);
    }
    Ok(fuzzy_pick(&dirs, "Select the folder with PDFs")?.map(PathBuf::from))
}

/// Browse for the save location: fuzzy-pick a directory, then default the
/// file name and extension the way a save dialog would.
pub fn pick_save_location() -> Result<Option<PathBuf>> {
    let start = config::picker_start_dir();
    let dirs = list_directories(&start, config::PICKER_DEPTH)?;

    if dirs.is_empty() {
        return Ok(None);
    }
    let picked = fuzzy_pick(&dirs, "Save spreadsheet in which folder?")?;
    Ok(picked.map(|dir| PathBuf::from(dir).join(config::DEFAULT_OUTPUT_NAME)))
}

/// Collect `root` and every non-hidden directory up to `depth` levels
/// below it, sorted for stable display.
fn list_directories(root: &Path, depth: usize) -> Result<Vec<String>> {
    let mut found = vec![root.display().to_string()];
    walk_directories(root, depth, &mut found);
    found.sort();
    found.dedup();
    Ok(found)
}

fn walk_directories(dir: &Path, depth: usize, found: &mut Vec<String>) {
    if depth == 0 {
        return;
    }
    // Unreadable directories are simply not offered
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        found.push(path.display().to_string());
        walk_directories(&path, depth - 1, found);
    }
}

/// Interactive fuzzy picker over `items`. Returns None when dismissed.
fn fuzzy_pick(items: &[String], title: &str) -> Result<Option<String>> {
    let mut stdout = io::stdout();

    let mut nucleo = Nucleo::<Arc<str>>::new(Config::DEFAULT, Arc::new(|| {}), None, 1);

    let injector = nucleo.injector();
    for item in items {
        let item_arc: Arc<str> = Arc::from(item.as_str());
        let _ = injector.push(item_arc.clone(), |data, cols: &mut [Utf32String]| {
            cols[0] = data.as_ref().into();
        });
    }

    let mut query = String::new();
    let mut selected_index = 0usize;
    let mut scroll_offset = 0usize;

    loop {
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

        let (term_width, term_height) = terminal::size().unwrap_or((80, 24));

        // Header bar
        execute!(
            stdout,
            MoveTo(0, 0),
            SetBackgroundColor(SheetTheme::accent_header()),
            SetForegroundColor(SheetTheme::text_header()),
            SetAttribute(Attribute::Bold),
            Print(format!("  {:<width$}", title, width = (term_width.saturating_sub(2)) as usize)),
            ResetColor,
            SetAttribute(Attribute::Reset)
        )?;

        // Search box
        execute!(
            stdout,
            MoveTo(0, 2),
            SetForegroundColor(SheetTheme::text_secondary()),
            Print("  Search: "),
            SetForegroundColor(SheetTheme::text_primary()),
            Print(&query),
            SetForegroundColor(SheetTheme::text_dim()),
            Print("_"),
            ResetColor
        )?;

        let snapshot = nucleo.snapshot();
        let all_matches = snapshot.matched_items(..).collect::<Vec<_>>();

        let max_path_width = (term_width as usize).saturating_sub(5);
        let max_display_items = (term_height as usize).saturating_sub(8).min(15).max(1);

        // Keep the selected item visible
        if selected_index >= scroll_offset + max_display_items {
            scroll_offset = selected_index.saturating_sub(max_display_items - 1);
        } else if selected_index < scroll_offset {
            scroll_offset = selected_index;
        }

        let visible_matches = all_matches
            .iter()
            .skip(scroll_offset)
            .take(max_display_items)
            .collect::<Vec<_>>();

        for (display_i, item) in visible_matches.iter().enumerate() {
            let actual_index = scroll_offset + display_i;
            let path = item.data.as_ref();

            let display_str: String = if path.chars().count() > max_path_width {
                let skip = path.chars().count() - max_path_width + 3;
                format!("...{}", path.chars().skip(skip).collect::<String>())
            } else {
                path.to_string()
            };

            let line_pos = 4 + display_i as u16;
            execute!(stdout, MoveTo(0, line_pos), Clear(ClearType::CurrentLine))?;

            if actual_index == selected_index {
                execute!(
                    stdout,
                    SetForegroundColor(SheetTheme::success()),
                    Print("  \u{25b6} "),
                    SetForegroundColor(SheetTheme::text_primary()),
                    Print(&display_str),
                    ResetColor
                )?;
            } else {
                execute!(
                    stdout,
                    Print("    "),
                    SetForegroundColor(SheetTheme::text_secondary()),
                    Print(&display_str),
                    ResetColor
                )?;
            }
        }

        let count_line = (4 + max_display_items + 1) as u16;
        let counter = if all_matches.len() > max_display_items {
            format!(
                "  Showing {}-{} of {} folders",
                scroll_offset + 1,
                (scroll_offset + visible_matches.len()).min(all_matches.len()),
                all_matches.len()
            )
        } else {
            format!("  {} folders", all_matches.len())
        };
        execute!(
            stdout,
            MoveTo(0, count_line),
            SetForegroundColor(SheetTheme::text_dim()),
            Print(&counter),
            MoveTo(0, count_line + 1),
            Print("  \u{2191}/\u{2193} Navigate  \u{2022}  Enter Select  \u{2022}  Esc Back  \u{2022}  Type to search"),
            ResetColor
        )?;

        stdout.flush()?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.modifiers.contains(KeyModifiers::CONTROL) {
                        match key.code {
                            KeyCode::Char('c') | KeyCode::Char('q') => return Ok(None),
                            _ => {}
                        }
                    } else {
                        match key.code {
                            KeyCode::Esc => return Ok(None),
                            KeyCode::Enter => {
                                if let Some(item) = all_matches.get(selected_index) {
                                    return Ok(Some(item.data.as_ref().to_string()));
                                }
                            }
                            KeyCode::Up => {
                                selected_index = selected_index.saturating_sub(1);
                            }
                            KeyCode::Down => {
                                selected_index = (selected_index + 1)
                                    .min(all_matches.len().saturating_sub(1));
                            }
                            KeyCode::PageUp => {
                                selected_index = selected_index.saturating_sub(max_display_items);
                            }
                            KeyCode::PageDown => {
                                selected_index = (selected_index + max_display_items)
                                    .min(all_matches.len().saturating_sub(1));
                            }
                            KeyCode::Home => selected_index = 0,
                            KeyCode::End => {
                                selected_index = all_matches.len().saturating_sub(1);
                            }
                            KeyCode::Backspace => {
                                query.pop();
                                selected_index = 0;
                                scroll_offset = 0;
                                nucleo.pattern.reparse(
                                    0,
                                    &query,
                                    nucleo::pattern::CaseMatching::Smart,
                                    nucleo::pattern::Normalization::Smart,
                                    false,
                                );
                            }
                            KeyCode::Char(c) => {
                                query.push(c);
                                selected_index = 0;
                                scroll_offset = 0;
                                nucleo.pattern.reparse(
                                    0,
                                    &query,
                                    nucleo::pattern::CaseMatching::Smart,
                                    nucleo::pattern::Normalization::Smart,
                                    false,
                                );
                            }
                            _ => {}
                        }
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => {
                        selected_index = selected_index.saturating_sub(3);
                    }
                    MouseEventKind::ScrollDown => {
                        selected_index =
                            (selected_index + 3).min(all_matches.len().saturating_sub(1));
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        nucleo.tick(10);
    }
}
