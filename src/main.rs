// pdf2sheet - extract text from every PDF in a folder into one spreadsheet
use anyhow::Result;
use clap::Parser;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

mod form;
mod keyboard;
mod notice;
mod picker;
mod theme;

use form::Field;
use pdf2sheet::types::Notice;
use pdf2sheet::{export, run};

bitflags::bitflags! {
    #[derive(Debug)]
    pub struct AppFlags: u8 {
        const EXIT   = 0b0001;
        const REDRAW = 0b0010;
    }
}

#[derive(Parser)]
#[command(
    name = "pdf2sheet",
    about = "Extract text from every PDF in a folder into one spreadsheet"
)]
struct Args {
    /// Folder with the PDFs (pre-fills the form field)
    folder: Option<PathBuf>,

    /// Where to save the spreadsheet (pre-fills the form field)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// The one stateful component: current field text plus loop flags. One run
/// at a time, driven only by explicit key presses.
pub struct App {
    pub folder_field: String,
    pub output_field: String,
    pub focus: Field,
    pub status_message: String,
    pub flags: AppFlags,
    pub open_picker: bool,
    pub run_requested: bool,
}

impl App {
    pub fn new(folder_field: String, output_field: String) -> Self {
        Self {
            folder_field,
            output_field,
            focus: Field::Folder,
            status_message: String::new(),
            flags: AppFlags::REDRAW,
            open_picker: false,
            run_requested: false,
        }
    }

    pub fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Folder => &mut self.folder_field,
            Field::Output => &mut self.output_field,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut app = App::new(
        args.folder
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        args.output
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
    );

    setup_terminal()?;
    let result = run_app(&mut app);
    restore_terminal()?;
    result
}

fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide, EnableMouseCapture)?;
    Ok(())
}

fn restore_terminal() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    execute!(io::stdout(), Show, LeaveAlternateScreen, DisableMouseCapture)?;
    disable_raw_mode()?;
    Ok(())
}

fn run_app(app: &mut App) -> Result<()> {
    let mut stdout = io::stdout();

    loop {
        if app.open_picker {
            app.open_picker = false;
            let picked = match app.focus {
                Field::Folder => picker::pick_folder()?,
                Field::Output => picker::pick_save_location()?,
            };
            if let Some(path) = picked {
                // Picker result replaces the field text wholly
                *app.focused_field_mut() = path.display().to_string();
            }
            app.flags.insert(AppFlags::REDRAW);
        }

        if app.run_requested {
            app.run_requested = false;
            run_once(&mut stdout, app)?;
            app.flags.insert(AppFlags::REDRAW);
        }

        if app.flags.contains(AppFlags::REDRAW) {
            form::draw(&mut stdout, app)?;
            app.flags.remove(AppFlags::REDRAW);
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if !keyboard::handle_input(app, key)? {
                        break;
                    }
                    if app.flags.contains(AppFlags::EXIT) {
                        break;
                    }
                }
                Event::Resize(_, _) => {
                    app.flags.insert(AppFlags::REDRAW);
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// One blocking run of the scan -> extract -> export chain. Everything the
/// user needs to know comes back as modal notices; the process never dies
/// over a failed run.
fn run_once(stdout: &mut impl Write, app: &mut App) -> Result<()> {
    let (folder, output) = match run::validate(&app.folder_field, &app.output_field) {
        Ok(paths) => paths,
        Err(err) => {
            notice::show(stdout, &Notice::error("Missing input", err.to_string()))?;
            return Ok(());
        }
    };

    // The form blocks for the whole run; at least say so
    app.status_message = format!("Extracting from {} ...", folder.display());
    form::draw(stdout, app)?;

    let (records, warnings) = match run::gather(&folder) {
        Err(err) => {
            app.status_message.clear();
            notice::show(stdout, &Notice::error("Cannot read folder", err.to_string()))?;
            return Ok(());
        }
        Ok(pair) => pair,
    };

    for warning in &warnings {
        notice::show(stdout, &Notice::warning("File skipped", warning.clone()))?;
    }

    if records.is_empty() {
        app.status_message.clear();
        notice::show(
            stdout,
            &Notice::warning("Nothing to export", "No PDF file was found to extract."),
        )?;
        return Ok(());
    }

    match export::write_workbook(&records, &output) {
        Ok(()) => {
            app.status_message = format!("Saved {} row(s)", records.len());
            notice::show(
                stdout,
                &Notice::info(
                    "Success",
                    format!(
                        "Extracted {} file(s). Spreadsheet saved to {}",
                        records.len(),
                        output.display()
                    ),
                ),
            )?;
        }
        Err(err) => {
            app.status_message.clear();
            notice::show(
                stdout,
                &Notice::error(
                    "Could not save",
                    format!("The spreadsheet could not be written: {err}"),
                ),
            )?;
        }
    }

    Ok(())
}
