//! madlibs: console mad-libs game — pick a story, fill in the blanks, read
//! the result.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


use std::path::Path;

use app::{AppContext, session};
use services::{FilesystemTemplateStore, StdioConsole};

pub use domain::AppError;

/// Relative path the game reads its stories from when none is given.
pub const DEFAULT_DATA_FILE: &str = "data/madlibs.json";

/// Play mad libs over the process's stdin and stdout, loading templates
/// from the JSON file at `data_file`.
pub fn play(data_file: &Path) -> Result<(), AppError> {
    let templates = FilesystemTemplateStore::new(data_file);
    let console = StdioConsole::new();
    let mut ctx = AppContext::new(templates, console);

    session::run(&mut ctx)
}
