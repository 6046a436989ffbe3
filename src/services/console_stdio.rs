use std::io::{self, BufRead, Write};

use crate::domain::AppError;
use crate::ports::Console;

/// Console adapter over the process's stdin and stdout.
///
/// Each `ask` flushes the prompt before blocking on a line read, so prompts
/// are visible even when stdout is not line-buffered.
#[derive(Default)]
pub struct StdioConsole;

impl StdioConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdioConsole {
    fn say(&mut self, line: &str) -> Result<(), AppError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;
        drop(stdout);

        let mut line = String::new();
        let bytes_read = io::stdin().lock().read_line(&mut line)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
