use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Console;

/// Console double fed from a fixed script of input lines.
///
/// Once the script runs dry, `ask` reports end of input, mirroring a closed
/// stdin. Output lines and prompts are recorded for assertions.
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn with_lines(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|line| line.to_string()).collect(),
            output: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// Output lines containing `needle`.
    pub fn lines_containing(&self, needle: &str) -> Vec<&str> {
        self.output
            .iter()
            .filter(|line| line.contains(needle))
            .map(String::as_str)
            .collect()
    }

    /// Every prompt displayed, in order.
    pub fn prompts(&self) -> Vec<&str> {
        self.prompts.iter().map(String::as_str).collect()
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.len()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) -> Result<(), AppError> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }
}
