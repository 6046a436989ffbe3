use crate::domain::AppError;

/// Port for the line-based console the game is played over.
pub trait Console {
    /// Print one line of output.
    fn say(&mut self, line: &str) -> Result<(), AppError>;

    /// Display `prompt` and block for one line of input.
    ///
    /// Returns `Ok(None)` when the input stream has ended; callers decide
    /// whether that means an empty response or the end of the session.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError>;
}
