//! Blank collection: one line of free text per prompt, in prompt order.

use crate::domain::AppError;
use crate::ports::Console;

/// Ask for one response per blank, preserving prompt order.
///
/// Empty input is a valid response — blanks may be left blank. If the input
/// stream ends mid-collection, the remaining blanks are filled with empty
/// strings rather than aborting the story.
pub fn collect<C: Console>(console: &mut C, blanks: &[String]) -> Result<Vec<String>, AppError> {
    console.say("Fill in the blanks: ")?;

    let mut responses = Vec::with_capacity(blanks.len());
    for blank in blanks {
        let response = console.ask(&format!("{blank}: "))?.unwrap_or_default();
        responses.push(response);
    }
    Ok(responses)
}
