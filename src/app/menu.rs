//! Selection menu: list titles, accept a zero-based numeric choice.

use crate::domain::{AppError, TemplateCollection};
use crate::ports::Console;

pub(crate) const SEPARATOR: &str =
    "=======================================================================";

pub(crate) fn print_separator<C: Console>(console: &mut C) -> Result<(), AppError> {
    console.say(SEPARATOR)
}

fn print_title_and_options<C: Console>(
    console: &mut C,
    collection: &TemplateCollection,
) -> Result<(), AppError> {
    console.say(&format!(
        "\n{SEPARATOR}\n                              MAD  LIBS                                \n{SEPARATOR}\n"
    ))?;
    for (index, title) in collection.titles().enumerate() {
        console.say(&format!("[{index}] : {title}"))?;
    }
    console.say(&format!("\n{SEPARATOR}\n"))
}

/// Present the collection and loop until the user picks a valid index.
///
/// Anything that does not parse as a number in `0..len` — out-of-range
/// values, negative values, non-numeric text — gets a message naming the
/// valid range and another prompt. The loop is unbounded; only the input
/// stream ending breaks it, with `AppError::InputClosed`.
pub fn select<C: Console>(
    console: &mut C,
    collection: &TemplateCollection,
) -> Result<usize, AppError> {
    print_title_and_options(console, collection)?;

    loop {
        print_separator(console)?;
        let line = console
            .ask("Please enter the number for a Mad Lib from the options above:  ")?
            .ok_or(AppError::InputClosed)?;

        match line.trim().parse::<usize>() {
            Ok(index) if index < collection.len() => return Ok(index),
            _ => {
                console.say(&format!(
                    "ERROR: You must enter a value between [0] and {}. Please try again.",
                    collection.len() - 1
                ))?;
            }
        }
    }
}
