//! Session loop: load once, then play until the user declines a replay.

use crate::app::AppContext;
use crate::app::menu::{self, print_separator};
use crate::app::responses;
use crate::domain::{AppError, assemble};
use crate::ports::{Console, TemplateStore};

/// Literal the play-again prompt accepts as "yes"; anything else declines.
const PLAY_AGAIN_YES: &str = "1";

/// Run one game session: select, collect, assemble, present, and loop while
/// the user keeps answering `1` to the play-again prompt.
///
/// Replay is an explicit loop over the collection loaded up front, so
/// repeated games neither grow the call stack nor re-read the data file.
/// A load failure propagates untouched; the caller decides how to report it.
pub fn run<S, C>(ctx: &mut AppContext<S, C>) -> Result<(), AppError>
where
    S: TemplateStore,
    C: Console,
{
    let collection = ctx.templates().load()?;

    loop {
        let index = menu::select(ctx.console(), &collection)?;
        let template =
            collection.get(index).expect("menu::select only returns in-range indices");

        print_separator(ctx.console())?;
        let collected = responses::collect(ctx.console(), &template.blanks)?;

        let story = assemble(&template.fixed_segments, &collected);
        print_separator(ctx.console())?;
        ctx.console().say(&story)?;

        if !wants_replay(ctx.console())? {
            return Ok(());
        }
    }
}

fn wants_replay<C: Console>(console: &mut C) -> Result<bool, AppError> {
    print_separator(console)?;
    let answer = console.ask("Enter 1 if you would like to play again: ")?;
    Ok(matches!(answer, Some(line) if line.trim() == PLAY_AGAIN_YES))
}
