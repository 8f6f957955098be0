//! Line-command game loop.
//!
//! Prints the ascii board, then a `[Turn #N] status> ` prompt, and reads one
//! command per line. A blank line repeats the previous command; end of input
//! quits. Input bytes that are not UTF-8 are decoded lossily, so they end up as
//! an unknown command instead of stopping the game.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::engine::GameSession;
use crate::input::{parse_command, CommandLine, LineCommand};
use crate::journal::{Finish, Journal};
use crate::term::{GameView, Highlight, Theme};

/// Play `session` from `input` until it is won, quit or the input ends.
///
/// Only I/O failures on `input` or `out` are errors.
pub fn run(
    input: &mut impl BufRead,
    out: &mut impl Write,
    session: &mut GameSession,
    journal: &mut Journal,
) -> Result<Finish> {
    let view = GameView::new(Theme::Ascii);
    let mut history = CommandLine::new();
    let mut bytes = Vec::new();

    loop {
        let board = view.render_board(session.state(), Highlight::none());
        writeln!(out, "{}", board.to_text())?;

        if session.is_won() {
            writeln!(out, "{}", session.victory_message())?;
            return Ok(Finish::Won);
        }

        write!(out, "{}> ", session.status_line())?;
        out.flush()?;

        bytes.clear();
        if input.read_until(b'\n', &mut bytes)? == 0 {
            writeln!(out)?;
            return Ok(Finish::Quit);
        }
        let line = String::from_utf8_lossy(&bytes);

        session.clear_status();
        let Some(command) = history.resolve(&line) else {
            continue;
        };
        match parse_command(command) {
            Ok(LineCommand::Quit) => return Ok(Finish::Quit),
            Ok(LineCommand::Action(action)) => {
                let error = session.apply(action).err().map(|e| e.code());
                journal.action(session.turns(), action, error, session.status());
            }
            Err(err) => session.set_status(err.message()),
        }
    }
}
