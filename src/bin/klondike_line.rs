//! Line-command Klondike runner.
//!
//! Prints the board as plain text and reads one command per line from stdin.
//! A blank line repeats the previous command. End of input quits.

use std::io;

use anyhow::Result;

use tui_klondike::config::GameConfig;
use tui_klondike::engine::GameSession;
use tui_klondike::journal::{Frontend, Journal};
use tui_klondike::line_game;

fn main() -> Result<()> {
    let config = GameConfig::load()?;
    let mut journal = Journal::from_config(config.log_path.as_deref())?;

    println!("Seed: {}", config.seed);
    if let Some(path) = &config.log_path {
        println!("[Klondike] Journal: {}", path);
    }

    let mut session = GameSession::new(config.seed);
    journal.start(config.seed, Frontend::Line);

    let result = line_game::run(&mut io::stdin().lock(), &mut io::stdout(), &mut session, &mut journal);
    journal.close(&result, session.turns());
    result.map(|_| ())
}
