//! Terminal Klondike runner (default binary).
//!
//! This is the cursor-driven front-end: arrow/WASD keys move a selection over
//! the piles, space picks up and drops cards. It uses crossterm for input and
//! a custom framebuffer-based renderer.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_klondike::config::GameConfig;
use tui_klondike::engine::{Cursor, CursorOutcome, GameSession};
use tui_klondike::input::{handle_key_event, should_quit};
use tui_klondike::journal::{Finish, Frontend, Journal};
use tui_klondike::term::{FrameBuffer, GameView, Highlight, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::load()?;
    let mut journal = Journal::from_config(config.log_path.as_deref())?;

    println!("Seed: {}", config.seed);
    if let Some(path) = &config.log_path {
        println!("[Klondike] Journal: {}", path);
    }

    let mut session = GameSession::new(config.seed);
    journal.start(config.seed, Frontend::Cursor);

    let mut term = TerminalRenderer::enter()?;
    let result = run(&mut term, &mut session, &mut journal);

    // Always try to restore terminal state.
    let _ = term.exit();
    journal.close(&result, session.turns());

    if result? == Finish::Won {
        println!("{}", session.victory_message());
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession, journal: &mut Journal) -> Result<Finish> {
    let view = GameView::default();
    let mut cursor = Cursor::new(session.state());
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let viewport = term.viewport().unwrap_or(Viewport::new(80, 24));
        view.render_into(session, Highlight::from_cursor(&cursor), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        if session.is_won() {
            return Ok(Finish::Won);
        }

        // Block for the next key press.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(Finish::Quit);
                }
                if let Some(action) = handle_key_event(key) {
                    let outcome = cursor.handle(session, action);
                    record(journal, session, outcome);
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

/// Journal every intent that reached the engine.
fn record(journal: &mut Journal, session: &GameSession, outcome: CursorOutcome) {
    let error = match outcome {
        CursorOutcome::Rejected { error, .. } => Some(error.code()),
        _ => None,
    };
    if let Some(action) = outcome.action() {
        journal.action(session.turns(), action, error, session.status());
    }
}
