//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::CursorAction`] for the keypress
//! front-end and parses typed commands into [`crate::types::GameAction`] for
//! the line front-end.

pub mod line;
pub mod map;

pub use tui_klondike_types as types;

pub use line::{parse_command, CommandLine, LineCommand, ParseError};
pub use map::{handle_key_event, should_quit};
