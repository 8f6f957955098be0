//! Line-command parsing for the plain-text front-end.
//!
//! Commands are whitespace-tokenized and keyword matching is
//! case-insensitive. Column and foundation numbers are 1-based here and
//! converted to the 0-based indices the engine expects.
//!
//! | Command | Intent |
//! |---------|--------|
//! | `quit` | leave the game |
//! | `buy` | [`GameAction::Draw`] |
//! | `collect poll` | [`GameAction::CollectPoll`] |
//! | `collect col N` | [`GameAction::CollectColumn`] |
//! | `move poll to col N` | [`GameAction::PollToColumn`] |
//! | `move fnd N to col M` | [`GameAction::FoundationToColumn`] |
//! | `move seq <rank><suit> to col N` | [`GameAction::SequenceToColumn`] |

use std::fmt;

use crate::types::{Card, GameAction, NUM_COLUMNS, NUM_FOUNDATIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    Action(GameAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand,
    InvalidColumn,
    InvalidFoundation,
    InvalidCard,
}

impl ParseError {
    pub fn code(self) -> &'static str {
        match self {
            ParseError::UnknownCommand => "unknown_command",
            ParseError::InvalidColumn => "invalid_column",
            ParseError::InvalidFoundation => "invalid_foundation",
            ParseError::InvalidCard => "invalid_card",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ParseError::UnknownCommand => "Unknown command!",
            ParseError::InvalidColumn => "Invalid column number!",
            ParseError::InvalidFoundation => "Invalid foundation number!",
            ParseError::InvalidCard => "Invalid card!",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ParseError {}

/// Parse one command line.
pub fn parse_command(line: &str) -> Result<LineCommand, ParseError> {
    let tokens: Vec<String> = line
        .split_whitespace()
        .map(|t| t.to_ascii_lowercase())
        .collect();
    let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();

    let action = match tokens.as_slice() {
        ["quit"] => return Ok(LineCommand::Quit),
        ["buy"] => GameAction::Draw,
        ["collect", "poll"] => GameAction::CollectPoll,
        ["collect", "col", n] => GameAction::CollectColumn {
            column: column_number(n)?,
        },
        ["move", "poll", "to", "col", n] => GameAction::PollToColumn {
            column: column_number(n)?,
        },
        ["move", "fnd", f, "to", "col", n] => GameAction::FoundationToColumn {
            foundation: number(f, NUM_FOUNDATIONS).ok_or(ParseError::InvalidFoundation)?,
            column: column_number(n)?,
        },
        ["move", "seq", label, "to", "col", n] => {
            let card = Card::parse(label).ok_or(ParseError::InvalidCard)?;
            GameAction::SequenceToColumn {
                rank: card.rank(),
                suit: card.suit(),
                column: column_number(n)?,
            }
        }
        _ => return Err(ParseError::UnknownCommand),
    };
    Ok(LineCommand::Action(action))
}

fn column_number(token: &str) -> Result<u8, ParseError> {
    number(token, NUM_COLUMNS).ok_or(ParseError::InvalidColumn)
}

/// 1-based `token` in `1..=count`, as a 0-based index.
fn number(token: &str, count: usize) -> Option<u8> {
    let n: usize = token.parse().ok()?;
    let index = n.checked_sub(1).filter(|&i| i < count)?;
    u8::try_from(index).ok()
}

/// Remembers the last non-blank line so a blank line repeats it.
#[derive(Debug, Clone, Default)]
pub struct CommandLine {
    previous: Option<String>,
}

impl CommandLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The command to run for `line`: the line itself, or the previous
    /// command when it is blank. `None` if nothing has been entered yet.
    pub fn resolve(&mut self, line: &str) -> Option<&str> {
        let line = line.trim();
        if !line.is_empty() {
            self.previous = Some(line.to_string());
        }
        self.previous.as_deref()
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }
}
