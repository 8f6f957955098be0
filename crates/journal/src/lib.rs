//! Journal module - line-delimited JSON record of a game
//!
//! When a log path is configured, every game writes one JSON object per line
//! to that file (append mode). All records have: type, seq (sequence number),
//! ts (timestamp in ms).
//!
//! # Record Types
//!
//! - **start**: seed and front-end name
//! - **action**: one per move intent sent to the engine, with the turn number
//!   after the move, the outcome (`ok` or an error code) and the status line
//! - **finish**: `won`, `quit` or `error` (the game loop failed), with the
//!   final turn count
//!
//! # Environment Variables
//!
//! - `KLONDIKE_LOG_PATH`: journal file (unset or empty disables the journal)
//!
//! Opening the file is the only fallible step. After that, writes are
//! best-effort: the first I/O error disables the journal and play continues.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use tui_klondike_types::{Card, GameAction};

pub use tui_klondike_types as types;

/// Which front-end produced the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Frontend {
    Cursor,
    Line,
}

/// How the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Finish {
    Won,
    Quit,
    Error,
}

/// Operands of a move, 0-based as the engine sees them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foundation: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
}

impl From<GameAction> for ActionArgs {
    fn from(action: GameAction) -> Self {
        match action {
            GameAction::Draw | GameAction::CollectPoll => Self::default(),
            GameAction::CollectColumn { column } | GameAction::PollToColumn { column } => Self {
                column: Some(column),
                ..Self::default()
            },
            GameAction::FoundationToColumn { foundation, column } => Self {
                column: Some(column),
                foundation: Some(foundation),
                ..Self::default()
            },
            GameAction::ColumnToColumn { from, start, to } => Self {
                column: Some(to),
                from: Some(from),
                start: Some(start),
                ..Self::default()
            },
            GameAction::SequenceToColumn { rank, suit, column } => Self {
                column: Some(column),
                card: Some(Card::new(rank, suit).to_string()),
                ..Self::default()
            },
        }
    }
}

/// One journal line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    Start {
        seq: u64,
        ts: u64,
        seed: u32,
        frontend: Frontend,
    },
    Action {
        seq: u64,
        ts: u64,
        turn: u32,
        action: &'static str,
        args: ActionArgs,
        ok: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<&'static str>,
        status: String,
    },
    Finish {
        seq: u64,
        ts: u64,
        result: Finish,
        turns: u32,
    },
}

/// Append-only JSONL journal. A disabled journal accepts and drops records.
#[derive(Debug)]
pub struct Journal {
    writer: Option<BufWriter<File>>,
    seq: u64,
    buf: Vec<u8>,
}

impl Journal {
    pub fn disabled() -> Self {
        Self {
            writer: None,
            seq: 0,
            buf: Vec::new(),
        }
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open journal {}", path.display()))?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
            seq: 0,
            buf: Vec::with_capacity(512),
        })
    }

    /// Open the configured path, or a disabled journal when there is none.
    pub fn from_config(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::open(path),
            None => Ok(Self::disabled()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    pub fn start(&mut self, seed: u32, frontend: Frontend) {
        let seq = self.next_seq();
        self.write(&Record::Start {
            seq,
            ts: current_timestamp_ms(),
            seed,
            frontend,
        });
    }

    /// Record one intent; `error` is the error code when it was rejected.
    pub fn action(&mut self, turn: u32, action: GameAction, error: Option<&'static str>, status: &str) {
        let seq = self.next_seq();
        self.write(&Record::Action {
            seq,
            ts: current_timestamp_ms(),
            turn,
            action: action.as_str(),
            args: ActionArgs::from(action),
            ok: error.is_none(),
            error,
            status: status.to_string(),
        });
    }

    pub fn finish(&mut self, result: Finish, turns: u32) {
        let seq = self.next_seq();
        self.write(&Record::Finish {
            seq,
            ts: current_timestamp_ms(),
            result,
            turns,
        });
    }

    /// Finish with the loop's result, `error` when it failed.
    pub fn close<E>(&mut self, result: &Result<Finish, E>, turns: u32) {
        self.finish(*result.as_ref().unwrap_or(&Finish::Error), turns);
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn write(&mut self, record: &Record) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if writer.write_all(&self.buf).is_err() || writer.flush().is_err() {
            self.writer = None;
        }
    }
}

/// Get current timestamp in milliseconds
fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
