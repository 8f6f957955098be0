//! TUI Klondike (workspace facade crate).
//!
//! This package exposes `tui_klondike::{core,engine,input,journal,term,types}`
//! while the implementation lives in dedicated crates under `crates/`. The
//! `config` module is shared by both binaries; `line_game` is the loop behind
//! `klondike-line`.

pub mod config;
pub mod line_game;

pub use tui_klondike_core as core;
pub use tui_klondike_engine as engine;
pub use tui_klondike_input as input;
pub use tui_klondike_journal as journal;
pub use tui_klondike_term as term;
pub use tui_klondike_types as types;
