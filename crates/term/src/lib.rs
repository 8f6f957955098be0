//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is either flushed to a terminal backend (cursor
//! front-end) or printed as text (line front-end).
//!
//! Goals:
//! - Keep `core` and `engine` free of any I/O
//! - Draw the table from state alone; cursor highlight is passed in
//! - Redraw only the runs of cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_klondike_core as core;
pub use tui_klondike_engine as engine;
pub use tui_klondike_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, Run, Span};
pub use game_view::{GameView, Highlight, Theme, Viewport, BOARD_HEIGHT, BOARD_WIDTH, STATUS_Y};
pub use renderer::TerminalRenderer;
