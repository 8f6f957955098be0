//! Move engine, session bookkeeping and cursor model.
//!
//! - [`moves`]: the seven move kinds, each validated in full before it mutates
//!   anything
//! - [`session`]: turn counter and status line around a [`core::GameState`]
//! - [`cursor`]: selection/drag model used by the keypress front-end
//!
//! ```
//! use tui_klondike_engine::{GameSession, MoveError};
//! use tui_klondike_engine::types::GameAction;
//!
//! let mut session = GameSession::new(2024);
//! session.apply(GameAction::Draw).unwrap();
//! assert_eq!(session.turns(), 1);
//!
//! let err = session.apply(GameAction::CollectColumn { column: 9 }).unwrap_err();
//! assert_eq!(err, MoveError::InvalidColumn);
//! assert_eq!(session.status_line(), "[Turn #1] Invalid column number!");
//! ```

pub mod cursor;
pub mod moves;
pub mod session;

pub use tui_klondike_core as core;
pub use tui_klondike_types as types;

pub use cursor::{Cursor, CursorOutcome, Position};
pub use moves::{ErrorKind, MoveError, MoveOutcome};
pub use session::GameSession;
