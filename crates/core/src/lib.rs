//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Klondike table model and placement rules.
//! It has **zero dependencies** on UI, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same deal
//! - **Testable**: Every rule is a pure predicate over cards and piles
//! - **Portable**: Usable from the cursor front-end, the line front-end, or headless
//!
//! # Module Structure
//!
//! - [`pile`]: fixed-capacity card stacks with top/peek/pop accessors
//! - [`rules`]: foundation and tableau placement predicates
//! - [`rng`]: seeded LCG and Fisher-Yates deck shuffle
//! - [`deal`]: initial tableau deal
//! - [`game_state`]: the 13 piles, win detection, invariant checks
//!
//! # Game Rules
//!
//! - **Draw three**: each draw moves up to three cards from deck to poll;
//!   an empty deck recycles the whole poll
//! - **Foundations**: one per suit, built Ace to King
//! - **Tableau**: built down in alternating colors; only Kings fill empty columns
//! - **Runs**: any face-up run can move as a unit
//!
//! # Example
//!
//! ```
//! use tui_klondike_core::{rules, GameState, Pile};
//! use tui_klondike_core::types::Card;
//!
//! let state = GameState::new(12345);
//! assert_eq!(state.deck().len(), 24);
//! assert!(!state.is_won());
//!
//! let top = state.columns()[0].top().unwrap();
//! assert!(!top.hidden);
//!
//! let ace = Card::parse("AH").unwrap();
//! assert!(rules::can_collect(ace, &Pile::new()));
//! assert!(rules::can_place(Card::parse("6D").unwrap(), &[Card::parse("7S").unwrap()].into_iter().collect()));
//! ```

pub mod deal;
pub mod game_state;
pub mod pile;
pub mod rng;
pub mod rules;

pub use tui_klondike_types as types;

// Re-export commonly used types for convenience
pub use deal::{deal, deal_from};
pub use game_state::GameState;
pub use pile::{Pile, PileError};
pub use rng::{shuffled_deck, SimpleRng};
