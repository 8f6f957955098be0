//! Game session - table state plus turn counter and status line.
//!
//! Both front-ends drive the same session: they translate input into
//! [`GameAction`]s, call [`GameSession::apply`], and show [`GameSession::status`].

use crate::core::GameState;
use crate::moves::{self, MoveError, MoveOutcome};
use crate::types::GameAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    state: GameState,
    seed: u32,
    turns: u32,
    status: String,
}

impl GameSession {
    /// Deal a new game from `seed`.
    pub fn new(seed: u32) -> Self {
        Self::from_state(GameState::new(seed), seed)
    }

    /// Start a session on an arbitrary table.
    pub fn from_state(state: GameState, seed: u32) -> Self {
        Self {
            state,
            seed,
            turns: 0,
            status: String::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn clear_status(&mut self) {
        self.status.clear();
    }

    /// Apply a move.
    ///
    /// Success clears the status and, unless the poll was only recycled,
    /// advances the turn counter. Failure leaves the table and turn count
    /// untouched and puts the error message on the status line.
    pub fn apply(&mut self, action: GameAction) -> Result<MoveOutcome, MoveError> {
        match moves::apply(&mut self.state, action) {
            Ok(outcome) => {
                if outcome.counts_as_turn() {
                    self.turns = self.turns.saturating_add(1);
                }
                self.status.clear();
                Ok(outcome)
            }
            Err(err) => {
                self.reject(err);
                Err(err)
            }
        }
    }

    /// Report an error without touching the table.
    pub fn reject(&mut self, err: MoveError) {
        self.status = err.message().to_string();
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    /// `"[Turn #N] status"`, as shown under the board and in the line prompt.
    pub fn status_line(&self) -> String {
        format!("[Turn #{}] {}", self.turns, self.status)
    }

    pub fn victory_message(&self) -> String {
        format!("Congratulations! You solved it in {} turns.", self.turns)
    }
}
