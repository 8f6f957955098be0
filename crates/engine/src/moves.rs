//! Move engine.
//!
//! One function per move kind. Each validates every precondition against the
//! current state first, then applies the mutation to a copy and swaps it in,
//! so a rejected move never leaves the table partially changed.

use std::fmt;

use crate::core::{rules, GameState, PileError};
use crate::types::{
    Card, GameAction, PileId, Rank, Suit, BUYOUT_SIZE, NUM_COLUMNS, NUM_FOUNDATIONS,
};

/// Broad class of a rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidTarget,
    EmptySource,
    RuleViolation,
    CardNotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidColumn,
    InvalidFoundation,
    NothingToDraw,
    EmptyPoll,
    EmptyColumn,
    EmptyFoundation,
    RanksNotMatching,
    RanksOrSuitsNotMatching,
    NotARun,
    SameColumn,
    NotColumnEnd,
    WrongFoundation,
    NotTopCard,
    InvalidDrop,
    CardNotFound,
    Pile(PileError),
}

impl MoveError {
    pub fn kind(self) -> ErrorKind {
        match self {
            MoveError::InvalidColumn
            | MoveError::InvalidFoundation
            | MoveError::NotColumnEnd
            | MoveError::InvalidDrop => ErrorKind::InvalidTarget,
            MoveError::NothingToDraw
            | MoveError::EmptyPoll
            | MoveError::EmptyColumn
            | MoveError::EmptyFoundation => ErrorKind::EmptySource,
            MoveError::RanksNotMatching
            | MoveError::RanksOrSuitsNotMatching
            | MoveError::NotARun
            | MoveError::SameColumn
            | MoveError::WrongFoundation
            | MoveError::NotTopCard => ErrorKind::RuleViolation,
            MoveError::CardNotFound => ErrorKind::CardNotFound,
            MoveError::Pile(PileError::EmptyPile) => ErrorKind::EmptySource,
            MoveError::Pile(_) => ErrorKind::InvalidTarget,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            MoveError::InvalidColumn => "invalid_column",
            MoveError::InvalidFoundation => "invalid_foundation",
            MoveError::NothingToDraw => "nothing_to_draw",
            MoveError::EmptyPoll => "empty_poll",
            MoveError::EmptyColumn => "empty_column",
            MoveError::EmptyFoundation => "empty_foundation",
            MoveError::RanksNotMatching => "ranks_not_matching",
            MoveError::RanksOrSuitsNotMatching => "ranks_or_suits_not_matching",
            MoveError::NotARun => "not_a_run",
            MoveError::SameColumn => "same_column",
            MoveError::NotColumnEnd => "not_column_end",
            MoveError::WrongFoundation => "wrong_foundation",
            MoveError::NotTopCard => "not_top_card",
            MoveError::InvalidDrop => "invalid_drop",
            MoveError::CardNotFound => "card_not_found",
            MoveError::Pile(e) => e.code(),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MoveError::InvalidColumn => "Invalid column number!",
            MoveError::InvalidFoundation => "Invalid foundation number!",
            MoveError::NothingToDraw => "Nothing left to draw!",
            MoveError::EmptyPoll => "Poll is empty!",
            MoveError::EmptyColumn => "That column is empty!",
            MoveError::EmptyFoundation => "That foundation is empty!",
            MoveError::RanksNotMatching => "Ranks not matching!",
            MoveError::RanksOrSuitsNotMatching => "Ranks or Suites not matching!",
            MoveError::NotARun => "Those cards are not a movable run!",
            MoveError::SameColumn => "Cards are already in that column!",
            MoveError::NotColumnEnd => "You can only move cards to the end of column piles!",
            MoveError::WrongFoundation => "That card belongs on another foundation!",
            MoveError::NotTopCard => "Only the top card can be collected!",
            MoveError::InvalidDrop => "Cards cannot be dropped there!",
            MoveError::CardNotFound => "Card not found!",
            MoveError::Pile(e) => e.message(),
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for MoveError {}

impl From<PileError> for MoveError {
    fn from(value: PileError) -> Self {
        MoveError::Pile(value)
    }
}

/// What a successful move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Cards moved from deck to poll
    Drew { count: usize },
    /// Poll turned back over onto the empty deck
    Recycled { count: usize },
    /// One card sent to its foundation
    Collected { card: Card, foundation: usize },
    /// One or more cards placed on a column
    Placed { count: usize, column: usize },
}

impl MoveOutcome {
    /// Recycling the poll is free; every other move costs a turn.
    pub fn counts_as_turn(&self) -> bool {
        !matches!(self, MoveOutcome::Recycled { .. })
    }

    /// Pile that received the cards.
    pub fn destination(&self) -> PileId {
        match *self {
            MoveOutcome::Drew { .. } => PileId::Poll,
            MoveOutcome::Recycled { .. } => PileId::Deck,
            MoveOutcome::Collected { foundation, .. } => PileId::Foundation(foundation as u8),
            MoveOutcome::Placed { column, .. } => PileId::Column(column as u8),
        }
    }
}

/// Apply any intent.
pub fn apply(state: &mut GameState, action: GameAction) -> Result<MoveOutcome, MoveError> {
    match action {
        GameAction::Draw => draw(state),
        GameAction::CollectPoll => collect_poll(state),
        GameAction::CollectColumn { column } => collect_column(state, column),
        GameAction::PollToColumn { column } => poll_to_column(state, column),
        GameAction::FoundationToColumn { foundation, column } => {
            foundation_to_column(state, foundation, column)
        }
        GameAction::ColumnToColumn { from, start, to } => column_to_column(state, from, start, to),
        GameAction::SequenceToColumn { rank, suit, column } => {
            sequence_to_column(state, rank, suit, column)
        }
    }
}

/// Draw up to three cards onto the poll, or recycle the poll when the deck
/// is empty.
pub fn draw(state: &mut GameState) -> Result<MoveOutcome, MoveError> {
    if state.deck().is_empty() {
        if state.poll().is_empty() {
            return Err(MoveError::NothingToDraw);
        }
        return commit(state, |next| {
            let mut count = 0;
            while let Ok(card) = next.poll_mut().pop() {
                next.deck_mut().push(card.face_down())?;
                count += 1;
            }
            Ok(MoveOutcome::Recycled { count })
        });
    }

    let count = state.deck().len().min(BUYOUT_SIZE);
    commit(state, |next| {
        for _ in 0..count {
            let card = next.deck_mut().pop()?;
            next.poll_mut().push(card.face_up())?;
        }
        Ok(MoveOutcome::Drew { count })
    })
}

pub fn collect_poll(state: &mut GameState) -> Result<MoveOutcome, MoveError> {
    let card = state.poll().top().map_err(|_| MoveError::EmptyPoll)?;
    let foundation = foundation_for(state, card)?;

    commit(state, |next| {
        let card = next.poll_mut().pop()?;
        push_foundation(next, foundation, card)?;
        Ok(MoveOutcome::Collected { card, foundation })
    })
}

pub fn collect_column(state: &mut GameState, column: u8) -> Result<MoveOutcome, MoveError> {
    let col = column_index(column)?;
    let card = column_top(state, col)?;
    let foundation = foundation_for(state, card)?;

    commit(state, |next| {
        let source = next.column_mut(col).ok_or(PileError::OutOfRange)?;
        let card = source.pop()?;
        source.reveal_top();
        push_foundation(next, foundation, card)?;
        Ok(MoveOutcome::Collected { card, foundation })
    })
}

pub fn poll_to_column(state: &mut GameState, column: u8) -> Result<MoveOutcome, MoveError> {
    let col = column_index(column)?;
    let card = state.poll().top().map_err(|_| MoveError::EmptyPoll)?;
    check_placement(state, card, col)?;

    commit(state, |next| {
        let card = next.poll_mut().pop()?;
        push_column(next, col, card)?;
        Ok(MoveOutcome::Placed {
            count: 1,
            column: col,
        })
    })
}

pub fn foundation_to_column(
    state: &mut GameState,
    foundation: u8,
    column: u8,
) -> Result<MoveOutcome, MoveError> {
    let col = column_index(column)?;
    let fnd = foundation as usize;
    if fnd >= NUM_FOUNDATIONS {
        return Err(MoveError::InvalidFoundation);
    }
    let card = state
        .foundation(fnd)
        .ok_or(MoveError::InvalidFoundation)?
        .top()
        .map_err(|_| MoveError::EmptyFoundation)?;
    check_placement(state, card, col)?;

    commit(state, |next| {
        let card = next.foundation_mut(fnd).ok_or(PileError::OutOfRange)?.pop()?;
        push_column(next, col, card)?;
        Ok(MoveOutcome::Placed {
            count: 1,
            column: col,
        })
    })
}

/// Move the run that starts at `start` in column `from` onto column `to`.
pub fn column_to_column(
    state: &mut GameState,
    from: u8,
    start: usize,
    to: u8,
) -> Result<MoveOutcome, MoveError> {
    let src = column_index(from)?;
    let dst = column_index(to)?;
    if src == dst {
        return Err(MoveError::SameColumn);
    }

    let source = state.column(src).ok_or(MoveError::InvalidColumn)?;
    if source.is_empty() {
        return Err(MoveError::EmptyColumn);
    }
    let run = source
        .cards()
        .get(start..)
        .filter(|run| !run.is_empty())
        .ok_or(MoveError::Pile(PileError::OutOfRange))?;
    if !rules::is_movable_run(run) {
        return Err(MoveError::NotARun);
    }
    check_placement(state, run[0], dst)?;

    commit(state, |next| {
        let source = next.column_mut(src).ok_or(PileError::OutOfRange)?;
        let moved = source.split_off(start)?;
        source.reveal_top();
        next.column_mut(dst)
            .ok_or(PileError::OutOfRange)?
            .append(&moved)?;
        Ok(MoveOutcome::Placed {
            count: moved.len(),
            column: dst,
        })
    })
}

/// First face-up card with this rank and suit, scanning column 0 first and
/// each column bottom to top. Returns `(column, index)`.
pub fn find_card(state: &GameState, rank: Rank, suit: Suit) -> Option<(usize, usize)> {
    state.columns().iter().enumerate().find_map(|(col, pile)| {
        pile.iter()
            .position(|c| !c.hidden && c.rank() == rank && c.suit() == suit)
            .map(|idx| (col, idx))
    })
}

/// Locate a face-up card by label and move the run it heads onto `column`.
pub fn sequence_to_column(
    state: &mut GameState,
    rank: Rank,
    suit: Suit,
    column: u8,
) -> Result<MoveOutcome, MoveError> {
    column_index(column)?;
    let (from, start) = find_card(state, rank, suit).ok_or(MoveError::CardNotFound)?;
    column_to_column(state, from as u8, start, column)
}

fn commit<F>(state: &mut GameState, apply: F) -> Result<MoveOutcome, MoveError>
where
    F: FnOnce(&mut GameState) -> Result<MoveOutcome, PileError>,
{
    let mut next = state.clone();
    let outcome = apply(&mut next)?;
    *state = next;
    Ok(outcome)
}

fn column_index(column: u8) -> Result<usize, MoveError> {
    let col = column as usize;
    if col < NUM_COLUMNS {
        Ok(col)
    } else {
        Err(MoveError::InvalidColumn)
    }
}

fn column_top(state: &GameState, col: usize) -> Result<Card, MoveError> {
    state
        .column(col)
        .ok_or(MoveError::InvalidColumn)?
        .top()
        .map_err(|_| MoveError::EmptyColumn)
}

/// Foundation index for `card`, if the card may go there now.
fn foundation_for(state: &GameState, card: Card) -> Result<usize, MoveError> {
    let foundation = card.suit().index() as usize;
    let pile = state
        .foundation(foundation)
        .ok_or(MoveError::InvalidFoundation)?;
    if rules::can_collect(card, pile) {
        Ok(foundation)
    } else {
        Err(MoveError::RanksNotMatching)
    }
}

fn check_placement(state: &GameState, card: Card, col: usize) -> Result<(), MoveError> {
    let target = state.column(col).ok_or(MoveError::InvalidColumn)?;
    if rules::can_place(card, target) {
        Ok(())
    } else {
        Err(MoveError::RanksOrSuitsNotMatching)
    }
}

fn push_foundation(state: &mut GameState, foundation: usize, card: Card) -> Result<(), PileError> {
    state
        .foundation_mut(foundation)
        .ok_or(PileError::OutOfRange)?
        .push(card.face_up())
}

fn push_column(state: &mut GameState, col: usize, card: Card) -> Result<(), PileError> {
    state
        .column_mut(col)
        .ok_or(PileError::OutOfRange)?
        .push(card.face_up())
}
