//! Pile module - fixed-capacity card stacks
//!
//! Every pile on the table is an ordered sequence of cards whose tail is the
//! only mutable end. Storage is a stack-allocated arena of [`DECK_SIZE`] slots;
//! since there are only 52 cards in play no pile can legitimately exceed it.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Card, DECK_SIZE};

/// Failure of a pile accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PileError {
    EmptyPile,
    Overflow,
    OutOfRange,
}

impl PileError {
    pub fn code(self) -> &'static str {
        match self {
            PileError::EmptyPile => "empty_pile",
            PileError::Overflow => "pile_overflow",
            PileError::OutOfRange => "index_out_of_range",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PileError::EmptyPile => "pile is empty",
            PileError::Overflow => "pile is full",
            PileError::OutOfRange => "card index out of range",
        }
    }
}

impl fmt::Display for PileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for PileError {}

/// An ordered stack of cards (index 0 is the bottom).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pile {
    cards: ArrayVec<Card, DECK_SIZE>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Index of the top card, if any.
    pub fn top_index(&self) -> Option<usize> {
        self.cards.len().checked_sub(1)
    }

    pub fn top(&self) -> Result<Card, PileError> {
        self.cards.last().copied().ok_or(PileError::EmptyPile)
    }

    /// The `n`-th card from the top, 1-based (`peek(1)` is the top card).
    pub fn peek(&self, n: usize) -> Result<Card, PileError> {
        if self.cards.is_empty() {
            return Err(PileError::EmptyPile);
        }
        let index = self
            .cards
            .len()
            .checked_sub(n)
            .filter(|_| n > 0)
            .ok_or(PileError::OutOfRange)?;
        Ok(self.cards[index])
    }

    /// The last `n` cards (fewer if the pile is shorter), bottom first.
    pub fn top_n(&self, n: usize) -> &[Card] {
        let start = self.cards.len().saturating_sub(n);
        &self.cards[start..]
    }

    pub fn push(&mut self, card: Card) -> Result<(), PileError> {
        self.cards.try_push(card).map_err(|_| PileError::Overflow)
    }

    pub fn pop(&mut self) -> Result<Card, PileError> {
        self.cards.pop().ok_or(PileError::EmptyPile)
    }

    /// Remove and return the cards from `index` to the top, preserving order.
    pub fn split_off(&mut self, index: usize) -> Result<Pile, PileError> {
        if index >= self.cards.len() {
            return Err(PileError::OutOfRange);
        }
        let mut tail = Pile::new();
        for card in self.cards.drain(index..) {
            // `tail` can hold at most what `self` held.
            let _ = tail.cards.try_push(card);
        }
        Ok(tail)
    }

    /// Append every card of `other` on top of this pile, in order.
    pub fn append(&mut self, other: &Pile) -> Result<(), PileError> {
        if self.cards.len() + other.len() > DECK_SIZE {
            return Err(PileError::Overflow);
        }
        for &card in other.iter() {
            self.push(card)?;
        }
        Ok(())
    }

    /// Turn the top card face-up. Returns `true` if a card was flipped.
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if card.hidden => {
                card.hidden = false;
                true
            }
            _ => false,
        }
    }
}

/// Collects up to [`DECK_SIZE`] cards; anything beyond capacity is dropped.
impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut pile = Pile::new();
        for card in iter.into_iter().take(DECK_SIZE) {
            let _ = pile.cards.try_push(card);
        }
        pile
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
