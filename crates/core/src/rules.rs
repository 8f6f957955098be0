//! Placement rules for Klondike.
//!
//! These are pure predicates over cards and piles; the engine decides which
//! pile is the source and which the destination.

use crate::pile::Pile;
use crate::types::{Card, Rank};

/// Can `card` go onto `foundation`?
///
/// An empty foundation accepts only an Ace; otherwise the card must be the
/// same suit and exactly one rank above the current top.
pub fn can_collect(card: Card, foundation: &Pile) -> bool {
    if card.hidden {
        return false;
    }
    match foundation.top() {
        Err(_) => card.rank() == Rank::ACE,
        Ok(top) => top.suit() == card.suit() && top.rank().succ() == Some(card.rank()),
    }
}

/// Does `card` stack directly on `onto` in the tableau?
///
/// One rank lower and the opposite color.
pub fn stacks_on(card: Card, onto: Card) -> bool {
    card.rank().succ() == Some(onto.rank()) && card.color() != onto.color()
}

/// Can a card (or the bottom card of a run) be placed on `column`?
///
/// An empty column accepts only a King.
pub fn can_place(card: Card, column: &Pile) -> bool {
    if card.hidden {
        return false;
    }
    match column.top() {
        Err(_) => card.rank() == Rank::KING,
        Ok(top) => !top.hidden && stacks_on(card, top),
    }
}

/// Is `cards` a face-up, descending, alternating-color run?
pub fn is_movable_run(cards: &[Card]) -> bool {
    if cards.is_empty() || cards.iter().any(|c| c.hidden) {
        return false;
    }
    cards.windows(2).all(|pair| stacks_on(pair[1], pair[0]))
}
