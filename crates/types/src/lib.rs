//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules, session bookkeeping, rendering, journaling).
//!
//! # Card Encoding
//!
//! A card is identified by an integer `0..52`:
//!
//! | Field | Formula | Values |
//! |-------|---------|--------|
//! | suit | `id / 13` | 0 = Hearts, 1 = Diamonds, 2 = Spades, 3 = Clubs |
//! | rank | `id % 13` | 0 = Ace .. 12 = King |
//! | color | `suit / 2` | 0 = red, 1 = black |
//!
//! # Pile Layout
//!
//! - **Deck** (stock): face-down draw pile
//! - **Poll** (waste): face-up cards drawn from the deck
//! - **Foundations**: 4 piles, one per suit, Ace to King
//! - **Columns**: 7 tableau piles, column `i` dealt `i + 1` cards
//!
//! The cursor walks piles in the fixed order given by [`PILE_ORDER`].
//!
//! # Examples
//!
//! ```
//! use tui_klondike_types::{Card, Color, Rank, Suit, GameAction};
//!
//! let card = Card::parse("7s").unwrap();
//! assert_eq!(card.rank(), Rank::new(6).unwrap());
//! assert_eq!(card.suit(), Suit::Spades);
//! assert_eq!(card.color(), Color::Black);
//! assert_eq!(card.to_string(), "7S");
//!
//! let action = GameAction::PollToColumn { column: 2 };
//! assert_eq!(action.as_str(), "move_poll_to_column");
//! ```

use std::fmt;

/// Number of cards in a deck (and the capacity of every pile)
pub const DECK_SIZE: usize = 52;

/// Cards per suit (Ace..King)
pub const RANKS_PER_SUIT: u8 = 13;

/// Number of foundation piles (one per suit)
pub const NUM_FOUNDATIONS: usize = 4;

/// Number of tableau columns
pub const NUM_COLUMNS: usize = 7;

/// Cards moved from deck to poll per draw
pub const BUYOUT_SIZE: usize = 3;

/// Number of addressable piles in cursor order
pub const PILE_COUNT: usize = NUM_FOUNDATIONS + 2 + NUM_COLUMNS;

/// Rank symbols indexed by rank value.
pub const RANK_SYMBOLS: [char; 13] = [
    'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
];

/// Suit symbols indexed by suit value.
pub const SUIT_SYMBOLS: [char; 4] = ['H', 'D', 'S', 'C'];

/// The four suits, in encoding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Hearts and diamonds are red, spades and clubs are black.
    pub fn color(self) -> Color {
        if self.index() / 2 == 0 {
            Color::Red
        } else {
            Color::Black
        }
    }

    pub fn symbol(self) -> char {
        SUIT_SYMBOLS[self.index() as usize]
    }

    /// Parse a suit symbol (case-insensitive).
    ///
    /// ```
    /// use tui_klondike_types::Suit;
    ///
    /// assert_eq!(Suit::from_symbol('h'), Some(Suit::Hearts));
    /// assert_eq!(Suit::from_symbol('C'), Some(Suit::Clubs));
    /// assert_eq!(Suit::from_symbol('x'), None);
    /// ```
    pub fn from_symbol(ch: char) -> Option<Self> {
        let upper = ch.to_ascii_uppercase();
        SUIT_SYMBOLS
            .iter()
            .position(|&s| s == upper)
            .and_then(|i| Self::from_index(i as u8))
    }
}

/// Color class of a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Card rank, 0 = Ace .. 12 = King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(0);
    pub const KING: Rank = Rank(RANKS_PER_SUIT - 1);

    pub fn new(value: u8) -> Option<Self> {
        if value < RANKS_PER_SUIT {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The rank directly above this one, if any.
    pub fn succ(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    pub fn symbol(self) -> char {
        RANK_SYMBOLS[self.0 as usize]
    }

    /// Parse a rank symbol (case-insensitive).
    ///
    /// ```
    /// use tui_klondike_types::Rank;
    ///
    /// assert_eq!(Rank::from_symbol('a'), Some(Rank::ACE));
    /// assert_eq!(Rank::from_symbol('K'), Some(Rank::KING));
    /// assert_eq!(Rank::from_symbol('t').map(|r| r.value()), Some(9));
    /// assert_eq!(Rank::from_symbol('1'), None);
    /// ```
    pub fn from_symbol(ch: char) -> Option<Self> {
        let upper = ch.to_ascii_uppercase();
        RANK_SYMBOLS
            .iter()
            .position(|&s| s == upper)
            .map(|i| Self(i as u8))
    }
}

/// A playing card: identity plus the face-down flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    id: u8,
    pub hidden: bool,
}

impl Card {
    /// Face-up card with the given identity, or `None` if `id >= 52`.
    pub fn from_id(id: u8) -> Option<Self> {
        if (id as usize) < DECK_SIZE {
            Some(Self { id, hidden: false })
        } else {
            None
        }
    }

    /// Face-up card of the given rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            id: suit.index() * RANKS_PER_SUIT + rank.value(),
            hidden: false,
        }
    }

    /// Parse a two-character label such as `"7S"` or `"td"`.
    pub fn parse(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let rank = Rank::from_symbol(chars.next()?)?;
        let suit = Suit::from_symbol(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self::new(rank, suit))
    }

    pub fn id(self) -> u8 {
        self.id
    }

    pub fn suit(self) -> Suit {
        // id < 52 is enforced by every constructor.
        Suit::ALL[(self.id / RANKS_PER_SUIT) as usize]
    }

    pub fn rank(self) -> Rank {
        Rank(self.id % RANKS_PER_SUIT)
    }

    pub fn color(self) -> Color {
        self.suit().color()
    }

    pub fn face_up(self) -> Self {
        Self {
            hidden: false,
            ..self
        }
    }

    pub fn face_down(self) -> Self {
        Self {
            hidden: true,
            ..self
        }
    }

    /// Same identity, ignoring the face-down flag.
    pub fn same_card(self, other: Card) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank().symbol(), self.suit().symbol())
    }
}

/// Identifies one of the 13 piles on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileId {
    Foundation(u8),
    Poll,
    Deck,
    Column(u8),
}

/// Cursor traversal order: foundations, poll, deck, then the columns.
pub const PILE_ORDER: [PileId; PILE_COUNT] = [
    PileId::Foundation(0),
    PileId::Foundation(1),
    PileId::Foundation(2),
    PileId::Foundation(3),
    PileId::Poll,
    PileId::Deck,
    PileId::Column(0),
    PileId::Column(1),
    PileId::Column(2),
    PileId::Column(3),
    PileId::Column(4),
    PileId::Column(5),
    PileId::Column(6),
];

impl PileId {
    /// Position in [`PILE_ORDER`], or `None` for an out-of-range index.
    pub fn order_index(self) -> Option<usize> {
        PILE_ORDER.iter().position(|&p| p == self)
    }
}

/// Move intents accepted by the engine.
///
/// Both front-ends translate user input into these; all indices are 0-based
/// and are bounds-checked by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Draw up to three cards, or recycle the poll when the deck is empty
    Draw,
    /// Move the poll's top card to its foundation
    CollectPoll,
    /// Move a column's top card to its foundation
    CollectColumn { column: u8 },
    /// Move the poll's top card onto a column
    PollToColumn { column: u8 },
    /// Move a foundation's top card back onto a column
    FoundationToColumn { foundation: u8, column: u8 },
    /// Move the run starting at `start` in column `from` onto column `to`
    ColumnToColumn { from: u8, start: usize, to: u8 },
    /// Locate a face-up card by rank and suit, then move its run onto `column`
    SequenceToColumn { rank: Rank, suit: Suit, column: u8 },
}

impl GameAction {
    /// Stable snake_case label (used by the journal)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Draw => "draw",
            GameAction::CollectPoll => "collect_poll",
            GameAction::CollectColumn { .. } => "collect_column",
            GameAction::PollToColumn { .. } => "move_poll_to_column",
            GameAction::FoundationToColumn { .. } => "move_foundation_to_column",
            GameAction::ColumnToColumn { .. } => "move_column_to_column",
            GameAction::SequenceToColumn { .. } => "move_sequence_to_column",
        }
    }
}

/// Cursor front-end commands (quit is detected separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    /// Previous pile in [`PILE_ORDER`]
    Left,
    /// Next pile in [`PILE_ORDER`]
    Right,
    /// Previous face-up card within a column
    Up,
    /// Next face-up card within a column
    Down,
    /// Draw on the deck, otherwise pick up or drop
    Primary,
    /// Send the selected pile's top card to its foundation
    Collect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_id_decomposes_into_suit_and_rank() {
        let card = Card::from_id(0).unwrap();
        assert_eq!(card.suit(), Suit::Hearts);
        assert_eq!(card.rank(), Rank::ACE);

        let card = Card::from_id(25).unwrap();
        assert_eq!(card.suit(), Suit::Diamonds);
        assert_eq!(card.rank(), Rank::KING);

        let card = Card::from_id(51).unwrap();
        assert_eq!(card.suit(), Suit::Clubs);
        assert_eq!(card.rank(), Rank::KING);

        assert!(Card::from_id(52).is_none());
    }

    #[test]
    fn colors_follow_suit_pairs() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Clubs.color(), Color::Black);
    }

    #[test]
    fn card_labels_round_trip_through_display() {
        for id in 0..DECK_SIZE as u8 {
            let card = Card::from_id(id).unwrap();
            let parsed = Card::parse(&card.to_string()).unwrap();
            assert!(parsed.same_card(card), "label {}", card);
        }
    }

    #[test]
    fn card_parse_rejects_bad_labels() {
        assert!(Card::parse("").is_none());
        assert!(Card::parse("7").is_none());
        assert!(Card::parse("7X").is_none());
        assert!(Card::parse("10H").is_none());
        assert!(Card::parse("7SS").is_none());
    }

    #[test]
    fn face_flags_do_not_change_identity() {
        let card = Card::parse("QD").unwrap();
        let down = card.face_down();
        assert!(down.hidden);
        assert!(down.same_card(card));
        assert!(!down.face_up().hidden);
    }

    #[test]
    fn rank_succ_stops_at_king() {
        assert_eq!(Rank::ACE.succ(), Rank::new(1));
        assert_eq!(Rank::KING.succ(), None);
    }

    #[test]
    fn pile_order_is_foundations_poll_deck_columns() {
        assert_eq!(PILE_ORDER.len(), 13);
        assert_eq!(PileId::Foundation(0).order_index(), Some(0));
        assert_eq!(PileId::Poll.order_index(), Some(4));
        assert_eq!(PileId::Deck.order_index(), Some(5));
        assert_eq!(PileId::Column(6).order_index(), Some(12));
        assert_eq!(PileId::Column(7).order_index(), None);
    }
}
