//! Game state module - the 13 piles on the table
//!
//! `GameState` owns the deck, poll, foundations and columns. It knows nothing
//! about turns, cursors or input; the engine crate mutates it through the
//! accessors below.

use crate::pile::Pile;
use crate::types::{PileId, DECK_SIZE, NUM_COLUMNS, NUM_FOUNDATIONS, RANKS_PER_SUIT};

/// Complete table state
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameState {
    deck: Pile,
    poll: Pile,
    foundations: [Pile; NUM_FOUNDATIONS],
    columns: [Pile; NUM_COLUMNS],
}

impl GameState {
    /// Shuffle a fresh deck with `seed` and deal the tableau.
    pub fn new(seed: u32) -> Self {
        crate::deal::deal(seed)
    }

    /// Build a table from explicit piles.
    ///
    /// No invariants are checked; this is meant for tests and tools that set
    /// up specific positions.
    pub fn from_piles(
        deck: Pile,
        poll: Pile,
        foundations: [Pile; NUM_FOUNDATIONS],
        columns: [Pile; NUM_COLUMNS],
    ) -> Self {
        Self {
            deck,
            poll,
            foundations,
            columns,
        }
    }

    pub fn deck(&self) -> &Pile {
        &self.deck
    }

    pub fn poll(&self) -> &Pile {
        &self.poll
    }

    pub fn foundations(&self) -> &[Pile; NUM_FOUNDATIONS] {
        &self.foundations
    }

    pub fn columns(&self) -> &[Pile; NUM_COLUMNS] {
        &self.columns
    }

    pub fn foundation(&self, index: usize) -> Option<&Pile> {
        self.foundations.get(index)
    }

    pub fn column(&self, index: usize) -> Option<&Pile> {
        self.columns.get(index)
    }

    pub fn deck_mut(&mut self) -> &mut Pile {
        &mut self.deck
    }

    pub fn poll_mut(&mut self) -> &mut Pile {
        &mut self.poll
    }

    pub fn foundation_mut(&mut self, index: usize) -> Option<&mut Pile> {
        self.foundations.get_mut(index)
    }

    pub fn column_mut(&mut self, index: usize) -> Option<&mut Pile> {
        self.columns.get_mut(index)
    }

    /// Resolve a pile id; `None` for out-of-range foundation/column indices.
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Foundation(i) => self.foundations.get(i as usize),
            PileId::Poll => Some(&self.poll),
            PileId::Deck => Some(&self.deck),
            PileId::Column(i) => self.columns.get(i as usize),
        }
    }

    pub fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        match id {
            PileId::Foundation(i) => self.foundations.get_mut(i as usize),
            PileId::Poll => Some(&mut self.poll),
            PileId::Deck => Some(&mut self.deck),
            PileId::Column(i) => self.columns.get_mut(i as usize),
        }
    }

    /// All four foundations hold a full suit.
    pub fn is_won(&self) -> bool {
        self.foundations
            .iter()
            .all(|f| f.len() == RANKS_PER_SUIT as usize)
    }

    /// Number of cards on the table.
    pub fn card_count(&self) -> usize {
        self.all_piles().map(Pile::len).sum()
    }

    /// How many times each card id appears across all piles.
    pub fn card_census(&self) -> [u8; DECK_SIZE] {
        let mut counts = [0u8; DECK_SIZE];
        for card in self.all_piles().flat_map(Pile::iter) {
            let slot = &mut counts[card.id() as usize];
            *slot = slot.saturating_add(1);
        }
        counts
    }

    /// Every card id 0..52 is present exactly once.
    pub fn has_full_deck(&self) -> bool {
        self.card_census().iter().all(|&n| n == 1)
    }

    /// Each foundation is a gapless Ace-up run of its own suit, face-up.
    pub fn foundations_are_gapless(&self) -> bool {
        self.foundations.iter().enumerate().all(|(suit, f)| {
            f.iter().enumerate().all(|(i, card)| {
                card.suit().index() as usize == suit
                    && card.rank().value() as usize == i
                    && !card.hidden
            })
        })
    }

    fn all_piles(&self) -> impl Iterator<Item = &Pile> {
        std::iter::once(&self.deck)
            .chain(std::iter::once(&self.poll))
            .chain(self.foundations.iter())
            .chain(self.columns.iter())
    }
}
