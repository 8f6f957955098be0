//! RNG module - seeded deck shuffling
//!
//! A small LCG keeps deals reproducible from a single 32-bit seed, which is
//! shown to the player at startup so a game can be replayed.

use crate::pile::Pile;
use crate::types::{Card, DECK_SIZE};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using forward Fisher-Yates
    ///
    /// Each position `i` is swapped with a position drawn from `i..len`,
    /// including itself.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        let len = slice.len();
        for i in 0..len {
            let j = i + self.next_range((len - i) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// A full 52-card deck, face-down and shuffled by `seed`.
///
/// The last card of the returned pile is the deck's top.
pub fn shuffled_deck(seed: u32) -> Pile {
    let mut cards: Vec<Card> = (0..DECK_SIZE as u8)
        .filter_map(Card::from_id)
        .map(Card::face_down)
        .collect();
    SimpleRng::new(seed).shuffle(&mut cards);
    cards.into_iter().collect()
}
