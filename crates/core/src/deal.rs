//! Initial deal.
//!
//! Column `i` takes the next `i + 1` cards off the top of the deck, first card
//! at the bottom, and only its last card is turned face-up. 28 cards go to the
//! tableau and 24 stay in the deck.

use crate::game_state::GameState;
use crate::pile::Pile;
use crate::rng::shuffled_deck;
use crate::types::NUM_COLUMNS;

/// Shuffle with `seed` and deal.
pub fn deal(seed: u32) -> GameState {
    deal_from(shuffled_deck(seed))
}

/// Deal the tableau from an already ordered deck (top = last card).
///
/// A deck shorter than 28 cards leaves the later columns short.
pub fn deal_from(mut deck: Pile) -> GameState {
    let mut columns: [Pile; NUM_COLUMNS] = Default::default();
    for (i, column) in columns.iter_mut().enumerate() {
        for _ in 0..=i {
            let Ok(card) = deck.pop() else {
                break;
            };
            // A column never holds more cards than the deck had.
            let _ = column.push(card.face_down());
        }
        column.reveal_top();
    }

    GameState::from_piles(deck, Pile::new(), Default::default(), columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Card, DECK_SIZE};

    #[test]
    fn test_deal_sizes() {
        let state = deal(42);
        assert_eq!(state.deck().len(), 24);
        assert!(state.poll().is_empty());
        for (i, column) in state.columns().iter().enumerate() {
            assert_eq!(column.len(), i + 1);
        }
        assert!(state.foundations().iter().all(Pile::is_empty));
        assert!(state.has_full_deck());
    }

    #[test]
    fn test_only_last_card_of_each_column_is_face_up() {
        let state = deal(42);
        for column in state.columns() {
            let (top, rest) = column.cards().split_last().unwrap();
            assert!(!top.hidden);
            assert!(rest.iter().all(|c| c.hidden));
        }
        assert!(state.deck().iter().all(|c| c.hidden));
    }

    #[test]
    fn test_deal_takes_cards_from_the_deck_top() {
        let deck: Pile = (0..DECK_SIZE as u8)
            .filter_map(Card::from_id)
            .map(Card::face_down)
            .collect();
        let state = deal_from(deck);

        // Deck top is id 51: it goes to column 0, then 50 and 49 to column 1.
        assert_eq!(state.columns()[0].top().unwrap().id(), 51);
        let col1: Vec<u8> = state.columns()[1].iter().map(|c| c.id()).collect();
        assert_eq!(col1, vec![50, 49]);
        assert_eq!(state.deck().top().unwrap().id(), 23);
    }

    #[test]
    fn test_deal_is_deterministic() {
        assert_eq!(deal(1720019880), deal(1720019880));
        assert_ne!(deal(1), deal(2));
    }
}
