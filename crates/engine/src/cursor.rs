//! Cursor model for the keypress front-end.
//!
//! The cursor holds a selected position and an optional dragged position.
//! Each [`CursorAction`] either moves the selection, picks up or drops a
//! card, or turns into a [`GameAction`] applied through the session.

use crate::core::GameState;
use crate::moves::{MoveError, MoveOutcome};
use crate::session::GameSession;
use crate::types::{CursorAction, GameAction, PileId, PILE_COUNT, PILE_ORDER};

/// A pile plus a card index within it (`None` = the empty slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub pile: PileId,
    pub card: Option<usize>,
}

impl Position {
    /// The top card of `pile`, or its empty slot.
    pub fn top_of(state: &GameState, pile: PileId) -> Self {
        Self {
            pile,
            card: state.pile(pile).and_then(|p| p.top_index()),
        }
    }
}

/// Result of one cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorOutcome {
    Navigated,
    PickedUp,
    DragCancelled,
    Applied {
        action: GameAction,
        outcome: MoveOutcome,
    },
    Rejected {
        action: Option<GameAction>,
        error: MoveError,
    },
    Ignored,
}

impl CursorOutcome {
    /// The intent sent to the engine, if any.
    pub fn action(&self) -> Option<GameAction> {
        match *self {
            CursorOutcome::Applied { action, .. } => Some(action),
            CursorOutcome::Rejected { action, .. } => action,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    selected: Position,
    dragged: Option<Position>,
}

impl Cursor {
    /// Start on the deck's top card.
    pub fn new(state: &GameState) -> Self {
        Self {
            selected: Position::top_of(state, PileId::Deck),
            dragged: None,
        }
    }

    pub fn selected(&self) -> Position {
        self.selected
    }

    pub fn dragged(&self) -> Option<Position> {
        self.dragged
    }

    pub fn handle(&mut self, session: &mut GameSession, action: CursorAction) -> CursorOutcome {
        session.clear_status();
        let outcome = match action {
            CursorAction::Left => self.step_across(session.state(), -1),
            CursorAction::Right => self.step_across(session.state(), 1),
            CursorAction::Up => self.step_within(session.state(), false),
            CursorAction::Down => self.step_within(session.state(), true),
            CursorAction::Primary => self.primary(session),
            CursorAction::Collect => self.collect(session),
        };
        self.normalize(session.state());
        outcome
    }

    fn step_across(&mut self, state: &GameState, delta: isize) -> CursorOutcome {
        let Some(mut index) = self.selected.pile.order_index() else {
            self.selected = Position::top_of(state, PileId::Deck);
            return CursorOutcome::Navigated;
        };
        for _ in 0..PILE_COUNT {
            index = (index as isize + delta).rem_euclid(PILE_COUNT as isize) as usize;
            let pile = PILE_ORDER[index];
            if pile == PileId::Poll && state.poll().is_empty() {
                continue;
            }
            self.selected = Position::top_of(state, pile);
            break;
        }
        CursorOutcome::Navigated
    }

    fn step_within(&mut self, state: &GameState, forward: bool) -> CursorOutcome {
        if !matches!(self.selected.pile, PileId::Column(_)) {
            return CursorOutcome::Ignored;
        }
        let (Some(pile), Some(current)) = (state.pile(self.selected.pile), self.selected.card)
        else {
            return CursorOutcome::Ignored;
        };

        let len = pile.len();
        let mut index = current;
        for _ in 0..len {
            index = if forward {
                (index + 1) % len
            } else {
                (index + len - 1) % len
            };
            if pile.get(index).is_some_and(|c| !c.hidden) {
                self.selected.card = Some(index);
                break;
            }
        }
        CursorOutcome::Navigated
    }

    fn primary(&mut self, session: &mut GameSession) -> CursorOutcome {
        if self.selected.pile == PileId::Deck {
            self.dragged = None;
            let outcome = Self::send(session, GameAction::Draw);
            self.selected = Position::top_of(session.state(), PileId::Deck);
            return outcome;
        }

        let Some(dragged) = self.dragged else {
            if self.selected.card.is_none() {
                return CursorOutcome::Ignored;
            }
            self.dragged = Some(self.selected);
            return CursorOutcome::PickedUp;
        };

        if dragged == self.selected {
            self.dragged = None;
            return CursorOutcome::DragCancelled;
        }

        let action = match self.drop_action(session.state(), dragged) {
            Ok(action) => action,
            Err(error) => {
                session.reject(error);
                return CursorOutcome::Rejected {
                    action: None,
                    error,
                };
            }
        };

        let outcome = Self::send(session, action);
        if let CursorOutcome::Applied { outcome: done, .. } = outcome {
            self.dragged = None;
            self.selected = Position::top_of(session.state(), done.destination());
        }
        outcome
    }

    /// The intent implied by dropping `dragged` on the selection.
    fn drop_action(&self, state: &GameState, dragged: Position) -> Result<GameAction, MoveError> {
        let target = self.selected;
        match (dragged.pile, target.pile) {
            (_, PileId::Column(to)) => {
                let end = state.pile(target.pile).and_then(|p| p.top_index());
                if target.card != end {
                    return Err(MoveError::NotColumnEnd);
                }
                match dragged.pile {
                    PileId::Poll => Ok(GameAction::PollToColumn { column: to }),
                    PileId::Foundation(foundation) => {
                        Ok(GameAction::FoundationToColumn { foundation, column: to })
                    }
                    PileId::Column(from) => {
                        let start = dragged.card.ok_or(MoveError::EmptyColumn)?;
                        Ok(GameAction::ColumnToColumn { from, start, to })
                    }
                    PileId::Deck => Err(MoveError::InvalidDrop),
                }
            }
            (PileId::Poll, PileId::Foundation(foundation)) => {
                let card = state.poll().top().map_err(|_| MoveError::EmptyPoll)?;
                if card.suit().index() != foundation {
                    return Err(MoveError::WrongFoundation);
                }
                Ok(GameAction::CollectPoll)
            }
            (PileId::Column(column), PileId::Foundation(foundation)) => {
                let pile = state
                    .pile(dragged.pile)
                    .ok_or(MoveError::InvalidColumn)?;
                if dragged.card != pile.top_index() {
                    return Err(MoveError::NotTopCard);
                }
                let card = pile.top().map_err(|_| MoveError::EmptyColumn)?;
                if card.suit().index() != foundation {
                    return Err(MoveError::WrongFoundation);
                }
                Ok(GameAction::CollectColumn { column })
            }
            _ => Err(MoveError::InvalidDrop),
        }
    }

    fn collect(&mut self, session: &mut GameSession) -> CursorOutcome {
        self.dragged = None;
        let source = self.selected.pile;
        let action = match source {
            PileId::Poll => GameAction::CollectPoll,
            PileId::Column(column) => GameAction::CollectColumn { column },
            _ => return CursorOutcome::Ignored,
        };
        let outcome = Self::send(session, action);
        if matches!(outcome, CursorOutcome::Applied { .. }) {
            self.selected = Position::top_of(session.state(), source);
        }
        outcome
    }

    fn send(session: &mut GameSession, action: GameAction) -> CursorOutcome {
        match session.apply(action) {
            Ok(outcome) => CursorOutcome::Applied { action, outcome },
            Err(error) => CursorOutcome::Rejected {
                action: Some(action),
                error,
            },
        }
    }

    /// Re-anchor selection and drag after the table changed.
    pub fn normalize(&mut self, state: &GameState) {
        self.selected = Self::clamp(state, self.selected);

        if let Some(dragged) = self.dragged {
            let still_there = state
                .pile(dragged.pile)
                .zip(dragged.card)
                .and_then(|(pile, index)| pile.get(index))
                .is_some_and(|card| !card.hidden);
            if !still_there {
                self.dragged = None;
            }
        }
    }

    fn clamp(state: &GameState, position: Position) -> Position {
        let Some(pile) = state.pile(position.pile) else {
            return Position::top_of(state, PileId::Deck);
        };
        let Some(top) = pile.top_index() else {
            return Position {
                pile: position.pile,
                card: None,
            };
        };
        let card = match position.card {
            Some(index) if index <= top && pile.get(index).is_some_and(|c| !c.hidden) => index,
            _ => top,
        };
        Position {
            pile: position.pile,
            card: Some(card),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pile;
    use crate::types::{Card, NUM_COLUMNS, NUM_FOUNDATIONS};

    fn card(label: &str) -> Card {
        Card::parse(label).unwrap()
    }

    fn pile(labels: &[&str]) -> Pile {
        labels.iter().map(|l| card(l)).collect()
    }

    fn session_with(
        poll: Pile,
        foundations: [Pile; NUM_FOUNDATIONS],
        columns: [Pile; NUM_COLUMNS],
    ) -> GameSession {
        GameSession::from_state(
            GameState::from_piles(Pile::new(), poll, foundations, columns),
            0,
        )
    }

    fn select(cursor: &mut Cursor, session: &GameSession, pile: PileId) {
        cursor.selected = Position::top_of(session.state(), pile);
    }

    #[test]
    fn test_starts_on_deck_top() {
        let state = GameState::new(5);
        let cursor = Cursor::new(&state);
        assert_eq!(cursor.selected().pile, PileId::Deck);
        assert_eq!(cursor.selected().card, Some(23));
        assert_eq!(cursor.dragged(), None);
    }

    #[test]
    fn test_right_wraps_and_skips_empty_poll() {
        let mut session = GameSession::new(5);
        let mut cursor = Cursor::new(session.state());

        cursor.handle(&mut session, CursorAction::Right);
        assert_eq!(cursor.selected().pile, PileId::Column(0));
        assert_eq!(cursor.selected().card, Some(0));

        for _ in 0..6 {
            cursor.handle(&mut session, CursorAction::Right);
        }
        assert_eq!(cursor.selected().pile, PileId::Column(6));
        cursor.handle(&mut session, CursorAction::Right);
        assert_eq!(cursor.selected().pile, PileId::Foundation(0));
        assert_eq!(cursor.selected().card, None);

        for _ in 0..4 {
            cursor.handle(&mut session, CursorAction::Right);
        }
        assert_eq!(cursor.selected().pile, PileId::Deck);

        cursor.handle(&mut session, CursorAction::Left);
        assert_eq!(cursor.selected().pile, PileId::Foundation(3));
    }

    #[test]
    fn test_left_stops_on_poll_when_it_has_cards() {
        let mut session = GameSession::new(5);
        let mut cursor = Cursor::new(session.state());
        cursor.handle(&mut session, CursorAction::Primary);
        assert_eq!(session.state().poll().len(), 3);
        assert_eq!(cursor.selected(), Position { pile: PileId::Deck, card: Some(20) });

        cursor.handle(&mut session, CursorAction::Left);
        assert_eq!(cursor.selected(), Position { pile: PileId::Poll, card: Some(2) });
    }

    #[test]
    fn test_up_down_skip_hidden_and_wrap() {
        let mut columns: [Pile; NUM_COLUMNS] = Default::default();
        columns[0] = [card("2D").face_down(), card("9H"), card("8S"), card("7D")]
            .into_iter()
            .collect();
        let mut session = session_with(Pile::new(), Default::default(), columns);
        let mut cursor = Cursor::new(session.state());
        select(&mut cursor, &session, PileId::Column(0));
        assert_eq!(cursor.selected().card, Some(3));

        cursor.handle(&mut session, CursorAction::Down);
        assert_eq!(cursor.selected().card, Some(1));
        cursor.handle(&mut session, CursorAction::Up);
        assert_eq!(cursor.selected().card, Some(3));
        cursor.handle(&mut session, CursorAction::Up);
        assert_eq!(cursor.selected().card, Some(2));
    }

    #[test]
    fn test_up_down_ignored_outside_columns() {
        let mut session = GameSession::new(5);
        let mut cursor = Cursor::new(session.state());
        assert_eq!(cursor.handle(&mut session, CursorAction::Up), CursorOutcome::Ignored);
        assert_eq!(cursor.selected().pile, PileId::Deck);
    }

    #[test]
    fn test_pick_up_and_cancel() {
        let mut session = GameSession::new(5);
        let mut cursor = Cursor::new(session.state());
        cursor.handle(&mut session, CursorAction::Right);

        assert_eq!(cursor.handle(&mut session, CursorAction::Primary), CursorOutcome::PickedUp);
        assert_eq!(cursor.dragged(), Some(cursor.selected()));
        assert_eq!(
            cursor.handle(&mut session, CursorAction::Primary),
            CursorOutcome::DragCancelled
        );
        assert_eq!(cursor.dragged(), None);
    }

    #[test]
    fn test_empty_slot_cannot_be_picked_up() {
        let mut session = GameSession::new(5);
        let mut cursor = Cursor::new(session.state());
        select(&mut cursor, &session, PileId::Foundation(0));
        assert_eq!(cursor.handle(&mut session, CursorAction::Primary), CursorOutcome::Ignored);
        assert_eq!(cursor.dragged(), None);
    }

    #[test]
    fn test_drop_poll_card_on_column() {
        let mut columns: [Pile; NUM_COLUMNS] = Default::default();
        columns[2] = pile(&["7S"]);
        let mut session = session_with(pile(&["6D"]), Default::default(), columns);
        let mut cursor = Cursor::new(session.state());

        select(&mut cursor, &session, PileId::Poll);
        cursor.handle(&mut session, CursorAction::Primary);
        select(&mut cursor, &session, PileId::Column(2));
        let outcome = cursor.handle(&mut session, CursorAction::Primary);

        assert_eq!(outcome.action(), Some(GameAction::PollToColumn { column: 2 }));
        assert!(matches!(outcome, CursorOutcome::Applied { .. }));
        assert_eq!(cursor.dragged(), None);
        assert_eq!(cursor.selected(), Position { pile: PileId::Column(2), card: Some(1) });
        assert_eq!(session.turns(), 1);
    }

    #[test]
    fn test_drop_must_target_column_end() {
        let mut columns: [Pile; NUM_COLUMNS] = Default::default();
        columns[0] = pile(&["8H", "7S"]);
        columns[1] = pile(&["KD"]);
        let mut session = session_with(pile(&["6D"]), Default::default(), columns);
        let mut cursor = Cursor::new(session.state());

        select(&mut cursor, &session, PileId::Poll);
        cursor.handle(&mut session, CursorAction::Primary);
        cursor.selected = Position { pile: PileId::Column(0), card: Some(0) };
        let outcome = cursor.handle(&mut session, CursorAction::Primary);

        assert_eq!(
            outcome,
            CursorOutcome::Rejected { action: None, error: MoveError::NotColumnEnd }
        );
        assert!(cursor.dragged().is_some());
        assert_eq!(
            session.status(),
            "You can only move cards to the end of column piles!"
        );
    }

    #[test]
    fn test_failed_drop_keeps_drag() {
        let mut columns: [Pile; NUM_COLUMNS] = Default::default();
        columns[0] = pile(&["7S"]);
        let mut session = session_with(pile(&["6C"]), Default::default(), columns);
        let mut cursor = Cursor::new(session.state());

        select(&mut cursor, &session, PileId::Poll);
        cursor.handle(&mut session, CursorAction::Primary);
        select(&mut cursor, &session, PileId::Column(0));
        let outcome = cursor.handle(&mut session, CursorAction::Primary);

        assert_eq!(
            outcome,
            CursorOutcome::Rejected {
                action: Some(GameAction::PollToColumn { column: 0 }),
                error: MoveError::RanksOrSuitsNotMatching,
            }
        );
        assert_eq!(cursor.dragged().map(|p| p.pile), Some(PileId::Poll));
        assert_eq!(session.turns(), 0);
    }

    #[test]
    fn test_drop_run_between_columns() {
        let mut columns: [Pile; NUM_COLUMNS] = Default::default();
        columns[0] = [card("3C").face_down(), card("9H"), card("8S")]
            .into_iter()
            .collect();
        columns[4] = pile(&["TS"]);
        let mut session = session_with(Pile::new(), Default::default(), columns);
        let mut cursor = Cursor::new(session.state());

        cursor.selected = Position { pile: PileId::Column(0), card: Some(1) };
        cursor.handle(&mut session, CursorAction::Primary);
        select(&mut cursor, &session, PileId::Column(4));
        let outcome = cursor.handle(&mut session, CursorAction::Primary);

        assert_eq!(
            outcome.action(),
            Some(GameAction::ColumnToColumn { from: 0, start: 1, to: 4 })
        );
        assert_eq!(session.state().columns()[4].len(), 3);
        assert_eq!(cursor.selected(), Position { pile: PileId::Column(4), card: Some(2) });
        assert!(!session.state().columns()[0].top().unwrap().hidden);
    }

    #[test]
    fn test_drop_on_foundation_checks_suit_and_top() {
        let mut columns: [Pile; NUM_COLUMNS] = Default::default();
        columns[0] = pile(&["AS", "KH"]);
        columns[1] = pile(&["AD"]);
        let mut session = session_with(Pile::new(), Default::default(), columns);
        let mut cursor = Cursor::new(session.state());

        cursor.selected = Position { pile: PileId::Column(0), card: Some(0) };
        cursor.handle(&mut session, CursorAction::Primary);
        select(&mut cursor, &session, PileId::Foundation(2));
        assert_eq!(
            cursor.handle(&mut session, CursorAction::Primary),
            CursorOutcome::Rejected { action: None, error: MoveError::NotTopCard }
        );

        select(&mut cursor, &session, PileId::Column(1));
        cursor.dragged = None;
        cursor.handle(&mut session, CursorAction::Primary);
        select(&mut cursor, &session, PileId::Foundation(0));
        assert_eq!(
            cursor.handle(&mut session, CursorAction::Primary),
            CursorOutcome::Rejected { action: None, error: MoveError::WrongFoundation }
        );

        select(&mut cursor, &session, PileId::Foundation(1));
        let outcome = cursor.handle(&mut session, CursorAction::Primary);
        assert_eq!(outcome.action(), Some(GameAction::CollectColumn { column: 1 }));
        assert_eq!(cursor.selected(), Position { pile: PileId::Foundation(1), card: Some(0) });
    }

    #[test]
    fn test_drop_on_poll_is_invalid() {
        let mut columns: [Pile; NUM_COLUMNS] = Default::default();
        columns[0] = pile(&["KH"]);
        let mut session = session_with(pile(&["5C"]), Default::default(), columns);
        let mut cursor = Cursor::new(session.state());

        select(&mut cursor, &session, PileId::Column(0));
        cursor.handle(&mut session, CursorAction::Primary);
        select(&mut cursor, &session, PileId::Poll);
        assert_eq!(
            cursor.handle(&mut session, CursorAction::Primary),
            CursorOutcome::Rejected { action: None, error: MoveError::InvalidDrop }
        );
    }

    #[test]
    fn test_primary_on_deck_clears_drag_and_draws() {
        let mut session = GameSession::new(11);
        let mut cursor = Cursor::new(session.state());
        cursor.handle(&mut session, CursorAction::Right);
        cursor.handle(&mut session, CursorAction::Primary);
        assert!(cursor.dragged().is_some());

        select(&mut cursor, &session, PileId::Deck);
        let outcome = cursor.handle(&mut session, CursorAction::Primary);
        assert_eq!(outcome.action(), Some(GameAction::Draw));
        assert_eq!(cursor.dragged(), None);
        assert_eq!(cursor.selected(), Position { pile: PileId::Deck, card: Some(20) });
    }

    #[test]
    fn test_collect_key_keeps_selection_on_source() {
        let mut columns: [Pile; NUM_COLUMNS] = Default::default();
        columns[3] = [card("5S").face_down(), card("AH")].into_iter().collect();
        let mut session = session_with(Pile::new(), Default::default(), columns);
        let mut cursor = Cursor::new(session.state());

        select(&mut cursor, &session, PileId::Column(3));
        let outcome = cursor.handle(&mut session, CursorAction::Collect);
        assert_eq!(outcome.action(), Some(GameAction::CollectColumn { column: 3 }));
        assert_eq!(cursor.selected(), Position { pile: PileId::Column(3), card: Some(0) });
        assert_eq!(session.state().foundations()[0].len(), 1);

        select(&mut cursor, &session, PileId::Foundation(0));
        assert_eq!(cursor.handle(&mut session, CursorAction::Collect), CursorOutcome::Ignored);
    }

    #[test]
    fn test_collect_from_empty_poll_reports_error() {
        let mut session = session_with(Pile::new(), Default::default(), Default::default());
        let mut cursor = Cursor::new(session.state());
        cursor.selected = Position { pile: PileId::Poll, card: None };

        let outcome = cursor.handle(&mut session, CursorAction::Collect);
        assert_eq!(
            outcome,
            CursorOutcome::Rejected {
                action: Some(GameAction::CollectPoll),
                error: MoveError::EmptyPoll,
            }
        );
        assert_eq!(session.status(), "Poll is empty!");
    }

    #[test]
    fn test_normalize_clamps_stale_selection() {
        let state = GameState::new(3);
        let mut cursor = Cursor::new(&state);
        cursor.selected = Position { pile: PileId::Column(2), card: Some(9) };
        cursor.dragged = Some(Position { pile: PileId::Column(2), card: Some(0) });

        cursor.normalize(&state);
        assert_eq!(cursor.selected(), Position { pile: PileId::Column(2), card: Some(2) });
        assert_eq!(cursor.dragged(), None);
    }
}
