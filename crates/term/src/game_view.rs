//! GameView: maps a game session into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, in board cells:
//!
//! ```text
//! x:  0        9        18       27       37 41 45  54
//!     [F0]     [F1]     [F2]     [F3]     poll fan  [deck]     y = 0
//!     [C0]     [C1]     [C2]     [C3]     [C4]     [C5]  [C6]  y = 7, +2 per card
//! ```

use crate::core::{GameState, Pile};
use crate::engine::{Cursor, GameSession, Position};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Card, Color, PileId, NUM_COLUMNS, RANKS_PER_SUIT};

pub const CARD_WIDTH: u16 = 7;
pub const CARD_HEIGHT: u16 = 5;
pub const GAP_HORIZONTAL: u16 = 2;
pub const GAP_VERTICAL: u16 = 2;
/// Rows between stacked column cards.
pub const OFFSET_VERTICAL: u16 = 2;
/// Columns between fanned poll cards.
pub const OFFSET_HORIZONTAL: u16 = 4;

/// Horizontal distance between pile slots.
pub const SLOT_STRIDE: u16 = CARD_WIDTH + GAP_HORIZONTAL;
pub const BOARD_WIDTH: u16 = SLOT_STRIDE * NUM_COLUMNS as u16 - GAP_HORIZONTAL;
/// Top of the column row.
pub const COLUMNS_Y: u16 = CARD_HEIGHT + GAP_VERTICAL;
/// Longest possible column: six hidden cards under a full King-to-Ace run.
pub const MAX_COLUMN_LEN: u16 = (NUM_COLUMNS as u16 - 1) + RANKS_PER_SUIT as u16;
pub const BOARD_HEIGHT: u16 = COLUMNS_Y + OFFSET_VERTICAL * (MAX_COLUMN_LEN - 1) + CARD_HEIGHT;

/// Status line, then key hints and seed, under the board.
pub const STATUS_Y: u16 = BOARD_HEIGHT + 1;

const KEY_HINTS: &str = "a/d pile  w/s card  space pick/drop/draw  e collect  q quit";
const POLL_SLOT: u16 = 5;
const DECK_SLOT: u16 = 6;
const POLL_FAN: usize = 3;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Cell vocabulary used to draw cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Plain characters only, for line-oriented output
    Ascii,
    /// Colored borders and fills
    #[default]
    Color,
}

/// Cursor state shown on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlight {
    pub selected: Option<Position>,
    pub dragged: Option<Position>,
}

impl Highlight {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_cursor(cursor: &Cursor) -> Self {
        Self {
            selected: Some(cursor.selected()),
            dragged: cursor.dragged(),
        }
    }

    fn frame(&self, pile: PileId, index: usize) -> Frame {
        if self.selected == Some(Position { pile, card: Some(index) }) {
            Frame::Selected
        } else if self.is_dragged(pile, index) {
            Frame::Dragged
        } else {
            Frame::Plain
        }
    }

    fn is_slot_selected(&self, pile: PileId) -> bool {
        self.selected.is_some_and(|p| p.pile == pile)
    }

    /// The dragged card, and in a column everything stacked on it.
    fn is_dragged(&self, pile: PileId, index: usize) -> bool {
        match self.dragged {
            Some(Position { pile: p, card: Some(start) }) if p == pile => match pile {
                PileId::Column(_) => index >= start,
                _ => index == start,
            },
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Plain,
    Selected,
    Dragged,
    Slot,
    SlotSelected,
}

/// Draws the Klondike table in one theme.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {
    theme: Theme,
}

impl GameView {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Render the board plus status line into an existing framebuffer.
    ///
    /// The board keeps its full height whatever the deal, so the status lines
    /// never move. Anything outside the viewport is clipped.
    pub fn render_into(
        &self,
        session: &GameSession,
        highlight: Highlight,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);

        let start_x = viewport.width.saturating_sub(BOARD_WIDTH) / 2;
        self.draw_table(fb, session.state(), highlight, start_x, 0);

        let dim = CellStyle::default().dim();
        fb.put_str(start_x, STATUS_Y, &session.status_line(), CellStyle::default());
        fb.put_str(start_x, STATUS_Y + 1, KEY_HINTS, dim);
        fb.put_str(start_x, STATUS_Y + 2, &format!("Seed: {}", session.seed()), dim);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &GameSession, highlight: Highlight, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, highlight, viewport, &mut fb);
        fb
    }

    /// Just the table, `BOARD_WIDTH` by `BOARD_HEIGHT`.
    pub fn render_board(&self, state: &GameState, highlight: Highlight) -> FrameBuffer {
        let mut fb = FrameBuffer::new(BOARD_WIDTH, BOARD_HEIGHT);
        self.draw_table(&mut fb, state, highlight, 0, 0);
        fb
    }

    fn draw_table(&self, fb: &mut FrameBuffer, state: &GameState, hl: Highlight, ox: u16, oy: u16) {
        for (i, foundation) in state.foundations().iter().enumerate() {
            let pile = PileId::Foundation(i as u8);
            let x = ox + SLOT_STRIDE * i as u16;
            self.draw_slot(fb, x, oy, hl.is_slot_selected(pile));
            self.draw_top(fb, x, oy, foundation, pile, hl);
        }

        // Up to three poll cards, the top one leftmost.
        let poll = state.poll();
        let fan = poll.top_n(POLL_FAN);
        let first = poll.len() - fan.len();
        for (offset, &card) in fan.iter().enumerate() {
            let x = ox + SLOT_STRIDE * POLL_SLOT - OFFSET_HORIZONTAL * offset as u16;
            self.draw_card(fb, x, oy, card, hl.frame(PileId::Poll, first + offset));
        }

        let deck_x = ox + SLOT_STRIDE * DECK_SLOT;
        self.draw_slot(fb, deck_x, oy, hl.is_slot_selected(PileId::Deck));
        self.draw_top(fb, deck_x, oy, state.deck(), PileId::Deck, hl);

        for (i, column) in state.columns().iter().enumerate() {
            let pile = PileId::Column(i as u8);
            let x = ox + SLOT_STRIDE * i as u16;
            let y = oy + COLUMNS_Y;
            self.draw_slot(fb, x, y, hl.is_slot_selected(pile));
            for (index, &card) in column.iter().enumerate() {
                let cy = y + OFFSET_VERTICAL * index as u16;
                self.draw_card(fb, x, cy, card, hl.frame(pile, index));
            }
        }
    }

    fn draw_top(&self, fb: &mut FrameBuffer, x: u16, y: u16, pile: &Pile, id: PileId, hl: Highlight) {
        if let (Some(index), Ok(card)) = (pile.top_index(), pile.top()) {
            self.draw_card(fb, x, y, card, hl.frame(id, index));
        }
    }

    fn draw_slot(&self, fb: &mut FrameBuffer, x: u16, y: u16, selected: bool) {
        let frame = if selected { Frame::SlotSelected } else { Frame::Slot };
        self.draw_frame(fb, x, y, frame);
    }

    fn draw_card(&self, fb: &mut FrameBuffer, x: u16, y: u16, card: Card, frame: Frame) {
        self.draw_frame(fb, x, y, frame);

        let (fill, symbol) = match self.theme {
            Theme::Ascii => {
                let plain = CellStyle::default();
                (plain.into_cell(if card.hidden { '#' } else { '.' }), plain)
            }
            Theme::Color => {
                let bg = if card.hidden {
                    Rgb::MAGENTA
                } else {
                    match card.color() {
                        Color::Red => Rgb::RED,
                        Color::Black => Rgb::BLACK,
                    }
                };
                (
                    CellStyle::default().on(bg).into_cell(' '),
                    CellStyle::fg(Rgb::WHITE).on(bg).bold(),
                )
            }
        };
        fb.fill_rect(x + 1, y + 1, CARD_WIDTH - 2, CARD_HEIGHT - 2, fill.ch, fill.style);

        if card.hidden {
            return;
        }
        let rank = card.rank().symbol();
        let suit = card.suit().symbol();
        let right = x + CARD_WIDTH - 2;
        let bottom = y + CARD_HEIGHT - 2;
        fb.put_char(x + 1, y + 1, rank, symbol);
        fb.put_char(right, y + 1, suit, symbol);
        fb.put_char(right, bottom, rank, symbol);
        fb.put_char(x + 1, bottom, suit, symbol);
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, frame: Frame) {
        let (corner, horizontal, vertical) = match self.theme {
            Theme::Ascii => {
                let style = CellStyle::default();
                let horizontal = match frame {
                    Frame::Selected | Frame::SlotSelected => '=',
                    Frame::Dragged => '~',
                    Frame::Plain | Frame::Slot => '-',
                };
                (
                    style.into_cell('+'),
                    style.into_cell(horizontal),
                    style.into_cell('|'),
                )
            }
            Theme::Color => {
                let bg = match frame {
                    Frame::Selected | Frame::SlotSelected => Rgb::YELLOW,
                    Frame::Dragged => Rgb::GREEN,
                    Frame::Plain => Rgb::BLUE,
                    Frame::Slot => Rgb::CYAN,
                };
                let cell = CellStyle::default().on(bg).into_cell(' ');
                (cell, cell, cell)
            }
        };

        let w = CARD_WIDTH;
        let h = CARD_HEIGHT;
        for dx in 1..w - 1 {
            fb.set(x + dx, y, horizontal);
            fb.set(x + dx, y + h - 1, horizontal);
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, vertical);
            fb.set(x + w - 1, y + dy, vertical);
        }
        fb.set(x, y, corner);
        fb.set(x + w - 1, y, corner);
        fb.set(x, y + h - 1, corner);
        fb.set(x + w - 1, y + h - 1, corner);
    }
}
