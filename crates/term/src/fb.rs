//! Styled character grid the board is drawn into.
//!
//! Both front-ends read the grid the same way: as [`Run`]s of cells on one
//! row, split into same-style [`Span`]s. The cursor front-end turns spans into
//! terminal escapes, the line front-end keeps only their text.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const GREY: Rgb = Rgb::new(220, 220, 220);
    pub const RED: Rgb = Rgb::new(205, 49, 49);
    pub const GREEN: Rgb = Rgb::new(13, 188, 121);
    pub const YELLOW: Rgb = Rgb::new(229, 229, 16);
    pub const BLUE: Rgb = Rgb::new(36, 114, 200);
    pub const MAGENTA: Rgb = Rgb::new(188, 63, 188);
    pub const CYAN: Rgb = Rgb::new(17, 168, 205);
}

/// Colors and weight of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::fg(Rgb::GREY)
    }
}

impl CellStyle {
    /// `fg` on black.
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::BLACK,
            bold: false,
            dim: false,
        }
    }

    pub const fn on(self, bg: Rgb) -> Self {
        Self { bg, ..self }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub const fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().into_cell(' ')
    }
}

/// `len` cells of row `y`, starting at column `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

/// Adjacent cells of a run that share a style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub style: CellStyle,
    pub text: String,
}

/// Row-major grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.reset(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Blank grid of the given size, reusing the allocation.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    fn row(&self, y: u16) -> Option<&[Cell]> {
        let w = self.width as usize;
        let start = y as usize * w;
        self.cells.get(start..start + w)
    }

    fn row_mut(&mut self, y: u16) -> Option<&mut [Cell]> {
        let w = self.width as usize;
        let start = y as usize * w;
        self.cells.get_mut(start..start + w)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y)?.get(x as usize).copied()
    }

    /// Writes outside the grid are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.row_mut(y).and_then(|row| row.get_mut(x as usize)) {
            *slot = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, style.into_cell(ch));
    }

    /// Text is cut at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let Some(row) = self.row_mut(y) else {
            return;
        };
        let tail = row.get_mut(x as usize..).unwrap_or_default();
        for (slot, ch) in tail.iter_mut().zip(s.chars()) {
            *slot = style.into_cell(ch);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Every row as one run.
    pub fn rows(&self) -> impl Iterator<Item = Run> {
        let len = self.width;
        (0..self.height).map(move |y| Run { x: 0, y, len })
    }

    /// Append the runs where this grid differs from `prev`.
    ///
    /// Against a grid of another size, every row differs.
    pub fn diff_runs(&self, prev: &FrameBuffer, out: &mut Vec<Run>) {
        if (prev.width, prev.height) != (self.width, self.height) {
            out.extend(self.rows());
            return;
        }
        for y in 0..self.height {
            let (Some(old), Some(new)) = (prev.row(y), self.row(y)) else {
                continue;
            };
            let mut x = 0;
            while x < new.len() {
                if old[x] == new[x] {
                    x += 1;
                    continue;
                }
                let start = x;
                while x < new.len() && old[x] != new[x] {
                    x += 1;
                }
                out.push(Run {
                    x: start as u16,
                    y,
                    len: (x - start) as u16,
                });
            }
        }
    }

    /// Cells of `run` grouped into same-style spans; the part outside the
    /// grid is skipped.
    pub fn spans(&self, run: Run) -> impl Iterator<Item = Span> + '_ {
        let cells = self
            .row(run.y)
            .map(|row| {
                let start = (run.x as usize).min(row.len());
                let end = (run.x as usize + run.len as usize).min(row.len());
                &row[start..end]
            })
            .unwrap_or_default();
        cells.chunk_by(|a, b| a.style == b.style).map(|chunk| Span {
            style: chunk[0].style,
            text: chunk.iter().map(|c| c.ch).collect(),
        })
    }

    /// Row `y` as plain text, trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        let mut text: String = self
            .spans(Run {
                x: 0,
                y,
                len: self.width,
            })
            .map(|span| span.text)
            .collect();
        text.truncate(text.trim_end().len());
        text
    }

    /// The whole grid as newline-separated plain text.
    pub fn to_text(&self) -> String {
        self.rows()
            .map(|run| self.row_text(run.y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
