//! TerminalRenderer: puts framebuffers on a real terminal.
//!
//! Frames go out as [`Run`]s. The first frame, and any frame after a resize
//! or [`TerminalRenderer::invalidate`], clears the screen and sends every row.
//! Later frames send only the runs that changed, which after a card move is a
//! few card outlines.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb, Run};
use crate::game_view::Viewport;

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// Diffing renderer over a terminal (stdout) or any other writer.
///
/// A renderer made by [`TerminalRenderer::enter`] restores the terminal when
/// it is dropped.
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    runs: Vec<Run>,
    buf: Vec<u8>,
    raw: bool,
}

impl TerminalRenderer {
    /// Raw mode on the alternate screen, cursor hidden.
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut term = Self::with_writer(io::stdout());
        term.raw = true;
        queue!(
            term.buf,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        term.flush_buf()?;
        Ok(term)
    }

    pub fn viewport(&self) -> Result<Viewport> {
        let (width, height) = terminal::size()?;
        Ok(Viewport::new(width, height))
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Renderer that writes frames to `out` and leaves the terminal mode alone.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            runs: Vec::new(),
            buf: Vec::with_capacity(16 * 1024),
            raw: false,
        }
    }

    /// Next frame is sent in full.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// Callers keep one framebuffer and pass it every frame. After the call it
    /// holds an older frame, ready to be rendered into again.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.runs.clear();
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                fb.diff_runs(prev, &mut self.runs);
            }
            _ => {
                queue!(self.buf, terminal::Clear(terminal::ClearType::All))?;
                self.runs.extend(fb.rows());
            }
        }
        encode_runs(fb, &self.runs, &mut self.buf)?;
        self.flush_buf()?;

        let prev = self.last.get_or_insert_with(|| FrameBuffer::new(0, 0));
        std::mem::swap(prev, fb);
        Ok(())
    }

    /// Back to the normal screen and cooked mode. Only the first call after
    /// [`TerminalRenderer::enter`] does anything.
    pub fn exit(&mut self) -> Result<()> {
        if !self.raw {
            return Ok(());
        }
        self.raw = false;
        self.buf.clear();
        let restored = queue!(
            self.buf,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )
        .map_err(anyhow::Error::from)
        .and_then(|()| self.flush_buf());
        terminal::disable_raw_mode()?;
        restored
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Paint `runs` of `fb`: jump to each run, then print its spans.
fn encode_runs(fb: &FrameBuffer, runs: &[Run], out: &mut Vec<u8>) -> io::Result<()> {
    let mut current: Option<CellStyle> = None;
    for &run in runs {
        queue!(out, cursor::MoveTo(run.x, run.y))?;
        for span in fb.spans(run) {
            if current != Some(span.style) {
                set_style(out, span.style)?;
                current = Some(span.style);
            }
            queue!(out, Print(span.text))?;
        }
    }
    queue!(out, ResetColor, SetAttribute(Attribute::Reset))
}

fn set_style(out: &mut Vec<u8>, style: CellStyle) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(style.fg.into()),
        SetBackgroundColor(style.bg.into())
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}
