//! TerminalRenderer: flushes a framebuffer to a terminal.
//!
//! The first frame, and any frame after a resize or [`TerminalRenderer::invalidate`],
//! repaints the whole screen. Every other frame only repaints runs of changed
//! cells; runs separated by a short unchanged gap are painted as one, since
//! reprinting a few cells is cheaper than another cursor move.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Unchanged cells between two runs that are still repainted rather than skipped.
const MAX_GAP: usize = 4;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render into any writer (the terminal itself, or a buffer in tests).
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.last = None;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full repaint (e.g. on terminal resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// On return `fb` holds stale contents from an earlier frame; callers
    /// render the next frame over it, so no buffer is ever cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        self.last = Some(std::mem::replace(fb, prev));
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Queues cursor moves and style changes, skipping the redundant ones.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
    cursor: Option<(u16, u16)>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self {
            out,
            style: None,
            cursor: None,
        }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        if self.cursor != Some((x, y)) {
            self.out.queue(cursor::MoveTo(x, y))?;
            self.cursor = Some((x, y));
        }
        Ok(())
    }

    fn set_style(&mut self, style: CellStyle) -> Result<()> {
        let prev = self.style;
        if prev == Some(style) {
            return Ok(());
        }

        // Attributes can only be cleared all at once, which also drops colors.
        let reset = match prev {
            Some(p) => (p.bold && !style.bold) || (p.dim && !style.dim),
            None => true,
        };
        if reset {
            self.out.queue(SetAttribute(Attribute::Reset))?;
        }
        if reset || prev.map(|p| p.fg) != Some(style.fg) {
            self.out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        }
        if reset || prev.map(|p| p.bg) != Some(style.bg) {
            self.out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        }
        if style.bold && (reset || !prev.is_some_and(|p| p.bold)) {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim && (reset || !prev.is_some_and(|p| p.dim)) {
            self.out.queue(SetAttribute(Attribute::Dim))?;
        }

        self.style = Some(style);
        Ok(())
    }

    fn paint(&mut self, x: u16, y: u16, cells: &[Cell]) -> Result<()> {
        self.move_to(x, y)?;
        for cell in cells {
            self.set_style(cell.style)?;
            self.out.queue(Print(cell.ch))?;
        }
        self.cursor = Some((x.saturating_add(cells.len() as u16), y));
        Ok(())
    }

    fn finish(self) -> Result<()> {
        if self.style.is_some() {
            self.out.queue(ResetColor)?;
            self.out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

/// Queue a full-screen repaint of `fb` into `out`.
fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        painter.paint(0, y, fb.row(y))?;
    }
    painter.finish()
}

/// Queue only the cells of `next` that differ from `prev` (same size) into `out`.
fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut painter = Painter::new(out);
    for y in 0..next.height() {
        let row = next.row(y);
        for (start, end) in changed_runs(prev.row(y), row, MAX_GAP) {
            painter.paint(start as u16, y, &row[start..end])?;
        }
    }
    painter.finish()
}

/// Half-open column ranges where `a` and `b` differ.
///
/// Runs separated by at most `max_gap` equal cells are merged.
fn changed_runs(a: &[Cell], b: &[Cell], max_gap: usize) -> Vec<(usize, usize)> {
    let mut runs: Vec<(usize, usize)> = Vec::new();
    for (x, (ca, cb)) in a.iter().zip(b).enumerate() {
        if ca == cb {
            continue;
        }
        match runs.last_mut() {
            Some((_, end)) if x - *end <= max_gap => *end = x + 1,
            _ => runs.push((x, x + 1)),
        }
    }
    runs
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
