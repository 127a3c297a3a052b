//! TerminalRenderer: flushes rendered lines to a real terminal.
//!
//! Frames are diffed per row against the previous frame; only changed rows
//! are rewritten.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::view::{Line, Tone};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Vec<Line>>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
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

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, keeping it for the next diff.
    pub fn draw(&mut self, lines: Vec<Line>) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) => encode_diff_into(prev, &lines, &mut self.buf)?,
            None => encode_full_into(&lines, &mut self.buf)?,
        }
        if !self.buf.is_empty() {
            self.flush_buf()?;
        }
        self.last = Some(lines);
        Ok(())
    }

    /// Ring the terminal bell.
    pub fn bell(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print('\x07'))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(lines: &[Line], out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    for (y, line) in lines.iter().enumerate() {
        encode_line_into(row(y), line, out)?;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode the rows of `next` that differ from `prev` into `out`.
///
/// Leaves `out` untouched when nothing changed.
pub fn encode_diff_into(prev: &[Line], next: &[Line], out: &mut Vec<u8>) -> Result<()> {
    let mut dirty = false;
    for y in 0..prev.len().max(next.len()) {
        match (prev.get(y), next.get(y)) {
            (Some(a), Some(b)) if a == b => {}
            (_, Some(b)) => {
                encode_line_into(row(y), b, out)?;
                dirty = true;
            }
            (Some(_), None) => {
                out.queue(cursor::MoveTo(0, row(y)))?;
                out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
                dirty = true;
            }
            (None, None) => {}
        }
    }

    if dirty {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn encode_line_into(y: u16, line: &Line, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, y))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    for span in &line.spans {
        apply_tone_into(out, span.tone)?;
        out.queue(Print(&span.text))?;
    }
    Ok(())
}

fn apply_tone_into(out: &mut Vec<u8>, tone: Tone) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(tone_color(tone)))?;
    match tone {
        Tone::Title | Tone::Alert | Tone::Selected => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        Tone::Dim | Tone::Hidden => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        _ => {}
    }
    Ok(())
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Plain | Tone::Dim => Color::Reset,
        Tone::Title => Color::Cyan,
        Tone::Hidden => Color::Grey,
        Tone::Revealed => Color::White,
        Tone::Selected => Color::Yellow,
        Tone::Matched => Color::Green,
        Tone::Exposed => Color::Magenta,
        Tone::Alert => Color::Red,
    }
}

fn row(y: usize) -> u16 {
    u16::try_from(y).unwrap_or(u16::MAX)
}
