//! TerminalRenderer: flushes a frame to a real terminal.
//!
//! The drawing API is intentionally small: every draw is a full redraw
//! of the frame, queued into one buffer and flushed in a single write.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::frame::Frame;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
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
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Queue a full redraw of the frame and flush it in one write.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(0, 0))?;

        let mut current: Option<(Color, Color)> = None;
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let cell = frame.get(x, y).unwrap_or_default();
                if current != Some((cell.fg, cell.bg)) {
                    self.buf.queue(SetForegroundColor(cell.fg))?;
                    self.buf.queue(SetBackgroundColor(cell.bg))?;
                    current = Some((cell.fg, cell.bg));
                }
                self.buf.queue(Print(cell.ch))?;
            }
            if y + 1 < frame.height() {
                self.buf.queue(Print("\r\n"))?;
            }
        }

        self.buf.queue(ResetColor)?;
        self.flush_buf()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
