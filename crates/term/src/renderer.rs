//! TerminalRenderer: draws frames as a dot grid with crossterm.
//!
//! The first draw clears the screen and paints the whole grid. After that
//! only the discs that flipped since the last frame are repainted, the way
//! the real panel only moves the dots whose bits changed.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::Frame;
use crate::dot_view::{self, GRID_HEIGHT};
use crate::types::{DISPLAY_COLUMNS, DISPLAY_ROWS};

const DOT_COLOR: Color = Color::Yellow;
const BORDER_COLOR: Color = Color::DarkGrey;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    shown: Option<Frame>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out, shown: None }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn enter(&mut self) -> Result<()> {
        self.out.queue(cursor::Hide)?;
        self.out.flush()?;
        Ok(())
    }

    /// Put the cursor back, below the grid if one was drawn.
    pub fn exit(&mut self) -> Result<()> {
        self.out.queue(ResetColor)?;
        if self.shown.is_some() {
            self.out.queue(cursor::MoveTo(0, GRID_HEIGHT))?;
        }
        self.out.queue(cursor::Show)?;
        self.out.queue(Print("\r\n"))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        match self.shown {
            Some(prev) if prev == *frame => return Ok(()),
            Some(prev) => self.paint_flipped(&prev, frame)?,
            None => self.paint_all(frame)?,
        }
        self.out.flush()?;
        self.shown = Some(*frame);
        Ok(())
    }

    fn paint_all(&mut self, frame: &Frame) -> Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.queue(Print(dot_view::HEADER))?;

        let bottom = GRID_HEIGHT - 1;
        self.out.queue(cursor::MoveTo(0, 1))?;
        self.out.queue(SetForegroundColor(BORDER_COLOR))?;
        self.out.queue(Print(dot_view::border_line('┌', '┐')))?;
        for row in 0..DISPLAY_ROWS {
            let (_, y) = dot_view::dot_position(0, row);
            self.out.queue(cursor::MoveTo(0, y))?;
            self.out.queue(SetForegroundColor(BORDER_COLOR))?;
            self.out.queue(Print('│'))?;
            self.out.queue(SetForegroundColor(DOT_COLOR))?;
            self.out.queue(Print(dot_view::dot_row(frame, row)))?;
            self.out.queue(SetForegroundColor(BORDER_COLOR))?;
            self.out.queue(Print('│'))?;
        }
        self.out.queue(cursor::MoveTo(0, bottom))?;
        self.out.queue(Print(dot_view::border_line('└', '┘')))?;
        self.out.queue(ResetColor)?;
        Ok(())
    }

    fn paint_flipped(&mut self, prev: &Frame, next: &Frame) -> Result<()> {
        self.out.queue(SetForegroundColor(DOT_COLOR))?;
        for col in 0..DISPLAY_COLUMNS {
            let now = next.columns()[col];
            let flipped = prev.columns()[col] ^ now;
            for row in (0..DISPLAY_ROWS).filter(|row| flipped & (1 << row) != 0) {
                let (x, y) = dot_view::dot_position(col, row);
                self.out.queue(cursor::MoveTo(x, y))?;
                self.out.queue(Print(dot_view::dot_char(now & (1 << row) != 0)))?;
            }
        }
        self.out.queue(ResetColor)?;
        Ok(())
    }
}
