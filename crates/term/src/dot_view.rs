//! Geometry of the terminal drawing of a [`Frame`].
//!
//! Pure text, no I/O. Each dot takes [`DOT_WIDTH`] terminal columns with the
//! disc in the middle one:
//!
//! ```text
//! Flipdot Display Output:
//! ┌──────── … ────────┐
//! │ ●  ●       ●      │   x14 rows, row 0 first
//! └──────── … ────────┘
//! ```

use crate::core::Frame;
use crate::types::{DISPLAY_COLUMNS, DISPLAY_ROWS};

pub const HEADER: &str = "Flipdot Display Output:";

pub const DOT_WIDTH: u16 = 3;
pub const DOT_ON: char = '●';

/// Characters across the boxed grid.
pub const GRID_WIDTH: u16 = DISPLAY_COLUMNS as u16 * DOT_WIDTH + 2;
/// Lines from the header to the bottom border.
pub const GRID_HEIGHT: u16 = DISPLAY_ROWS as u16 + 3;

const FIRST_DOT_LINE: u16 = 2;

/// Terminal `(x, y)` of the disc for `(col, row)`.
pub fn dot_position(col: usize, row: usize) -> (u16, u16) {
    let x = 1 + col as u16 * DOT_WIDTH + DOT_WIDTH / 2;
    (x, FIRST_DOT_LINE + row as u16)
}

pub fn dot_char(on: bool) -> char {
    if on {
        DOT_ON
    } else {
        ' '
    }
}

pub fn border_line(left: char, right: char) -> String {
    let mut line = String::with_capacity(GRID_WIDTH as usize * 3);
    line.push(left);
    line.extend(std::iter::repeat('─').take(GRID_WIDTH as usize - 2));
    line.push(right);
    line
}

/// The dots of one display row, without the side borders.
pub fn dot_row(frame: &Frame, row: usize) -> String {
    let pad = " ".repeat(DOT_WIDTH as usize / 2);
    let tail = " ".repeat(DOT_WIDTH as usize - DOT_WIDTH as usize / 2 - 1);
    frame
        .columns()
        .iter()
        .map(|bits| format!("{pad}{}{tail}", dot_char(bits & (1 << row) != 0)))
        .collect()
}

/// Every line of the drawing, top to bottom.
pub fn lines(frame: &Frame) -> Vec<String> {
    let mut out = Vec::with_capacity(GRID_HEIGHT as usize);
    out.push(HEADER.to_string());
    out.push(border_line('┌', '┐'));
    out.extend((0..DISPLAY_ROWS).map(|row| format!("│{}│", dot_row(frame, row))));
    out.push(border_line('└', '┘'));
    out
}
