//! Expanding ring test pattern.
//!
//! Frame `i` lights every dot whose distance from the display centre
//! (13.5, 6.5) rounds down to `i`. Useful for spotting stuck dots and for
//! checking that both units are addressed the right way round.

use crate::frame::Frame;
use crate::types::{Column, DISPLAY_COLUMNS, DISPLAY_ROWS, TEST_PATTERN_FRAMES};

const CENTER_X: f64 = (DISPLAY_COLUMNS as f64 - 1.0) / 2.0;
const CENTER_Y: f64 = (DISPLAY_ROWS as f64 - 1.0) / 2.0;

/// Ring `ring` of the pattern.
pub fn ring_frame(ring: usize) -> Frame {
    let mut columns = [0; DISPLAY_COLUMNS];
    for (col, value) in columns.iter_mut().enumerate() {
        let mut bits: Column = 0;
        for row in 0..DISPLAY_ROWS {
            let dx = col as f64 - CENTER_X;
            let dy = row as f64 - CENTER_Y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance as usize == ring {
                bits |= 1 << row;
            }
        }
        *value = bits;
    }
    Frame::from_columns(columns)
}

/// All rings, innermost first.
pub fn test_pattern() -> impl Iterator<Item = Frame> {
    (0..TEST_PATTERN_FRAMES).map(ring_frame)
}
