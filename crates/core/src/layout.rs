//! Text layout - turns strings into column streams and frames
//!
//! Every character contributes its glyph columns followed by one blank gap
//! column. Two consumers sit on top of that:
//!
//! - [`layout_clock`]: `HH:MM` in the small font, left aligned behind a one
//!   column border, in a single frame
//! - [`layout_scroll_sequence`]: a [`ColumnStream`] with a full blank screen in
//!   front and one blank column behind, which [`ScrollFrames`] slides across
//!   the display one column per frame (content moves right to left)

use arrayvec::ArrayVec;
use chrono::Timelike;

use crate::error::Result;
use crate::font;
use crate::frame::Frame;
use crate::types::{Column, SizeClass, DISPLAY_COLUMNS};

/// Glyph columns with a one-column gap after every character.
pub fn layout_text(text: &str, size: SizeClass) -> Result<Vec<Column>> {
    let mut columns = Vec::with_capacity(text.len() * (size.width() + 1));
    for ch in text.chars() {
        columns.extend_from_slice(font::lookup(ch, size)?);
        columns.push(0);
    }
    Ok(columns)
}

/// `HH:MM` of `time` (24 hour, zero padded).
pub fn clock_text<T: Timelike>(time: &T) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Render `time` as a single frame.
///
/// Layout is one blank border column, then each character of `HH:MM` in the
/// small font with its gap column; whatever is left on the right stays blank.
pub fn layout_clock<T: Timelike>(time: &T) -> Result<Frame> {
    let text = clock_text(time);
    let mut columns: ArrayVec<Column, DISPLAY_COLUMNS> = ArrayVec::new();
    columns.push(0);

    'chars: for ch in text.chars() {
        let glyph = font::lookup(ch, SizeClass::Small)?;
        for &col in glyph.iter().chain(std::iter::once(&0)) {
            if columns.try_push(col).is_err() {
                log::warn!("clock text {text:?} wider than the display, truncated");
                break 'chars;
            }
        }
    }

    Ok(Frame::from_window(&columns, 0))
}

/// Columns to slide across the display for one pass of scrolling text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnStream {
    columns: Vec<Column>,
}

impl ColumnStream {
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Frames in one pass: `len - 28 + 1`, and at least one.
    pub fn frame_count(&self) -> usize {
        self.last_start() + 1
    }

    /// Frame `index` of the pass (window starting at column `index`).
    pub fn frame(&self, index: usize) -> Frame {
        Frame::from_window(&self.columns, index)
    }

    /// One pass over the stream.
    pub fn frames(self) -> ScrollFrames {
        ScrollFrames::new(self, false)
    }

    /// The pass repeated until the caller stops pulling.
    pub fn looping_frames(self) -> ScrollFrames {
        ScrollFrames::new(self, true)
    }

    fn last_start(&self) -> usize {
        self.columns.len().saturating_sub(DISPLAY_COLUMNS)
    }
}

/// Blank screen, then `text`, then one blank column.
pub fn layout_scroll_sequence(text: &str, size: SizeClass) -> Result<ColumnStream> {
    let glyphs = layout_text(text, size)?;

    let mut columns = Vec::with_capacity(DISPLAY_COLUMNS + glyphs.len() + 1);
    columns.resize(DISPLAY_COLUMNS, 0);
    columns.extend_from_slice(&glyphs);
    columns.push(0);

    log::debug!(
        "laid out {:?} in {size}: {} columns, {} frames",
        text,
        columns.len(),
        columns.len() - DISPLAY_COLUMNS + 1
    );
    Ok(ColumnStream::from_columns(columns))
}

/// [`layout_scroll_sequence`] with the size given by name.
///
/// The name is checked before any glyph is looked up.
pub fn layout_scroll_sequence_named(text: &str, size: &str) -> Result<ColumnStream> {
    let size = font::parse_size_class(size)?;
    layout_scroll_sequence(text, size)
}

/// Sliding 28-column window over a [`ColumnStream`].
///
/// Frame `i` shows `stream[i..i + 28]`. A one-shot iterator ends after the
/// window reaches the end of the stream; a looping one starts over at 0.
#[derive(Debug, Clone)]
pub struct ScrollFrames {
    stream: ColumnStream,
    position: usize,
    looping: bool,
}

impl ScrollFrames {
    pub fn new(stream: ColumnStream, looping: bool) -> Self {
        Self {
            stream,
            position: 0,
            looping,
        }
    }
}

impl Iterator for ScrollFrames {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.position > self.stream.last_start() {
            if !self.looping {
                return None;
            }
            self.position = 0;
        }
        let frame = self.stream.frame(self.position);
        self.position += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.looping {
            return (usize::MAX, None);
        }
        let remaining = self.stream.frame_count().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}
