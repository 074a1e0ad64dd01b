//! Core types module - display geometry, wire constants and timing defaults
//!
//! Everything here is plain data with no dependencies so it can be shared by
//! the layout engine, the protocol encoder and both output sinks.
//!
//! # Display Geometry
//!
//! The Alfa-Zeta XY5 panel used here is two 7x28 units stacked into one
//! logical 14x28 surface:
//!
//! - **Width**: 28 columns (indexed 0-27)
//! - **Height**: 14 rows (indexed 0-13, row 0 at the top)
//! - **Column value**: bit `r` of a column is the dot in row `r`
//!
//! # Wire Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_START` | 0x80 | First byte of every packet |
//! | `REFRESH_MODE` | 0x83 | Update dots as the payload arrives |
//! | `FRAME_END` | 0x8F | Last byte of every packet |
//! | `PANEL_ADDRESSES` | 0x01, 0x02 | DIP switch #1 positions 0-5 on each unit |
//!
//! # Timing Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TEST_PATTERN_DELAY_MS` | 50 | Pause between test pattern rings |
//! | `CLOCK_REFRESH_MS` | 60000 | Clock redraw interval |
//! | `DEFAULT_SCROLL_SPEED` | 5 | Middle of the 1..=10 range |
//!
//! # Examples
//!
//! ```
//! use flipdot_types::{SizeClass, DISPLAY_COLUMNS, DISPLAY_ROWS};
//!
//! assert_eq!(SizeClass::from_str("5x8"), Some(SizeClass::Small));
//! assert_eq!(SizeClass::from_str("LARGE"), Some(SizeClass::Large));
//! assert_eq!(SizeClass::from_str("huge"), None);
//!
//! assert_eq!(DISPLAY_COLUMNS, 28);
//! assert_eq!(DISPLAY_ROWS, 14);
//! ```

/// Display width in columns (28)
pub const DISPLAY_COLUMNS: usize = 28;

/// Display height in rows (14)
pub const DISPLAY_ROWS: usize = 14;

/// Rows driven by one physical unit (7)
pub const PANEL_ROWS: usize = 7;

/// Number of independently addressed units
pub const PANEL_COUNT: usize = 2;

/// One column of the logical display, bit `r` = row `r`.
pub type Column = u16;

/// Bits of a [`Column`] that map to real dots.
pub const COLUMN_MASK: Column = (1 << DISPLAY_ROWS) - 1;

/// Bits of a column that one unit can show.
pub const PANEL_MASK: u8 = (1 << PANEL_ROWS) - 1;

/// Packet start byte.
pub const FRAME_START: u8 = 0x80;

/// Refresh mode: the unit flips dots as the payload is received.
pub const REFRESH_MODE: u8 = 0x83;

/// Packet end byte.
pub const FRAME_END: u8 = 0x8F;

/// Unit addresses, in transmission order.
///
/// These must match DIP switch #1 positions 0-5 on each controller board.
pub const PANEL_ADDRESSES: [u8; PANEL_COUNT] = [0x01, 0x02];

/// Full packet length: start, mode, address, 28 payload bytes, end.
pub const PACKET_LEN: usize = 3 + DISPLAY_COLUMNS + 1;

/// Number of rings in the test pattern
pub const TEST_PATTERN_FRAMES: usize = 16;

/// Pause between test pattern frames (50ms)
pub const TEST_PATTERN_DELAY_MS: u64 = 50;

/// Clock redraw interval (one minute)
pub const CLOCK_REFRESH_MS: u64 = 60_000;

/// Slowest scroll speed
pub const MIN_SCROLL_SPEED: u8 = 1;

/// Fastest scroll speed
pub const MAX_SCROLL_SPEED: u8 = 10;

/// Scroll speed used when none is given
pub const DEFAULT_SCROLL_SPEED: u8 = 5;

/// Milliseconds added to the scroll interval per step below the maximum speed
pub const SCROLL_STEP_MS: u64 = 10;

/// Default serial device
pub const DEFAULT_SERIAL_PORT: &str = "/dev/ttyS0";

/// Default line speed of the controller boards
pub const DEFAULT_BAUD_RATE: u32 = 57_600;


/// Font size classes
///
/// - **Small**: 5 columns wide, 8 rows, upper and lower case
/// - **Large**: 9 columns wide, 9 rows, upper case only (lower case is folded)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Small,
    Large,
}

impl SizeClass {
    /// Parse a size class name (case-insensitive)
    ///
    /// Accepts the descriptive names and the dimension names used on the
    /// command line.
    ///
    /// # Examples
    ///
    /// ```
    /// use flipdot_types::SizeClass;
    ///
    /// assert_eq!(SizeClass::from_str("small"), Some(SizeClass::Small));
    /// assert_eq!(SizeClass::from_str("14x9"), Some(SizeClass::Large));
    /// assert_eq!(SizeClass::from_str("invalid-size"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "small" | "5x8" => Some(SizeClass::Small),
            "large" | "14x9" => Some(SizeClass::Large),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Large => "large",
        }
    }

    /// Rows used by glyphs of this class
    pub fn rows(&self) -> usize {
        match self {
            SizeClass::Small => 8,
            SizeClass::Large => 9,
        }
    }

    /// Typical glyph width in columns
    pub fn width(&self) -> usize {
        match self {
            SizeClass::Small => 5,
            SizeClass::Large => 9,
        }
    }

    /// Whether lower case input is looked up as upper case
    pub fn folds_lowercase(&self) -> bool {
        matches!(self, SizeClass::Large)
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
