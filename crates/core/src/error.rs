//! Error taxonomy shared by layout, encoding and the sinks.

use std::fmt;

use snafu::Snafu;

use crate::types::SizeClass;

/// Which coordinate of a dot address was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Column,
    Row,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Column => f.write_str("column"),
            Axis::Row => f.write_str("row"),
        }
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// No glyph is authored for this character in this size.
    #[snafu(display("character '{character}' in size '{size}' not found"))]
    GlyphNotFound { character: char, size: SizeClass },

    #[snafu(display("size '{name}' not supported, must be 'small' or 'large'"))]
    InvalidSizeClass { name: String },

    #[snafu(display("{axis} {index} out of range (0..{limit})"))]
    OutOfRange {
        axis: Axis,
        index: usize,
        limit: usize,
    },

    /// Writing to or closing the transport failed. Never retried.
    #[snafu(display("transport error: {source}"))]
    Transport { source: std::io::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// True for errors raised by the transport rather than by layout.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }
}
