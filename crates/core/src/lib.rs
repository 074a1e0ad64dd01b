//! Core display pipeline - pure layout and encoding plus the driver
//!
//! Nothing in this crate touches a real device; sinks are plugged in through
//! [`DisplaySink`]. The pieces, leaves first:
//!
//! - [`frame`]: the logical 14x28 bitmap ([`Frame`])
//! - [`font`]: glyph tables for the small (5x8) and large (9x9) sizes
//! - [`layout`]: clock face, text columns and the scrolling window iterator
//! - [`pattern`]: expanding ring test pattern
//! - [`protocol`]: split a frame across the two units and wrap it in packets
//! - [`sink`]: the [`DisplaySink`] and [`Clock`] capabilities
//! - [`display`]: [`Display`], the operations the binary exposes
//!
//! # Example
//!
//! ```
//! use flipdot_core::{layout, protocol, types::SizeClass};
//!
//! let stream = layout::layout_scroll_sequence("Hi", SizeClass::Small).unwrap();
//! for frame in stream.frames() {
//!     let [top, bottom] = protocol::frame_packets(&frame);
//!     assert_eq!(top[2], 0x01);
//!     assert_eq!(bottom[2], 0x02);
//! }
//! ```

pub mod display;
pub mod error;
pub mod font;
pub mod frame;
pub mod layout;
pub mod pattern;
pub mod protocol;
pub mod sink;

pub use flipdot_types as types;

pub use display::{Display, ScrollSpeed};
pub use error::{Axis, Error, Result};
pub use frame::Frame;
pub use layout::{layout_clock, layout_scroll_sequence, ColumnStream, ScrollFrames};
pub use protocol::{encode, frame_packets, Packet, PhysicalFrame};
pub use sink::{Clock, DisplaySink, SystemClock};
