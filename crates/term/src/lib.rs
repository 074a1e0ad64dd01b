//! Terminal output for development without the panel attached.
//!
//! Frames are drawn as a 14x28 grid of discs inside a box, one dot per
//! three terminal columns to keep the aspect ratio close to the real panel.
//!
//! - [`dot_view`]: grid geometry and the text of each line
//! - [`renderer`]: crossterm backend; full paint first, flipped dots after
//! - [`sink`]: [`TerminalSink`], the terminal [`DisplaySink`](flipdot_core::DisplaySink)

pub mod dot_view;
pub mod renderer;
pub mod sink;

pub use flipdot_core as core;
pub use flipdot_types as types;

pub use renderer::TerminalRenderer;
pub use sink::TerminalSink;
