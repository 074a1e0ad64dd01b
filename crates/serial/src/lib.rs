//! Serial output for the Alfa-Zeta XY5 controller boards.
//!
//! The boards listen on an RS-485 bus (typically a USB adapter) and accept
//! write-only packets; nothing is ever read back. This crate provides:
//!
//! - [`SerialConfig`]: port path and line speed, from defaults or environment
//! - [`Transport`]: the "write these bytes" capability, implemented for
//!   raw serial ports ([`DeviceTransport`]) and in-memory buffers
//! - [`SerialSink`]: a [`DisplaySink`](flipdot_core::DisplaySink) that
//!   encodes each frame and writes both unit packets
//!
//! # Environment Variables
//!
//! - `FLIPDOT_SERIAL_PORT`: device path (default: "/dev/ttyS0")
//! - `FLIPDOT_SERIAL_BAUD`: line speed (default: 57600)

pub mod config;
pub mod sink;
pub mod transport;

pub use flipdot_core as core;
pub use flipdot_types as types;

pub use config::SerialConfig;
pub use sink::SerialSink;
pub use transport::{DeviceTransport, Transport};
