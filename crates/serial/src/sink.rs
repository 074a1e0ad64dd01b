//! Sink that encodes frames and writes them to a transport.

use snafu::ResultExt;

use crate::config::SerialConfig;
use crate::core::error::TransportSnafu;
use crate::core::{protocol, DisplaySink, Frame, Result};
use crate::transport::{DeviceTransport, Transport};
use crate::types::PANEL_ADDRESSES;

/// Writes both unit packets for every frame, top unit first.
///
/// Each `show` is a complete request; nothing is buffered between frames.
/// If the second write fails the top half already shows the new frame and
/// the bottom half the old one.
#[derive(Debug)]
pub struct SerialSink<T: Transport = DeviceTransport> {
    transport: T,
}

impl SerialSink<DeviceTransport> {
    pub fn open(config: &SerialConfig) -> Result<Self> {
        let transport = DeviceTransport::open(config).context(TransportSnafu)?;
        Ok(Self::new(transport))
    }
}

impl<T: Transport> SerialSink<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> DisplaySink for SerialSink<T> {
    fn show(&mut self, frame: &Frame) -> Result<()> {
        for (address, packet) in PANEL_ADDRESSES.iter().zip(protocol::frame_packets(frame)) {
            log::trace!("writing {} bytes to unit {address:#04x}", packet.len());
            self.transport.write(&packet).context(TransportSnafu)?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.transport.close().context(TransportSnafu)
    }
}
