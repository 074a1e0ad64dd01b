//! Byte transports.
//!
//! The sink only needs "write these bytes" and "let go". [`DeviceTransport`]
//! owns the line settings: the port is opened raw at the configured baud
//! rate, 8N1, no flow control, so payload bytes reach the boards untouched.

use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, StopBits};

use crate::config::SerialConfig;

/// How long a single write may block before the port reports a timeout.
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(1);

pub trait Transport {
    /// Write all of `bytes` as one contiguous write.
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;

    fn close(&mut self) -> io::Result<()>;
}

/// In-memory transport; collects everything written.
impl Transport for Vec<u8> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Open `path` as a raw 8N1 serial line at `baud_rate`.
pub fn open_port(path: &str, baud_rate: u32) -> io::Result<Box<dyn serialport::SerialPort>> {
    let port = serialport::new(path, baud_rate)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .flow_control(FlowControl::None)
        .timeout(WRITE_TIMEOUT)
        .open()?;
    Ok(port)
}

/// A configured serial port.
pub struct DeviceTransport {
    port: String,
    line: Option<Box<dyn Write + Send>>,
}

impl DeviceTransport {
    pub fn open(config: &SerialConfig) -> io::Result<Self> {
        Self::open_with(config, open_port)
    }

    /// Open through `opener`, which receives the port path and baud rate.
    pub fn open_with<P, F>(config: &SerialConfig, opener: F) -> io::Result<Self>
    where
        P: Write + Send + 'static,
        F: FnOnce(&str, u32) -> io::Result<P>,
    {
        let line = opener(&config.port, config.baud_rate)?;
        log::info!("opened {} at {} baud, 8N1", config.port, config.baud_rate);
        Ok(Self {
            port: config.port.clone(),
            line: Some(Box::new(line)),
        })
    }

    pub fn is_open(&self) -> bool {
        self.line.is_some()
    }
}

impl fmt::Debug for DeviceTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceTransport")
            .field("port", &self.port)
            .field("open", &self.is_open())
            .finish()
    }
}

impl Transport for DeviceTransport {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        let line = self.line.as_mut().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotConnected, "serial port already closed")
        })?;
        line.write_all(bytes)?;
        line.flush()
    }

    fn close(&mut self) -> io::Result<()> {
        match self.line.take() {
            Some(mut line) => {
                log::debug!("closing {}", self.port);
                line.flush()
            }
            None => Ok(()),
        }
    }
}
