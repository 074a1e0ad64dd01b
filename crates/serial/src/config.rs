//! Serial link configuration.

use crate::types::{DEFAULT_BAUD_RATE, DEFAULT_SERIAL_PORT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialConfig {
    /// Device path of the port wired to the controller boards.
    pub port: String,
    pub baud_rate: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERIAL_PORT.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }
}

impl SerialConfig {
    /// Create from environment variables, falling back to the defaults.
    ///
    /// - `FLIPDOT_SERIAL_PORT`: device path
    /// - `FLIPDOT_SERIAL_BAUD`: line speed; unparsable values are ignored
    pub fn from_env() -> Self {
        use std::env;

        let port = env::var("FLIPDOT_SERIAL_PORT")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SERIAL_PORT.to_string());

        let baud_rate = env::var("FLIPDOT_SERIAL_BAUD")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_BAUD_RATE);

        Self { port, baud_rate }
    }
}
