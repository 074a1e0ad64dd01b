//! The two concrete sinks behind one type.

use crate::config::RunConfig;
use crate::core::{DisplaySink, Frame, Result};
use crate::serial::SerialSink;
use crate::term::TerminalSink;

pub enum Output {
    /// The real panel on a serial port.
    Serial(SerialSink),
    /// A drawing of the panel on stdout.
    Terminal(TerminalSink),
}

impl Output {
    /// Open whichever output `config` asks for.
    pub fn open(config: &RunConfig) -> Result<Self> {
        if config.terminal {
            log::debug!("using terminal output");
            return Ok(Output::Terminal(TerminalSink::stdout()));
        }
        Ok(Output::Serial(SerialSink::open(&config.serial)?))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Output::Terminal(_))
    }
}

impl DisplaySink for Output {
    fn show(&mut self, frame: &Frame) -> Result<()> {
        match self {
            Output::Serial(sink) => sink.show(frame),
            Output::Terminal(sink) => sink.show(frame),
        }
    }

    fn close(&mut self) -> Result<()> {
        match self {
            Output::Serial(sink) => sink.close(),
            Output::Terminal(sink) => sink.close(),
        }
    }
}
