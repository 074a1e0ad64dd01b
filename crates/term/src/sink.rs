//! Terminal sink: draws frames instead of sending them to hardware.

use std::io::{self, Write};

use crate::core::{DisplaySink, Frame, Result};
use crate::renderer::TerminalRenderer;

/// Development stand-in for the serial sink.
///
/// Showing a frame never fails: terminal write errors are logged and the
/// frame is skipped.
pub struct TerminalSink<W: Write = io::Stdout> {
    renderer: TerminalRenderer<W>,
    entered: bool,
}

impl TerminalSink {
    pub fn stdout() -> Self {
        Self::new(TerminalRenderer::new())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(renderer: TerminalRenderer<W>) -> Self {
        Self {
            renderer,
            entered: false,
        }
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    fn draw(&mut self, frame: &Frame) -> anyhow::Result<()> {
        if !self.entered {
            self.renderer.enter()?;
            self.entered = true;
        }
        self.renderer.draw(frame)
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn show(&mut self, frame: &Frame) -> Result<()> {
        if let Err(err) = self.draw(frame) {
            log::warn!("terminal draw failed: {err:#}");
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.entered {
            self.entered = false;
            if let Err(err) = self.renderer.exit() {
                log::warn!("failed to restore terminal: {err:#}");
            }
        }
        Ok(())
    }
}
