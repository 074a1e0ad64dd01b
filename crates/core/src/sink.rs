//! Capabilities the driver is written against.

use chrono::{Local, NaiveTime};

use crate::error::Result;
use crate::frame::Frame;

/// Somewhere frames can be shown.
///
/// Implemented by the serial sink (real hardware) and the terminal sink
/// (development). `close` releases whatever the sink holds; the driver calls
/// it exactly once.
pub trait DisplaySink {
    /// Show one complete frame. Blocks until it is written.
    fn show(&mut self, frame: &Frame) -> Result<()>;

    fn close(&mut self) -> Result<()>;
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn show(&mut self, frame: &Frame) -> Result<()> {
        (**self).show(frame)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn show(&mut self, frame: &Frame) -> Result<()> {
        (**self).show(frame)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

/// Wall clock source for the clock face.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// Local time of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A fixed time is a clock that never moves.
impl Clock for NaiveTime {
    fn now(&self) -> NaiveTime {
        *self
    }
}
