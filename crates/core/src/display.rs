//! Display driver - the operations the binary exposes
//!
//! [`Display`] owns one sink for its whole lifetime and offers:
//!
//! - [`Display::show`]: push one frame
//! - [`Display::show_clock`]: draw the current time once
//! - [`Display::run_clock`]: redraw the time every refresh interval
//! - [`Display::show_text`]: scroll text across the display, optionally forever
//! - [`Display::show_test_pattern`]: play the 16-ring test pattern
//!
//! Any error ends the operation in progress (and any loop it belongs to) and
//! is returned unchanged. The sink is closed exactly once, either by
//! [`Display::close`] or when the driver is dropped.

use std::thread;
use std::time::Duration;

use crate::error::Result;
use crate::frame::Frame;
use crate::layout::{clock_text, layout_clock, layout_scroll_sequence};
use crate::pattern::test_pattern;
use crate::sink::{Clock, DisplaySink, SystemClock};
use crate::types::{
    SizeClass, DEFAULT_SCROLL_SPEED, MAX_SCROLL_SPEED, MIN_SCROLL_SPEED, SCROLL_STEP_MS,
    TEST_PATTERN_DELAY_MS,
};

/// Scroll speed from 1 (slow) to 10 (fast).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSpeed(u8);

impl ScrollSpeed {
    /// `None` when `speed` is outside 1..=10.
    pub fn new(speed: u8) -> Option<Self> {
        (MIN_SCROLL_SPEED..=MAX_SCROLL_SPEED)
            .contains(&speed)
            .then_some(Self(speed))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Pause between scroll frames: 100ms at speed 1 down to 10ms at speed 10.
    ///
    /// Deliberately not `speed × 10ms`, which would make 10 the slowest and
    /// contradict the `--scroll-speed` help text ("1 is slow, 10 is fast").
    pub fn interval(&self) -> Duration {
        let steps = u64::from(MAX_SCROLL_SPEED + 1 - self.0);
        Duration::from_millis(steps * SCROLL_STEP_MS)
    }
}

impl Default for ScrollSpeed {
    fn default() -> Self {
        Self(DEFAULT_SCROLL_SPEED)
    }
}

pub struct Display<S: DisplaySink, C: Clock = SystemClock> {
    sink: S,
    clock: C,
    closed: bool,
}

impl<S: DisplaySink> Display<S> {
    pub fn new(sink: S) -> Self {
        Self::with_clock(sink, SystemClock)
    }
}

impl<S: DisplaySink, C: Clock> Display<S, C> {
    pub fn with_clock(sink: S, clock: C) -> Self {
        Self {
            sink,
            clock,
            closed: false,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn show(&mut self, frame: &Frame) -> Result<()> {
        self.sink.show(frame)
    }

    /// Show each frame, pausing `interval` between them.
    ///
    /// Stops at the first error. Loops for as long as `frames` keeps yielding.
    pub fn show_frames<I>(&mut self, frames: I, interval: Duration) -> Result<usize>
    where
        I: IntoIterator<Item = Frame>,
    {
        let mut shown = 0;
        for frame in frames {
            if shown > 0 && !interval.is_zero() {
                thread::sleep(interval);
            }
            self.sink.show(&frame)?;
            shown += 1;
        }
        Ok(shown)
    }

    pub fn show_test_pattern(&mut self) -> Result<()> {
        log::debug!("Running test pattern...");
        let delay = Duration::from_millis(TEST_PATTERN_DELAY_MS);
        self.show_frames(test_pattern(), delay)?;
        Ok(())
    }

    /// Draw the current time once.
    pub fn show_clock(&mut self) -> Result<()> {
        let now = self.clock.now();
        let frame = layout_clock(&now)?;
        log::debug!("Displaying time: {}", clock_text(&now));
        self.sink.show(&frame)
    }

    /// Redraw the time, then wait `refresh`, until `keep_going` says stop.
    ///
    /// `keep_going` is asked after every successful redraw. An error stops
    /// the loop.
    pub fn run_clock<F>(&mut self, refresh: Duration, mut keep_going: F) -> Result<()>
    where
        F: FnMut() -> bool,
    {
        loop {
            self.show_clock()?;
            if !keep_going() {
                return Ok(());
            }
            thread::sleep(refresh);
        }
    }

    /// Scroll `text` from right to left.
    ///
    /// With `looping` set this only returns on error.
    pub fn show_text(
        &mut self,
        text: &str,
        interval: Duration,
        looping: bool,
        size: SizeClass,
    ) -> Result<()> {
        let stream = layout_scroll_sequence(text, size)?;
        let frames = if looping {
            stream.looping_frames()
        } else {
            stream.frames()
        };
        self.show_frames(frames, interval)?;
        Ok(())
    }

    /// Close the sink. Later calls do nothing.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        log::debug!("closing display");
        self.sink.close()
    }
}

impl<S: DisplaySink, C: Clock> Drop for Display<S, C> {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            log::warn!("failed to close display: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{DISPLAY_COLUMNS, TEST_PATTERN_FRAMES};
    use chrono::NaiveTime;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Frame>,
        closes: usize,
        fail_after: Option<usize>,
    }

    impl DisplaySink for Recorder {
        fn show(&mut self, frame: &Frame) -> Result<()> {
            if self.fail_after == Some(self.frames.len()) {
                return Err(Error::Transport {
                    source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "unplugged"),
                });
            }
            self.frames.push(*frame);
            Ok(())
        }

        fn close(&mut self) -> Result<()> {
            self.closes += 1;
            Ok(())
        }
    }

    fn nine_oh_five() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 5, 0).unwrap()
    }

    #[test]
    fn scroll_speed_bounds_and_intervals() {
        assert!(ScrollSpeed::new(0).is_none());
        assert!(ScrollSpeed::new(11).is_none());
        assert_eq!(ScrollSpeed::new(1).unwrap().interval(), Duration::from_millis(100));
        assert_eq!(ScrollSpeed::new(10).unwrap().interval(), Duration::from_millis(10));
        assert_eq!(ScrollSpeed::default().get(), 5);
    }

    #[test]
    fn show_clock_sends_one_frame_with_border() {
        let mut display = Display::with_clock(Recorder::default(), nine_oh_five());
        display.show_clock().unwrap();

        let frames = &display.sink().frames;
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].columns()[0], 0);
        assert!(frames[0].columns()[1..].iter().any(|&c| c != 0));
    }

    #[test]
    fn run_clock_stops_when_asked() {
        let mut display = Display::with_clock(Recorder::default(), nine_oh_five());
        let mut ticks = 0;
        display
            .run_clock(Duration::ZERO, || {
                ticks += 1;
                ticks < 3
            })
            .unwrap();
        assert_eq!(display.sink().frames.len(), 3);
    }

    #[test]
    fn run_clock_stops_on_error() {
        let sink = Recorder {
            fail_after: Some(1),
            ..Recorder::default()
        };
        let mut display = Display::with_clock(sink, nine_oh_five());
        let err = display.run_clock(Duration::ZERO, || true).unwrap_err();
        assert!(err.is_transport());
        assert_eq!(display.sink().frames.len(), 1);
    }

    #[test]
    fn test_pattern_sends_sixteen_distinct_frames() {
        let mut display = Display::new(Recorder::default());
        display.show_test_pattern().unwrap();

        let frames = &display.sink().frames;
        assert_eq!(frames.len(), TEST_PATTERN_FRAMES);
        for pair in frames.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn show_text_scrolls_every_window() {
        let mut display = Display::new(Recorder::default());
        display
            .show_text("Hi", Duration::ZERO, false, SizeClass::Small)
            .unwrap();

        let frames = &display.sink().frames;
        let expected = layout_scroll_sequence("Hi", SizeClass::Small)
            .unwrap()
            .frame_count();
        assert_eq!(frames.len(), expected);
        for pair in frames.windows(2) {
            assert_eq!(
                &pair[1].columns()[..DISPLAY_COLUMNS - 1],
                &pair[0].columns()[1..]
            );
        }
    }

    #[test]
    fn show_text_rejects_unsupported_characters_before_showing() {
        let mut display = Display::new(Recorder::default());
        let err = display
            .show_text("🚀", Duration::ZERO, false, SizeClass::Small)
            .unwrap_err();
        assert!(matches!(err, Error::GlyphNotFound { .. }));
        assert!(display.sink().frames.is_empty());
    }

    #[test]
    fn looping_text_ends_only_on_error() {
        let sink = Recorder {
            fail_after: Some(500),
            ..Recorder::default()
        };
        let mut display = Display::new(sink);
        let err = display
            .show_text("A", Duration::ZERO, true, SizeClass::Large)
            .unwrap_err();
        assert!(err.is_transport());
        assert_eq!(display.sink().frames.len(), 500);
    }

    #[test]
    fn close_is_idempotent() {
        let mut display = Display::new(Recorder::default());
        display.close().unwrap();
        display.close().unwrap();
        assert!(display.is_closed());
        assert_eq!(display.sink().closes, 1);
    }

    #[test]
    fn drop_closes_the_sink() {
        let mut recorder = Recorder::default();
        {
            let mut display = Display::new(&mut recorder);
            display.show(&Frame::blank()).unwrap();
        }
        assert_eq!(recorder.closes, 1);
        assert_eq!(recorder.frames.len(), 1);
    }
}
