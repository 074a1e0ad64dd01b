//! Display driver tests over real sinks with in-memory backends

use std::io;
use std::time::Duration;

use chrono::NaiveTime;

use flipdot_clock::core::{Display, DisplaySink, Error, Frame, Result};
use flipdot_clock::serial::{SerialSink, Transport};
use flipdot_clock::term::{TerminalRenderer, TerminalSink};
use flipdot_clock::types::{SizeClass, PACKET_LEN, TEST_PATTERN_FRAMES};

/// Transport that counts writes and closes, and can fail the n-th write.
#[derive(Default)]
struct CountingTransport {
    writes: usize,
    closes: usize,
    fail_on: Option<usize>,
}

impl Transport for CountingTransport {
    fn write(&mut self, _bytes: &[u8]) -> io::Result<()> {
        if self.fail_on == Some(self.writes) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "cable pulled"));
        }
        self.writes += 1;
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.closes += 1;
        Ok(())
    }
}

#[derive(Default)]
struct Frames(Vec<Frame>);

impl DisplaySink for Frames {
    fn show(&mut self, frame: &Frame) -> Result<()> {
        self.0.push(*frame);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

#[test]
fn test_pattern_is_sixteen_pairwise_distinct_frames() {
    let mut display = Display::new(Frames::default());
    display.show_test_pattern().unwrap();
    let frames = &display.sink().0;
    assert_eq!(frames.len(), TEST_PATTERN_FRAMES);
    for i in 0..frames.len() {
        for j in i + 1..frames.len() {
            assert_ne!(frames[i], frames[j]);
        }
    }
}

#[test]
fn test_text_over_serial_writes_two_packets_per_frame() {
    let mut display = Display::new(SerialSink::new(Vec::new()));
    display
        .show_text("Hi", Duration::from_millis(1), false, SizeClass::Small)
        .unwrap();

    let bytes = display.sink().transport().len();
    assert_eq!(bytes % (2 * PACKET_LEN), 0);
    assert!(bytes / (2 * PACKET_LEN) > 1);
}

#[test]
fn test_transport_failure_aborts_and_still_closes_once() {
    let transport = CountingTransport {
        fail_on: Some(3),
        ..CountingTransport::default()
    };
    let mut display = Display::new(SerialSink::new(transport));

    let err = display
        .show_text("Hi", Duration::ZERO, false, SizeClass::Small)
        .unwrap_err();
    assert!(matches!(err, Error::Transport { .. }));
    assert_eq!(display.sink().transport().writes, 3);

    display.close().unwrap();
    display.close().unwrap();
    assert_eq!(display.sink().transport().closes, 1);
}

#[test]
fn test_clock_on_terminal_draws_dots() {
    let sink = TerminalSink::new(TerminalRenderer::with_writer(Vec::new()));
    let time = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
    let mut display = Display::with_clock(sink, time);
    display.show_clock().unwrap();

    let out = String::from_utf8_lossy(display.sink().renderer().writer()).into_owned();
    assert!(out.contains("Flipdot Display Output:"));
    assert!(out.contains('●'));
}

#[test]
fn test_invalid_character_shows_nothing() {
    let mut display = Display::new(SerialSink::new(Vec::new()));
    let err = display
        .show_text("🚀", Duration::ZERO, false, SizeClass::Small)
        .unwrap_err();
    assert!(matches!(err, Error::GlyphNotFound { .. }));
    assert!(display.sink().transport().is_empty());
}
