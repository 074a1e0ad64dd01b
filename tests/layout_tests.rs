//! Layout tests - clock face, glyph lookup and scrolling windows

use chrono::NaiveTime;

use flipdot_clock::core::font::{lookup, lookup_named};
use flipdot_clock::core::layout::{
    layout_clock, layout_scroll_sequence, layout_scroll_sequence_named,
};
use flipdot_clock::core::{Error, Frame};
use flipdot_clock::types::{SizeClass, DISPLAY_COLUMNS};

#[test]
fn test_clock_at_0905_has_border_and_glyphs() {
    let time = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
    let frame = layout_clock(&time).unwrap();
    assert_eq!(frame.columns()[0], 0);
    assert!(frame.columns()[1..].iter().any(|&c| c != 0));
}

#[test]
fn test_clock_changes_with_minute() {
    let a = layout_clock(&NaiveTime::from_hms_opt(12, 0, 0).unwrap()).unwrap();
    let b = layout_clock(&NaiveTime::from_hms_opt(12, 1, 0).unwrap()).unwrap();
    let c = layout_clock(&NaiveTime::from_hms_opt(12, 1, 59).unwrap()).unwrap();
    assert_ne!(a, b);
    assert_eq!(b, c);
}

#[test]
fn test_hi_stream_length() {
    let stream = layout_scroll_sequence("Hi", SizeClass::Small).unwrap();
    let h = lookup('H', SizeClass::Small).unwrap().len();
    let i = lookup('i', SizeClass::Small).unwrap().len();
    assert_eq!(stream.len(), DISPLAY_COLUMNS + (h + 1) + (i + 1) + 1);
}

#[test]
fn test_hi_frames_shift_left_one_column_each() {
    let stream = layout_scroll_sequence("Hi", SizeClass::Small).unwrap();
    let length = stream.len();
    let frames: Vec<Frame> = stream.frames().collect();
    assert_eq!(frames.len(), length - DISPLAY_COLUMNS + 1);

    for i in 1..frames.len() {
        for c in 0..DISPLAY_COLUMNS - 1 {
            assert_eq!(frames[i].columns()[c], frames[i - 1].columns()[c + 1]);
        }
    }
}

#[test]
fn test_text_enters_from_the_right() {
    let stream = layout_scroll_sequence("H", SizeClass::Small).unwrap();
    let h = lookup('H', SizeClass::Small).unwrap();
    let frames: Vec<Frame> = stream.frames().collect();

    assert!(frames[0].is_blank());
    assert_eq!(frames[1].columns()[DISPLAY_COLUMNS - 1], h[0]);
}

#[test]
fn test_large_a_is_nine_columns_plus_gap() {
    let stream = layout_scroll_sequence("A", SizeClass::Large).unwrap();
    assert_eq!(stream.len(), DISPLAY_COLUMNS + 10 + 1);
}

#[test]
fn test_rocket_and_invalid_size_fail_cleanly() {
    assert!(matches!(
        lookup('🚀', SizeClass::Small),
        Err(Error::GlyphNotFound { character: '🚀', .. })
    ));
    assert!(matches!(
        lookup_named('A', "invalid-size"),
        Err(Error::InvalidSizeClass { .. })
    ));
    assert!(matches!(
        layout_scroll_sequence_named("Hi", "invalid"),
        Err(Error::InvalidSizeClass { .. })
    ));
}

#[test]
fn test_looping_restarts_after_last_window() {
    let stream = layout_scroll_sequence("Hi", SizeClass::Small).unwrap();
    let count = stream.frame_count();
    let mut frames = stream.looping_frames();
    let first = frames.next().unwrap();
    let after_pass = frames.nth(count - 1).unwrap();
    assert_eq!(first, after_pass);
}
