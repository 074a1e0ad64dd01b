use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use flipdot_clock::core::layout::layout_scroll_sequence;
use flipdot_clock::core::pattern::ring_frame;
use flipdot_clock::core::protocol::frame_packets;
use flipdot_clock::types::SizeClass;

fn bench_frame_packets(c: &mut Criterion) {
    let frame = ring_frame(5);
    c.bench_function("frame_packets", |b| {
        b.iter(|| frame_packets(black_box(&frame)))
    });
}

fn bench_scroll_pass(c: &mut Criterion) {
    c.bench_function("scroll_pass_large", |b| {
        b.iter(|| {
            let stream =
                layout_scroll_sequence(black_box("HELLO WORLD"), SizeClass::Large).unwrap();
            stream.frames().map(|f| frame_packets(&f)[1][3]).fold(0u8, |a, x| a ^ x)
        })
    });
}

criterion_group!(benches, bench_frame_packets, bench_scroll_pass);
criterion_main!(benches);
