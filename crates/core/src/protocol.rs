//! XY5 wire encoding
//!
//! A logical 14-row column is split across the two 7-row units:
//!
//! | Unit | Address | Column bits | Byte |
//! |------|---------|-------------|------|
//! | top | 0x01 | 0-6 | `v & 0x7F` |
//! | bottom | 0x02 | 7-13 | `(v >> 7) & 0x7F` |
//!
//! Bits 14 and 15 of a column are dropped without complaint.
//!
//! Each unit then gets its own packet:
//!
//! ```text
//! 0x80 0x83 <address> <28 column bytes> 0x8F
//! ```
//!
//! The top packet (address 0x01) is always sent before the bottom one.

use crate::frame::Frame;
use crate::types::{
    Column, DISPLAY_COLUMNS, FRAME_END, FRAME_START, PACKET_LEN, PANEL_ADDRESSES, PANEL_COUNT,
    PANEL_MASK, PANEL_ROWS, REFRESH_MODE,
};

/// One packet as written to the transport.
pub type Packet = [u8; PACKET_LEN];

/// Column bytes for both units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhysicalFrame {
    pub top: [u8; DISPLAY_COLUMNS],
    pub bottom: [u8; DISPLAY_COLUMNS],
}

impl PhysicalFrame {
    /// Payload of unit `index` (0 = top, 1 = bottom).
    pub fn panel(&self, index: usize) -> Option<&[u8; DISPLAY_COLUMNS]> {
        match index {
            0 => Some(&self.top),
            1 => Some(&self.bottom),
            _ => None,
        }
    }

    /// Both packets, in transmission order.
    pub fn packets(&self) -> [Packet; PANEL_COUNT] {
        [
            packet(PANEL_ADDRESSES[0], &self.top),
            packet(PANEL_ADDRESSES[1], &self.bottom),
        ]
    }
}

/// Split one logical column into its `(top, bottom)` bytes.
#[inline]
pub fn split_column(value: Column) -> (u8, u8) {
    let top = (value & PANEL_MASK as Column) as u8;
    let bottom = ((value >> PANEL_ROWS) & PANEL_MASK as Column) as u8;
    (top, bottom)
}

pub fn encode(frame: &Frame) -> PhysicalFrame {
    let mut physical = PhysicalFrame::default();
    for (col, &value) in frame.columns().iter().enumerate() {
        let (top, bottom) = split_column(value);
        physical.top[col] = top;
        physical.bottom[col] = bottom;
    }
    physical
}

/// Wrap one unit's payload in the protocol envelope.
pub fn packet(address: u8, payload: &[u8; DISPLAY_COLUMNS]) -> Packet {
    let mut out = [0; PACKET_LEN];
    out[0] = FRAME_START;
    out[1] = REFRESH_MODE;
    out[2] = address;
    out[3..3 + DISPLAY_COLUMNS].copy_from_slice(payload);
    out[PACKET_LEN - 1] = FRAME_END;
    out
}

/// `encode` followed by framing.
pub fn frame_packets(frame: &Frame) -> [Packet; PANEL_COUNT] {
    encode(frame).packets()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with(col: usize, value: Column) -> Frame {
        let mut columns = [0; DISPLAY_COLUMNS];
        columns[col] = value;
        Frame::from_columns(columns)
    }

    #[test]
    fn split_round_trips_fourteen_bits() {
        for v in 0..=Column::MAX {
            let (top, bottom) = split_column(v);
            assert!(top <= PANEL_MASK && bottom <= PANEL_MASK);
            assert_eq!(top as Column | (bottom as Column) << 7, v & 0x3FFF);
        }
    }

    #[test]
    fn all_zeros() {
        let physical = encode(&Frame::blank());
        assert_eq!(physical.top, [0; DISPLAY_COLUMNS]);
        assert_eq!(physical.bottom, [0; DISPLAY_COLUMNS]);
    }

    #[test]
    fn all_ones() {
        let physical = encode(&Frame::from_columns([0b11_1111_1111_1111; DISPLAY_COLUMNS]));
        assert_eq!(physical.top, [0b111_1111; DISPLAY_COLUMNS]);
        assert_eq!(physical.bottom, [0b111_1111; DISPLAY_COLUMNS]);
    }

    #[test]
    fn single_bit_top() {
        let physical = encode(&frame_with(0, 0b1));
        let mut expected = PhysicalFrame::default();
        expected.top[0] = 0x01;
        assert_eq!(physical, expected);
    }

    #[test]
    fn single_bit_bottom() {
        let physical = encode(&frame_with(0, 0b1000_0000));
        let mut expected = PhysicalFrame::default();
        expected.bottom[0] = 0x01;
        assert_eq!(physical, expected);
    }

    #[test]
    fn checkerboard() {
        let mut columns = [0; DISPLAY_COLUMNS];
        for (i, c) in columns.iter_mut().enumerate() {
            *c = if i % 2 == 0 {
                0b10_1010_1010_1010
            } else {
                0b01_0101_0101_0101
            };
        }
        let physical = encode(&Frame::from_columns(columns));
        for i in 0..DISPLAY_COLUMNS {
            if i % 2 == 0 {
                assert_eq!(physical.top[i], 0b010_1010);
                assert_eq!(physical.bottom[i], 0b101_0101);
            } else {
                assert_eq!(physical.top[i], 0b101_0101);
                assert_eq!(physical.bottom[i], 0b010_1010);
            }
        }
    }

    #[test]
    fn bits_above_row_thirteen_are_dropped() {
        let physical = encode(&frame_with(5, 0xC000));
        assert_eq!(physical, PhysicalFrame::default());
    }

    #[test]
    fn packet_envelope_is_bit_exact() {
        let mut payload = [0; DISPLAY_COLUMNS];
        payload[0] = 0x11;
        payload[27] = 0x7F;
        let p = packet(0x02, &payload);

        assert_eq!(p.len(), 31);
        assert_eq!(&p[..3], &[0x80, 0x83, 0x02]);
        assert_eq!(&p[3..31 - 1], &payload[..]);
        assert_eq!(p[30], 0x8F);
    }

    #[test]
    fn top_packet_comes_first() {
        let [first, second] = frame_packets(&frame_with(0, 0b1000_0001));
        assert_eq!(first[2], 0x01);
        assert_eq!(first[3], 0x01);
        assert_eq!(second[2], 0x02);
        assert_eq!(second[3], 0x01);
    }

    #[test]
    fn panel_index_matches_address_order() {
        let physical = encode(&frame_with(1, 0b11_0000_0000_0011));
        assert_eq!(physical.panel(0).unwrap()[1], 0b11);
        assert_eq!(physical.panel(1).unwrap()[1], 0b110_0000);
        assert!(physical.panel(2).is_none());
    }
}
