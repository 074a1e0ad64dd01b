//! 9x9 glyphs, upper case only.

use crate::types::Column;

pub(super) fn glyph(ch: char) -> Option<&'static [Column]> {
    let columns: &'static [Column] = match ch {
        '0' => &[0x07E, 0x07E, 0x1A1, 0x199, 0x199, 0x199, 0x185, 0x07E, 0x07E],
        '1' => &[0x000, 0x000, 0x182, 0x1FF, 0x1FF, 0x1FF, 0x180, 0x000, 0x000],
        '2' => &[0x182, 0x182, 0x1C1, 0x1A1, 0x1A1, 0x1A1, 0x199, 0x186, 0x186],
        '3' => &[0x041, 0x041, 0x181, 0x185, 0x185, 0x185, 0x19B, 0x061, 0x061],
        '4' => &[0x038, 0x038, 0x024, 0x022, 0x022, 0x022, 0x1FF, 0x020, 0x020],
        '5' => &[0x047, 0x047, 0x185, 0x185, 0x185, 0x185, 0x185, 0x079, 0x079],
        '6' => &[0x07C, 0x07C, 0x19A, 0x199, 0x199, 0x199, 0x199, 0x060, 0x060],
        '7' => &[0x001, 0x001, 0x1E1, 0x019, 0x019, 0x019, 0x005, 0x003, 0x003],
        '8' => &[0x066, 0x066, 0x199, 0x199, 0x199, 0x199, 0x199, 0x066, 0x066],
        '9' => &[0x006, 0x006, 0x199, 0x199, 0x199, 0x199, 0x059, 0x03E, 0x03E],
        ':' => &[0x066, 0x066, 0x066, 0x066],
        ' ' => &[0x000, 0x000, 0x000, 0x000, 0x000],
        '!' => &[0x1BF, 0x1BF],
        '?' => &[0x002, 0x002, 0x001, 0x1A1, 0x1A1, 0x1A1, 0x019, 0x006, 0x006],
        '.' => &[0x1C0, 0x1C0, 0x1C0, 0x1C0],
        ',' => &[0x040, 0x040, 0x1C0, 0x1C0],
        '-' => &[0x018, 0x018, 0x018, 0x018, 0x018, 0x018, 0x018, 0x018, 0x018],
        '+' => &[0x018, 0x018, 0x018, 0x07E, 0x07E, 0x07E, 0x018, 0x018, 0x018],
        '\'' => &[0x003, 0x003],
        '"' => &[0x003, 0x003, 0x000, 0x003, 0x003],
        '(' => &[0x03C, 0x03C, 0x042, 0x181, 0x181],
        ')' => &[0x181, 0x181, 0x042, 0x03C, 0x03C],
        '/' => &[0x180, 0x180, 0x060, 0x018, 0x018, 0x018, 0x006, 0x001, 0x001],
        '=' => &[0x024, 0x024, 0x024, 0x024, 0x024, 0x024, 0x024, 0x024, 0x024],
        'A' => &[0x1FE, 0x1FE, 0x019, 0x019, 0x019, 0x019, 0x019, 0x1FE, 0x1FE],
        'B' => &[0x1FF, 0x1FF, 0x199, 0x199, 0x199, 0x199, 0x199, 0x066, 0x066],
        'C' => &[0x07E, 0x07E, 0x181, 0x181, 0x181, 0x181, 0x181, 0x042, 0x042],
        'D' => &[0x1FF, 0x1FF, 0x181, 0x181, 0x181, 0x181, 0x181, 0x07E, 0x07E],
        'E' => &[0x1FF, 0x1FF, 0x199, 0x199, 0x199, 0x199, 0x199, 0x181, 0x181],
        'F' => &[0x1FF, 0x1FF, 0x019, 0x019, 0x019, 0x019, 0x019, 0x001, 0x001],
        'G' => &[0x07E, 0x07E, 0x181, 0x199, 0x199, 0x199, 0x199, 0x1FA, 0x1FA],
        'H' => &[0x1FF, 0x1FF, 0x018, 0x018, 0x018, 0x018, 0x018, 0x1FF, 0x1FF],
        'I' => &[0x000, 0x000, 0x181, 0x1FF, 0x1FF, 0x1FF, 0x181, 0x000, 0x000],
        'J' => &[0x040, 0x040, 0x180, 0x181, 0x181, 0x181, 0x07F, 0x001, 0x001],
        'K' => &[0x1FF, 0x1FF, 0x018, 0x024, 0x024, 0x024, 0x042, 0x181, 0x181],
        'L' => &[0x1FF, 0x1FF, 0x180, 0x180, 0x180, 0x180, 0x180, 0x180, 0x180],
        'M' => &[0x1FF, 0x1FF, 0x002, 0x01C, 0x01C, 0x01C, 0x002, 0x1FF, 0x1FF],
        'N' => &[0x1FF, 0x1FF, 0x004, 0x018, 0x018, 0x018, 0x020, 0x1FF, 0x1FF],
        'O' => &[0x07E, 0x07E, 0x181, 0x181, 0x181, 0x181, 0x181, 0x07E, 0x07E],
        'P' => &[0x1FF, 0x1FF, 0x019, 0x019, 0x019, 0x019, 0x019, 0x006, 0x006],
        'Q' => &[0x07E, 0x07E, 0x181, 0x1A1, 0x1A1, 0x1A1, 0x041, 0x1BE, 0x1BE],
        'R' => &[0x1FF, 0x1FF, 0x019, 0x039, 0x039, 0x039, 0x059, 0x186, 0x186],
        'S' => &[0x186, 0x186, 0x199, 0x199, 0x199, 0x199, 0x199, 0x061, 0x061],
        'T' => &[0x001, 0x001, 0x001, 0x1FF, 0x1FF, 0x1FF, 0x001, 0x001, 0x001],
        'U' => &[0x07F, 0x07F, 0x180, 0x180, 0x180, 0x180, 0x180, 0x07F, 0x07F],
        'V' => &[0x03F, 0x03F, 0x040, 0x180, 0x180, 0x180, 0x040, 0x03F, 0x03F],
        'W' => &[0x07F, 0x07F, 0x180, 0x078, 0x078, 0x078, 0x180, 0x07F, 0x07F],
        'X' => &[0x1C3, 0x1C3, 0x024, 0x018, 0x018, 0x018, 0x024, 0x1C3, 0x1C3],
        'Y' => &[0x007, 0x007, 0x018, 0x1E0, 0x1E0, 0x1E0, 0x018, 0x007, 0x007],
        'Z' => &[0x1C1, 0x1C1, 0x1A1, 0x199, 0x199, 0x199, 0x185, 0x183, 0x183],
        _ => return None,
    };
    Some(columns)
}
