//! Glyph catalog.
//!
//! Maps a character and a [`SizeClass`] to the glyph's columns. Tables are
//! compiled in; there is no runtime registration.
//!
//! ```
//! use flipdot_core::font;
//! use flipdot_core::types::SizeClass;
//!
//! let a = font::lookup('A', SizeClass::Large).unwrap();
//! assert_eq!(a.len(), 9);
//!
//! // Lower case folds to upper case in the large size only.
//! assert_eq!(font::lookup('a', SizeClass::Large).unwrap(), a);
//! assert!(font::lookup('🚀', SizeClass::Small).is_err());
//! ```

mod large;
mod small;

use snafu::OptionExt;

use crate::error::{GlyphNotFoundSnafu, InvalidSizeClassSnafu, Result};
use crate::types::{Column, SizeClass};

/// Columns of `character` in `size`.
pub fn lookup(character: char, size: SizeClass) -> Result<&'static [Column]> {
    let key = if size.folds_lowercase() && character.is_lowercase() {
        // Only ASCII letters are authored, so a single-char fold is enough.
        character.to_ascii_uppercase()
    } else {
        character
    };

    let glyph = match size {
        SizeClass::Small => small::glyph(key),
        SizeClass::Large => large::glyph(key),
    };
    glyph.context(GlyphNotFoundSnafu { character, size })
}

/// Like [`lookup`], with the size given by name (`small`, `5x8`, `large`, `14x9`).
pub fn lookup_named(character: char, size: &str) -> Result<&'static [Column]> {
    lookup(character, parse_size_class(size)?)
}

pub fn parse_size_class(name: &str) -> Result<SizeClass> {
    SizeClass::from_str(name).context(InvalidSizeClassSnafu { name })
}

pub fn supports(character: char, size: SizeClass) -> bool {
    lookup(character, size).is_ok()
}
