//! Errors raised while reading a GFX font header.

use thiserror::Error;

/// An error produced while parsing a GFX font header.
///
/// Every variant is fatal for the parse that raised it: malformed static
/// text does not become well formed on retry, so there is no recovery or
/// partial-success mode. A caller holding a `ParseError` holds no
/// typeface at all.
#[derive(Error, Debug)]
pub enum ParseError {
    /// One of the three required declarations was not found.
    #[error("Missing {0} declaration in font header")]
    MissingDeclaration(&'static str),

    /// A numeric token could not be parsed as a C integer literal.
    #[error("Invalid integer literal '{0}'")]
    InvalidLiteral(String),

    /// A bitmap array literal does not fit in a byte.
    #[error("Bitmap literal {0} outside 0..=255")]
    ByteOutOfRange(i64),

    /// The font descriptor has too few comma-separated fields.
    #[error("Font descriptor has {0} fields, expected at least 5")]
    ShortFontDescriptor(usize),

    /// A glyph table entry does not have exactly six fields.
    #[error("Glyph record {index} has {found} fields, expected 6")]
    BadGlyphRecord { index: usize, found: usize },

    /// A glyph field value is outside the domain of its attribute,
    /// e.g. a negative width or bitmap offset.
    #[error("Glyph field value {0} outside its value domain")]
    FieldOutOfRange(i64),

    /// The glyph table length disagrees with the declared code point range.
    #[error("Glyph table has {found} records for a code point range of {expected}")]
    GlyphCountMismatch { expected: usize, found: usize },

    /// A glyph's bitmap slice extends past the end of the bitmap buffer.
    #[error("Glyph bitmap slice {start}..{end} exceeds {len} byte bitmap")]
    BitmapOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    /// Invalid input in a code point list.
    #[error("Invalid code point '{0}'")]
    InvalidCodePoint(String),

    /// A code point range with start greater than end.
    #[error("Invalid code point range {start}-{end}")]
    InvalidCodePointRange { start: u32, end: u32 },

    /// The font source could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
