//! The typeface and glyph data model.

use std::path::Path;

use crate::codepoints::CodePointSet;
use crate::error::ParseError;
use crate::parse::parse_typeface;

/// One complete bitmap font: font-wide metrics plus an ordered list of
/// glyphs.
///
/// Produced by [`parse_typeface`] or [`Typeface::load`]; immutable
/// afterwards. The glyph list is ascending by code point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typeface {
    /// Identifier recovered from the bitmap array declaration.
    pub name: String,
    /// Vertical distance to the next line of text, in font units.
    pub y_advance: i32,
    /// Maximum extent below the baseline, `max(y_offset + height)` over
    /// the accepted glyphs. Zero when no glyph was accepted.
    pub descent: i32,
    /// Accepted glyphs, ascending by code point.
    pub glyphs: Vec<Glyph>,
}

impl Typeface {
    /// Reads the header at `path` and parses it, keeping only glyphs for
    /// code points in `accepted`.
    ///
    /// The source file is held open only for the duration of the read.
    pub fn load(path: impl AsRef<Path>, accepted: &CodePointSet) -> Result<Self, ParseError> {
        let data = std::fs::read_to_string(path)?;
        parse_typeface(&data, accepted)
    }

    /// Returns the glyph for `code_point`, if it was accepted.
    pub fn glyph(&self, code_point: u32) -> Option<&Glyph> {
        self.glyphs
            .binary_search_by_key(&code_point, |g| g.code_point)
            .ok()
            .map(|ix| &self.glyphs[ix])
    }
}

/// One character's bitmap and placement metrics within a typeface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// The code point this glyph renders.
    pub code_point: u32,
    /// The number of columns in the bitmap.
    pub width: u32,
    /// The number of rows in the bitmap.
    pub height: u32,
    /// Horizontal advance to the next glyph, in font units.
    pub x_advance: i32,
    /// Signed horizontal placement offset from the pen position.
    pub x_offset: i32,
    /// Signed vertical placement offset from the baseline.
    pub y_offset: i32,
    /// Packed bitmap, row-major, 1 bit per pixel, most significant bit
    /// first, `(width * height + 7) / 8` bytes.
    pub bitmap: Vec<u8>,
}

impl Glyph {
    /// Returns true if the pixel at `(x, y)` is set.
    ///
    /// `(0, 0)` is the top-left corner of the bitmap. Out-of-bounds
    /// coordinates read as unset.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let bit = (y * self.width + x) as usize;
        self.bitmap[bit / 8] & (0x80 >> (bit % 8)) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker_glyph() -> Glyph {
        // 4x2, rows 1010 then 0101 -> bits 1010_0101 -> one byte 0xA5.
        Glyph {
            code_point: 65,
            width: 4,
            height: 2,
            x_advance: 5,
            x_offset: 0,
            y_offset: -2,
            bitmap: vec![0xA5],
        }
    }

    #[test]
    fn pixel_unpacks_msb_first() {
        let g = checker_glyph();
        assert!(g.pixel(0, 0));
        assert!(!g.pixel(1, 0));
        assert!(g.pixel(2, 0));
        assert!(!g.pixel(3, 0));
        assert!(!g.pixel(0, 1));
        assert!(g.pixel(1, 1));
        assert!(!g.pixel(2, 1));
        assert!(g.pixel(3, 1));
    }

    #[test]
    fn pixel_out_of_bounds_is_unset() {
        let g = checker_glyph();
        assert!(!g.pixel(4, 0));
        assert!(!g.pixel(0, 2));
    }

    #[test]
    fn glyph_lookup_by_code_point() {
        let mut a = checker_glyph();
        a.code_point = 65;
        let mut c = checker_glyph();
        c.code_point = 67;
        let face = Typeface {
            name: "Demo".into(),
            y_advance: 10,
            descent: 0,
            glyphs: vec![a, c],
        };
        assert_eq!(face.glyph(65).map(|g| g.code_point), Some(65));
        assert!(face.glyph(66).is_none());
        assert_eq!(face.glyph(67).map(|g| g.code_point), Some(67));
    }
}
