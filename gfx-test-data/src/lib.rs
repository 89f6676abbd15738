//! Test data shared between the gfx font crates.

/// Three glyph (A..C) font, one byte-array/glyph-table/descriptor
/// declaration each, no comments.
pub static DEMO_SANS: &str = include_str!("../test_data/headers/demo_sans.h");

/// The same data as [`DEMO_SANS`] with block and line comments
/// interleaved at arbitrary positions between tokens.
pub static DEMO_SANS_COMMENTED: &str =
    include_str!("../test_data/headers/demo_sans_commented.h");

pub mod bases {
    /// Single glyph font spelling its literals in mixed bases: the
    /// bitmap holds 31 three ways (0x1F, 037, 31) and the descriptor
    /// declares 'A'..'A' in octal/hex with an octal y-advance.
    pub static MIXED_RADIX: &str = r"
const uint8_t MixedRadixBitmaps[] PROGMEM = { 0x1F, 037, 31 };

const GFXglyph MixedRadixGlyphs[] PROGMEM = {
  { 0, 3, 5, 04, -01, -0x2 } };

const GFXfont MixedRadix PROGMEM = {
  (uint8_t *)MixedRadixBitmaps, (GFXglyph *)MixedRadixGlyphs, 0101, 0x41,
  012 };
";
}

pub mod malformed {
    /// No `GFXglyph` declaration at all.
    pub static MISSING_GLYPH_TABLE: &str = r"
const uint8_t NoTableBitmaps[] PROGMEM = { 0x00 };

const GFXfont NoTable PROGMEM = {
  (uint8_t *)NoTableBitmaps, (GFXglyph *)NoTableGlyphs, 65, 65, 8 };
";

    /// No bitmap array declaration.
    pub static MISSING_BITMAP: &str = r"
const GFXglyph NoBitsGlyphs[] PROGMEM = {
  { 0, 1, 1, 2, 0, 0 } };

const GFXfont NoBits PROGMEM = {
  (uint8_t *)NoBitsBitmaps, (GFXglyph *)NoBitsGlyphs, 65, 65, 8 };
";

    /// A bitmap literal that does not fit in a byte.
    pub static OVERLONG_BYTE: &str = r"
const uint8_t OverBitmaps[] PROGMEM = { 0x10, 256 };

const GFXglyph OverGlyphs[] PROGMEM = {
  { 0, 1, 1, 2, 0, 0 } };

const GFXfont Over PROGMEM = {
  (uint8_t *)OverBitmaps, (GFXglyph *)OverGlyphs, 65, 65, 8 };
";

    /// Font descriptor with only four comma-separated fields.
    pub static SHORT_DESCRIPTOR: &str = r"
const uint8_t ShortBitmaps[] PROGMEM = { 0x00 };

const GFXglyph ShortGlyphs[] PROGMEM = {
  { 0, 1, 1, 2, 0, 0 } };

const GFXfont Short PROGMEM = {
  (uint8_t *)ShortBitmaps, (GFXglyph *)ShortGlyphs, 65, 65 };
";

    /// First glyph record has five fields instead of six.
    pub static FIVE_FIELD_GLYPH: &str = r"
const uint8_t FiveBitmaps[] PROGMEM = { 0x00 };

const GFXglyph FiveGlyphs[] PROGMEM = {
  { 0, 1, 1, 2, 0 } };

const GFXfont Five PROGMEM = {
  (uint8_t *)FiveBitmaps, (GFXglyph *)FiveGlyphs, 65, 65, 8 };
";

    /// Glyph bitmap offset pointing past the end of a one-byte blob.
    pub static OFFSET_PAST_END: &str = r"
const uint8_t PastBitmaps[] PROGMEM = { 0xFF };

const GFXglyph PastGlyphs[] PROGMEM = {
  { 4, 8, 8, 9, 0, -8 } };

const GFXfont Past PROGMEM = {
  (uint8_t *)PastBitmaps, (GFXglyph *)PastGlyphs, 65, 65, 8 };
";

    /// Four glyph records for a declared range of three code points.
    pub static EXTRA_GLYPH_RECORD: &str = r"
const uint8_t ExtraBitmaps[] PROGMEM = { 0xFF, 0xFF };

const GFXglyph ExtraGlyphs[] PROGMEM = {
  { 0, 1, 1, 2, 0, 0 },
  { 0, 1, 1, 2, 0, 0 },
  { 0, 1, 1, 2, 0, 0 },
  { 0, 1, 1, 2, 0, 0 } };

const GFXfont Extra PROGMEM = {
  (uint8_t *)ExtraBitmaps, (GFXglyph *)ExtraGlyphs, 65, 67, 8 };
";

    /// An unparsable token in the bitmap array.
    pub static BAD_LITERAL: &str = r"
const uint8_t BadBitmaps[] PROGMEM = { 0x00, zz };

const GFXglyph BadGlyphs[] PROGMEM = {
  { 0, 1, 1, 2, 0, 0 } };

const GFXfont Bad PROGMEM = {
  (uint8_t *)BadBitmaps, (GFXglyph *)BadGlyphs, 65, 65, 8 };
";
}
