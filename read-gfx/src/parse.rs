//! Extraction of the three GFX header declarations and glyph assembly.

use log::{debug, warn};
use regex::Regex;

use crate::codepoints::CodePointSet;
use crate::error::ParseError;
use crate::literal::parse_int;
use crate::strip::strip_comments;
use crate::typeface::{Glyph, Typeface};

/// The packed bitmap blob and the identifier it was declared under.
struct BitmapArray {
    name: String,
    data: Vec<u8>,
}

/// Font-wide fields of the `GFXfont` descriptor.
struct FontMetrics {
    first_code_point: u32,
    last_code_point: u32,
    y_advance: i32,
}

/// One undecoded glyph table entry, in declaration order.
struct GlyphRecord {
    bitmap_offset: usize,
    width: u32,
    height: u32,
    x_advance: i32,
    x_offset: i32,
    y_offset: i32,
}

/// Parses a GFX font header, keeping only glyphs whose code point is a
/// member of `accepted`.
///
/// The typeface is assembled in full before it is returned; on any error
/// the caller receives no partially populated state.
pub fn parse_typeface(data: &str, accepted: &CodePointSet) -> Result<Typeface, ParseError> {
    let data = strip_comments(data);
    let bitmap = extract_bitmap(&data)?;
    let metrics = extract_metrics(&data)?;
    let records = extract_glyph_records(&data, &bitmap.name)?;
    assemble(bitmap, &metrics, &records, accepted)
}

/// Removes all whitespace, matching the compaction the header generator's
/// own tooling applies before splitting on commas.
fn compact(s: &str) -> String {
    s.split_whitespace().collect()
}

/// Parses a token and narrows it into the field's value domain.
fn int_field<T: TryFrom<i64>>(token: &str) -> Result<T, ParseError> {
    let value = parse_int(token)?;
    T::try_from(value).map_err(|_| ParseError::FieldOutOfRange(value))
}

fn extract_bitmap(data: &str) -> Result<BitmapArray, ParseError> {
    let decl =
        Regex::new(r"(?s)const\s+uint8_t\s+(\w+)Bitmaps\[\]\s+PROGMEM\s*=\s*\{(.*?)\};").unwrap();
    let caps = decl
        .captures(data)
        .ok_or(ParseError::MissingDeclaration("bitmap array"))?;
    let name = caps[1].to_owned();
    let body = compact(&caps[2]);
    let body = body.trim_end_matches(',');
    let mut bytes = Vec::new();
    for token in body.split(',') {
        let value = parse_int(token)?;
        let byte = u8::try_from(value).map_err(|_| ParseError::ByteOutOfRange(value))?;
        bytes.push(byte);
    }
    debug!("bitmap array '{name}Bitmaps': {} bytes", bytes.len());
    Ok(BitmapArray { name, data: bytes })
}

fn extract_metrics(data: &str) -> Result<FontMetrics, ParseError> {
    // Greedy to the final brace: the descriptor is the last declaration
    // the generator emits.
    let decl = Regex::new(r"(?s)const\s+GFXfont\s+(.*)\}").unwrap();
    let caps = decl
        .captures(data)
        .ok_or(ParseError::MissingDeclaration("font descriptor"))?;
    let joined = compact(&caps[1]);
    let fields: Vec<&str> = joined.split(',').collect();
    if fields.len() < 5 {
        return Err(ParseError::ShortFontDescriptor(fields.len()));
    }
    // Fields 0 and 1 merely repeat the bitmap and glyph array
    // identifiers as pointer expressions; both arrays are located by
    // their own declarations.
    Ok(FontMetrics {
        first_code_point: int_field(fields[2])?,
        last_code_point: int_field(fields[3])?,
        y_advance: int_field(fields[4])?,
    })
}

fn extract_glyph_records(data: &str, bitmap_name: &str) -> Result<Vec<GlyphRecord>, ParseError> {
    let decl =
        Regex::new(r"(?s)const\s+GFXglyph\s+(\w+)Glyphs\[\]\s+PROGMEM\s*=\s*\{(.*?)\};").unwrap();
    let caps = decl
        .captures(data)
        .ok_or(ParseError::MissingDeclaration("glyph table"))?;
    let name = &caps[1];
    if name != bitmap_name {
        warn!("glyph table '{name}Glyphs' does not match bitmap array '{bitmap_name}Bitmaps'");
    }
    let body = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
    let group = Regex::new(r"\{([^{}]*)\}").unwrap();
    let mut records = Vec::new();
    for (index, group_caps) in group.captures_iter(body).enumerate() {
        let joined = compact(&group_caps[1]);
        let joined = joined.trim_end_matches(',');
        let fields: Vec<&str> = joined.split(',').collect();
        if fields.len() != 6 {
            return Err(ParseError::BadGlyphRecord {
                index,
                found: fields.len(),
            });
        }
        records.push(GlyphRecord {
            bitmap_offset: int_field(fields[0])?,
            width: int_field(fields[1])?,
            height: int_field(fields[2])?,
            x_advance: int_field(fields[3])?,
            x_offset: int_field(fields[4])?,
            y_offset: int_field(fields[5])?,
        });
    }
    debug!("glyph table '{name}Glyphs': {} records", records.len());
    Ok(records)
}

/// Walks the glyph table in code point order, slicing each accepted
/// glyph's bitmap out of the blob and accumulating the descent metric.
fn assemble(
    bitmap: BitmapArray,
    metrics: &FontMetrics,
    records: &[GlyphRecord],
    accepted: &CodePointSet,
) -> Result<Typeface, ParseError> {
    let expected = metrics
        .last_code_point
        .checked_sub(metrics.first_code_point)
        .map(|span| span as usize + 1)
        .ok_or(ParseError::InvalidCodePointRange {
            start: metrics.first_code_point,
            end: metrics.last_code_point,
        })?;
    if records.len() != expected {
        return Err(ParseError::GlyphCountMismatch {
            expected,
            found: records.len(),
        });
    }
    let mut glyphs = Vec::new();
    let mut descent = 0;
    for (index, record) in records.iter().enumerate() {
        let code_point = metrics.first_code_point + index as u32;
        if !accepted.contains(code_point) {
            continue;
        }
        let len = (u64::from(record.width) * u64::from(record.height)).div_ceil(8) as usize;
        let start = record.bitmap_offset;
        let end = start.saturating_add(len);
        let data =
            bitmap
                .data
                .get(start..end)
                .ok_or(ParseError::BitmapOutOfBounds {
                    start,
                    end,
                    len: bitmap.data.len(),
                })?;
        descent = descent.max(record.y_offset + record.height as i32);
        glyphs.push(Glyph {
            code_point,
            width: record.width,
            height: record.height,
            x_advance: record.x_advance,
            x_offset: record.x_offset,
            y_offset: record.y_offset,
            bitmap: data.to_vec(),
        });
    }
    debug!(
        "typeface '{}': {} of {} glyphs accepted, descent {}",
        bitmap.name,
        glyphs.len(),
        records.len(),
        descent
    );
    Ok(Typeface {
        name: bitmap.name,
        y_advance: metrics.y_advance,
        descent,
        glyphs,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn accept(cps: &[u32]) -> CodePointSet {
        cps.iter().copied().collect()
    }

    #[test]
    fn round_trip_with_filtering() {
        let face = parse_typeface(gfx_test_data::DEMO_SANS, &accept(&[65, 67])).unwrap();
        assert_eq!(face.name, "DemoSans8pt7b");
        assert_eq!(face.y_advance, 10);
        let code_points: Vec<_> = face.glyphs.iter().map(|g| g.code_point).collect();
        assert_eq!(code_points, vec![65, 67]);
        assert!(face.glyph(66).is_none());
    }

    #[test]
    fn full_acceptance_covers_declared_range_only() {
        let face = parse_typeface(gfx_test_data::DEMO_SANS, &CodePointSet::all()).unwrap();
        let code_points: Vec<_> = face.glyphs.iter().map(|g| g.code_point).collect();
        assert_eq!(code_points, vec![65, 66, 67]);
    }

    #[test]
    fn accepted_code_points_outside_range_never_emitted() {
        let face = parse_typeface(gfx_test_data::DEMO_SANS, &accept(&[64, 65, 68])).unwrap();
        let code_points: Vec<_> = face.glyphs.iter().map(|g| g.code_point).collect();
        assert_eq!(code_points, vec![65]);
    }

    #[test]
    fn bitmap_slice_lengths() {
        let face = parse_typeface(gfx_test_data::DEMO_SANS, &CodePointSet::all()).unwrap();
        // 8x8 -> 8 bytes, 5x7 -> ceil(35/8) = 5 bytes, 4x6 -> 3 bytes.
        assert_eq!(face.glyph(65).unwrap().bitmap.len(), 8);
        assert_eq!(face.glyph(66).unwrap().bitmap.len(), 5);
        assert_eq!(face.glyph(67).unwrap().bitmap.len(), 3);
    }

    #[test]
    fn bitmap_slices_are_offset_correctly() {
        let face = parse_typeface(gfx_test_data::DEMO_SANS, &CodePointSet::all()).unwrap();
        assert_eq!(face.glyph(65).unwrap().bitmap[0], 0x3C);
        assert_eq!(face.glyph(66).unwrap().bitmap[0], 0xF8);
        assert_eq!(face.glyph(67).unwrap().bitmap, vec![0x62, 0xF1, 0x69]);
    }

    #[test]
    fn descent_is_max_offset_plus_height() {
        let src = r#"
const uint8_t DescentBitmaps[] PROGMEM = { 0xFF, 0xFF, 0xFF, 0xFF, 0xFF };

const GFXglyph DescentGlyphs[] PROGMEM = {
  { 0, 4, 10, 5, 0, -2 },
  { 0, 4, 6, 5, 0, 1 } };

const GFXfont Descent PROGMEM = {
  (uint8_t *)DescentBitmaps, (GFXglyph *)DescentGlyphs, 65, 66, 12 };
"#;
        let face = parse_typeface(src, &CodePointSet::all()).unwrap();
        // max(-2 + 10, 1 + 6)
        assert_eq!(face.descent, 8);
    }

    #[test]
    fn descent_of_demo_sans() {
        let face = parse_typeface(gfx_test_data::DEMO_SANS, &CodePointSet::all()).unwrap();
        assert_eq!(face.descent, 1);
        let filtered = parse_typeface(gfx_test_data::DEMO_SANS, &accept(&[65, 66])).unwrap();
        assert_eq!(filtered.descent, 0);
    }

    #[test]
    fn comment_tolerance() {
        let clean = parse_typeface(gfx_test_data::DEMO_SANS, &CodePointSet::all()).unwrap();
        let commented =
            parse_typeface(gfx_test_data::DEMO_SANS_COMMENTED, &CodePointSet::all()).unwrap();
        assert_eq!(clean, commented);
    }

    #[test]
    fn numeric_base_handling() {
        let face =
            parse_typeface(gfx_test_data::bases::MIXED_RADIX, &CodePointSet::all()).unwrap();
        assert_eq!(face.name, "MixedRadix");
        assert_eq!(face.y_advance, 10);
        let glyph = face.glyph(65).unwrap();
        assert_eq!(glyph.bitmap, vec![31, 31]);
        assert_eq!(glyph.x_advance, 4);
        assert_eq!(glyph.x_offset, -1);
        assert_eq!(glyph.y_offset, -2);
    }

    #[test]
    fn empty_acceptance_set() {
        let face = parse_typeface(gfx_test_data::DEMO_SANS, &CodePointSet::empty()).unwrap();
        assert!(face.glyphs.is_empty());
        assert_eq!(face.descent, 0);
    }

    #[test]
    fn missing_glyph_table_is_rejected() {
        let err = parse_typeface(
            gfx_test_data::malformed::MISSING_GLYPH_TABLE,
            &CodePointSet::all(),
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::MissingDeclaration("glyph table")));
    }

    #[test]
    fn missing_bitmap_is_rejected() {
        let err = parse_typeface(
            gfx_test_data::malformed::MISSING_BITMAP,
            &CodePointSet::all(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingDeclaration("bitmap array")
        ));
    }

    #[test]
    fn out_of_range_bitmap_literal_is_rejected() {
        let err = parse_typeface(
            gfx_test_data::malformed::OVERLONG_BYTE,
            &CodePointSet::all(),
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::ByteOutOfRange(256)));
    }

    #[test]
    fn short_descriptor_is_rejected() {
        let err = parse_typeface(
            gfx_test_data::malformed::SHORT_DESCRIPTOR,
            &CodePointSet::all(),
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::ShortFontDescriptor(4)));
    }

    #[test]
    fn five_field_glyph_is_rejected() {
        let err = parse_typeface(
            gfx_test_data::malformed::FIVE_FIELD_GLYPH,
            &CodePointSet::all(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ParseError::BadGlyphRecord { index: 0, found: 5 }
        ));
    }

    #[test]
    fn bitmap_slice_out_of_bounds_is_rejected() {
        let err = parse_typeface(
            gfx_test_data::malformed::OFFSET_PAST_END,
            &CodePointSet::all(),
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::BitmapOutOfBounds { .. }));
    }

    #[test]
    fn slice_out_of_bounds_ignored_when_glyph_filtered_out() {
        // The bad record is never sliced when its code point is not
        // accepted, matching the walk order of the assembler.
        let face = parse_typeface(
            gfx_test_data::malformed::OFFSET_PAST_END,
            &CodePointSet::empty(),
        )
        .unwrap();
        assert!(face.glyphs.is_empty());
    }

    #[test]
    fn glyph_count_mismatch_is_rejected() {
        let err = parse_typeface(
            gfx_test_data::malformed::EXTRA_GLYPH_RECORD,
            &CodePointSet::all(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ParseError::GlyphCountMismatch {
                expected: 3,
                found: 4
            }
        ));
    }

    #[test]
    fn unparsable_literal_is_rejected() {
        let err = parse_typeface(gfx_test_data::malformed::BAD_LITERAL, &CodePointSet::all())
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidLiteral(_)));
    }

    #[test]
    fn trailing_comma_in_bitmap_is_tolerated() {
        let src = gfx_test_data::DEMO_SANS.replacen("0x69 }", "0x69, }", 1);
        let face = parse_typeface(&src, &CodePointSet::all()).unwrap();
        assert_eq!(face.glyphs.len(), 3);
    }
}
