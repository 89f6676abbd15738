//! Reading Adafruit GFX bitmap font headers.
//!
//! The GFX font ecosystem distributes bitmap fonts as C header files:
//! a packed `uint8_t` bitmap array, a `GFXglyph` metadata table, and a
//! `GFXfont` descriptor tying them together. This crate recovers a
//! usable glyph resource from that text — it strips comments, locates
//! the three declarations by their known shapes, decodes the C integer
//! literals, and cross-references the glyph table against the bitmap
//! blob, filtering to a caller-supplied set of code points.
//!
//! The format has no real grammar, so no attempt is made to parse C;
//! only the declaration shapes the font generator emits are recognized,
//! and a header that deviates from them fails with a [`ParseError`]
//! rather than producing a partial typeface.
//!
//! # Example
//!
//! ```no_run
//! use read_gfx::{CodePointSet, Typeface};
//!
//! let ascii: CodePointSet = (0x20..=0x7E).collect();
//! let face = Typeface::load("fonts/FreeSans9pt7b.h", &ascii)?;
//! println!("{}: {} glyphs, descent {}", face.name, face.glyphs.len(), face.descent);
//! # Ok::<(), read_gfx::ParseError>(())
//! ```

#![forbid(unsafe_code)]

mod codepoints;
mod error;
mod literal;
mod parse;
mod registry;
mod strip;
mod typeface;

pub use codepoints::{parse_code_points, CodePointSet};
pub use error::ParseError;
pub use parse::parse_typeface;
pub use registry::{register, ParseFn, ParserRegistry, FORMAT_TAG};
pub use typeface::{Glyph, Typeface};
