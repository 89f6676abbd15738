//! Parser registration and dispatch by format tag.

use std::collections::HashMap;

use crate::codepoints::CodePointSet;
use crate::error::ParseError;
use crate::parse::parse_typeface;
use crate::typeface::Typeface;

/// Format selector tag under which the GFX header parser registers
/// itself.
pub const FORMAT_TAG: &str = "gfx/";

/// A parser entry point: source text plus accepted code points in, fully
/// assembled typeface out.
pub type ParseFn = fn(&str, &CodePointSet) -> Result<Typeface, ParseError>;

/// Mapping from format selector tag to parser entry point.
///
/// The mapping is owned by the font resource loading subsystem, which
/// constructs it at initialization and asks each format crate to add
/// itself via its `register` function. This crate holds no process-wide
/// mutable state of its own.
#[derive(Default)]
pub struct ParserRegistry {
    parsers: HashMap<&'static str, ParseFn>,
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `parser` under `tag`, replacing any previous entry.
    pub fn insert(&mut self, tag: &'static str, parser: ParseFn) {
        self.parsers.insert(tag, parser);
    }

    /// Returns the parser registered under exactly `tag`.
    pub fn get(&self, tag: &str) -> Option<ParseFn> {
        self.parsers.get(tag).copied()
    }

    /// Returns the parser whose tag prefixes `source`, e.g. a source of
    /// `gfx/FreeSans9pt7b.h` selects the parser registered under `gfx/`.
    pub fn for_source(&self, source: &str) -> Option<ParseFn> {
        self.parsers
            .iter()
            .find(|(tag, _)| source.starts_with(*tag))
            .map(|(_, parser)| *parser)
    }
}

/// Adds the GFX header parser to `registry` under [`FORMAT_TAG`].
pub fn register(registry: &mut ParserRegistry) {
    registry.insert(FORMAT_TAG, parse_typeface);
}
