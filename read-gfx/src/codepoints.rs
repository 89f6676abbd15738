//! Sets of accepted code points.

use std::collections::BTreeSet;

use crate::error::ParseError;

/// An invertible set of code points.
///
/// The parser only ever tests membership, so the inverted representation
/// makes "accept everything" as cheap as "accept nothing".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodePointSet {
    /// Records the code points which are members of the set.
    Standard(BTreeSet<u32>),
    /// Records the code points which are not members of the set.
    Inverted(BTreeSet<u32>),
}

impl CodePointSet {
    /// Create a new empty set.
    pub fn empty() -> Self {
        Self::Standard(BTreeSet::new())
    }

    /// Create a new set which contains every code point.
    pub fn all() -> Self {
        Self::Inverted(BTreeSet::new())
    }

    /// Add a code point to the set. Returns `true` if it was not
    /// already a member.
    pub fn insert(&mut self, cp: u32) -> bool {
        match self {
            Self::Standard(s) => s.insert(cp),
            Self::Inverted(s) => s.remove(&cp),
        }
    }

    /// Remove a code point from the set. Returns `true` if it was
    /// a member.
    pub fn remove(&mut self, cp: u32) -> bool {
        match self {
            Self::Standard(s) => s.remove(&cp),
            Self::Inverted(s) => s.insert(cp),
        }
    }

    /// Returns true if the code point is a member of this set.
    pub fn contains(&self, cp: u32) -> bool {
        match self {
            Self::Standard(s) => s.contains(&cp),
            Self::Inverted(s) => !s.contains(&cp),
        }
    }
}

impl Default for CodePointSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl Extend<u32> for CodePointSet {
    fn extend<T: IntoIterator<Item = u32>>(&mut self, iter: T) {
        for cp in iter {
            self.insert(cp);
        }
    }
}

impl FromIterator<u32> for CodePointSet {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

/// Parses a comma/whitespace-separated list of code points or ranges as
/// hex numbers, optionally prefixed with `U+`, `u`, etc. For
/// example `41-5a,61-7a` selects the ASCII letters, as does the more
/// verbose `U+0041-005A,U+0061-007A`. The special string `*` selects
/// every code point.
pub fn parse_code_points(input: &str) -> Result<CodePointSet, ParseError> {
    if input.trim() == "*" {
        return Ok(CodePointSet::all());
    }
    let mut result = CodePointSet::empty();
    if input.is_empty() {
        return Ok(result);
    }
    let separators = regex::Regex::new(r"[><\+,;&#}{\\xXuU\n\t\v\f\r]").unwrap();
    let cleaned = separators.replace_all(input, " ");
    for cp in cleaned.split_whitespace() {
        if let Some((start, end)) = cp.split_once('-') {
            let start = u32::from_str_radix(start, 16)
                .map_err(|_| ParseError::InvalidCodePoint(start.to_owned()))?;
            let end = u32::from_str_radix(end, 16)
                .map_err(|_| ParseError::InvalidCodePoint(end.to_owned()))?;
            if start > end {
                return Err(ParseError::InvalidCodePointRange { start, end });
            }
            result.extend(start..=end);
        } else {
            let value = u32::from_str_radix(cp, 16)
                .map_err(|_| ParseError::InvalidCodePoint(cp.to_owned()))?;
            result.insert(value);
        }
    }
    Ok(result)
}
