//! Comment removal for GFX font headers.

use regex::Regex;

/// Removes every block (`/* ... */`) and line (`// ...`) comment from the
/// source text, replacing each with nothing.
///
/// Comment markers inside string or character literals are not
/// recognized. The headers this crate reads are generated data tables,
/// not general C, so no such literals occur in practice; this is an
/// accepted limitation inherited from the format's ecosystem.
pub(crate) fn strip_comments(data: &str) -> String {
    let comments = Regex::new(r"(?s)/\*.*?\*/|//[^\n]*").unwrap();
    comments.replace_all(data, "").into_owned()
}
