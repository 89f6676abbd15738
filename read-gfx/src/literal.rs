//! C integer literal parsing.

use crate::error::ParseError;

/// Parses a token as a C integer literal, honoring its base prefix:
/// `0x`/`0X` hexadecimal, a leading zero octal, anything else decimal.
/// A leading `-` or `+` sign is accepted ahead of the prefix.
pub(crate) fn parse_int(token: &str) -> Result<i64, ParseError> {
    let token = token.trim();
    let invalid = || ParseError::InvalidLiteral(token.to_owned());
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let magnitude = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        i64::from_str_radix(hex, 16)
    } else if digits.len() > 1 && digits.starts_with('0') {
        // "037" is octal; a bare "0" is just zero.
        i64::from_str_radix(&digits[1..], 8)
    } else {
        digits.parse()
    }
    .map_err(|_| invalid())?;
    Ok(if negative { -magnitude } else { magnitude })
}
