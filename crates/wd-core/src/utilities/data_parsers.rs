//! Data parsing helpers.
//!
//! Arguments may arrive as text (e.g. from a query string), so numbers are
//! parsed strictly here: surrounding whitespace is ignored, any other
//! trailing garbage rejects the input.

/// Parse a base-10 integer such as `"20"`, `"-1"` or `" 2013 "`.
///
/// Returns `None` if the string is empty or is not a whole integer.
pub fn parse_integer(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse().ok()
}
