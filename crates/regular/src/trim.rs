//! Leading/trailing whitespace removal.

/// Every character treated as trimmable whitespace: space, horizontal tab,
/// newline, carriage return, vertical tab, form feed.
const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0B', '\x0C'];

/// Remove leading and trailing whitespace from `s`.
///
/// An all-whitespace input yields the empty string. Idempotent.
pub fn trim(s: &str) -> &str {
    s.trim_matches(WHITESPACE)
}
