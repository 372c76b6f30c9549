//! String regularization for loosely-formatted plain-text log records.
//!
//! Submitted logs arrive with every end-of-line convention in the wild,
//! stray indentation before record tags, records wrapped across lines by
//! mail clients, and auxiliary records that must not reach tabulation.
//! This crate rewrites such text into a predictable form: `\n` line breaks
//! only, tags flush against the start of their line, one record per line.
//!
//! # Architecture
//!
//! - `eol.rs`: end-of-line translation state machine
//! - `records.rs`: tag-line cleanup and wrapped-record repair
//! - `trim.rs`: leading/trailing whitespace removal
//!
//! All functions are pure text rewriting: no I/O, no shared state, no
//! failure modes. Garbage in, best-effort text out.

pub mod eol;
pub mod records;
pub mod trim;

// Re-export commonly used functions
pub use eol::translate_eol;
pub use records::{fix_wrapped_lines, remove_space_before_tags, remove_xqso_lines};
pub use trim::trim;

/// Run the full regularization pipeline in record order:
/// EOL translation, tag-indent removal, wrapped-record repair,
/// auxiliary-record removal.
///
/// Downstream column inference assumes its input already went through
/// this pipeline (or at least through [`translate_eol`]).
pub fn regularize(text: &str) -> String {
    let text = translate_eol(text);
    let text = remove_space_before_tags(&text);
    let text = fix_wrapped_lines(&text);
    remove_xqso_lines(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_regularize_pipeline() {
        let raw = "START-OF-LOG: 3.0\r\n  CALLSIGN: W1AW\r\nX-QSO: 14000 CW\r\nQSO: 14000 CW\r\n  2024-01-01\r\nEND-OF-LOG:\r\n";
        let cleaned = regularize(raw);
        assert_eq!(
            cleaned,
            "START-OF-LOG: 3.0\nCALLSIGN: W1AW\nQSO: 14000 CW 2024-01-01\nEND-OF-LOG:\n"
        );
    }

    #[test]
    fn test_regularize_empty() {
        assert_eq!(regularize(""), "");
    }
}
