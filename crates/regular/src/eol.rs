//! End-of-line translation.
//!
//! Log files show up with Unix (`\n`), DOS (`\r\n`), old-Mac (`\r`), and
//! even Acorn-style (`\n\r`) line endings, sometimes mixed within one file.
//! [`translate_eol`] collapses every convention into a single `\n` so the
//! rest of the pipeline only ever deals with one break character.

/// State of the EOL scanner between characters.
#[derive(Clone, Copy, PartialEq, Eq)]
enum EolState {
    /// No pending break character.
    Text,
    /// A `\r` was seen and may still pair with a following `\n`.
    SeenCr,
    /// A `\n` was seen and may still pair with a following `\r`.
    SeenLf,
}

/// Translate all end-of-line conventions in `input` to bare `\n`.
///
/// A `\r\n` or `\n\r` pair becomes one `\n`; a lone `\r` or `\n` becomes
/// one `\n`; a trailing break at end of input is preserved as `\n`.
/// Runs of breaks map to the same number of `\n` as the number of logical
/// line ends they contain, e.g. `"\r\r\r"` becomes `"\n\n\n"` while
/// `"\r\n\r\n"` becomes `"\n\n"`.
pub fn translate_eol(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut state = EolState::Text;

    for ch in input.chars() {
        match ch {
            '\r' => match state {
                EolState::Text => state = EolState::SeenCr,
                // \r\r: the first was a lone break
                EolState::SeenCr => out.push('\n'),
                // \n\r pair collapses
                EolState::SeenLf => {
                    out.push('\n');
                    state = EolState::Text;
                }
            },
            '\n' => match state {
                EolState::Text => state = EolState::SeenLf,
                // \r\n pair collapses
                EolState::SeenCr => {
                    out.push('\n');
                    state = EolState::Text;
                }
                // \n\n: the first was a lone break
                EolState::SeenLf => out.push('\n'),
            },
            _ => {
                if state != EolState::Text {
                    out.push('\n');
                    state = EolState::Text;
                }
                out.push(ch);
            }
        }
    }

    // A break at end of input is still a break
    if state != EolState::Text {
        out.push('\n');
    }
    out
}
