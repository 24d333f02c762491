//! Text normalization and word splitting.
//!
//! Everything downstream (similarity, matchers, the tier table) operates on
//! the token sequences produced here, so this is the single place where
//! casing and punctuation get erased.

/// Split raw text into normalized word tokens.
///
/// Steps, in order:
/// 1. Lowercase (simple case folding, no locale tailoring).
/// 2. Drop apostrophes entirely, so `"don't"` becomes `"dont"` rather than
///    `"don t"`.
/// 3. Treat every remaining non-word, non-hyphen character as a separator.
/// 4. Split on runs of whitespace, hyphens, and underscores.
///
/// Empty and punctuation-only input yield an empty sequence.
///
/// # Example
///
/// ```
/// use titlerank::tokenize;
///
/// assert_eq!(tokenize("One-Piece!"), vec!["one", "piece"]);
/// assert_eq!(tokenize("Don't Stop"), vec!["dont", "stop"]);
/// assert!(tokenize("...!?").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    let mut cleaned = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        if is_apostrophe(c) {
            continue;
        }
        if c.is_alphanumeric() || c == '_' || c == '-' {
            cleaned.push(c);
        } else {
            cleaned.push(' ');
        }
    }

    cleaned
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Straight or curly apostrophe.
fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}
