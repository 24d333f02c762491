// Copyright 2026-present titlerank contributors
// SPDX-License-Identifier: Apache-2.0

//! The stemmer seam: where the host's linguistic capability plugs in.
//!
//! The scorer never compares raw tokens; it compares stems. What "stem"
//! means is up to the host - the only contract is a total, deterministic,
//! pure function from token to stem. That keeps the scoring pipeline
//! testable in isolation with [`IdentityStemmer`] and lets a host wire in a
//! real morphological stemmer with a closure.

/// A token-to-stem mapping supplied by the host.
///
/// Requirements: deterministic, pure, total over lowercase alphanumeric
/// tokens (including 1-character tokens). Tokens the stemmer does not
/// recognize must come back unchanged - there is no failure mode.
pub trait Stemmer {
    /// Map one token to its canonical root form.
    fn stem(&self, token: &str) -> String;
}

/// Any `Fn(&str) -> String` closure is a stemmer. This is the escape hatch
/// for hosts with an existing stemming function.
impl<F> Stemmer for F
where
    F: Fn(&str) -> String,
{
    fn stem(&self, token: &str) -> String {
        self(token)
    }
}

/// The no-op stemmer: every token is its own stem.
///
/// Used as the testing fake and by the CLI's `--identity` flag. With this
/// stemmer, "word equivalence" degenerates to plain string equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, token: &str) -> String {
        token.to_string()
    }
}

/// A deliberately tiny English plural folder.
///
/// This is not a full Porter stemmer. It handles the plural and final-y
/// forms that matter for title matching ("ninjas" vs "ninja", "stories" vs
/// "story") and passes everything else through unchanged:
///
/// | Input ending | Rewrite | Example |
/// |--------------|---------|---------|
/// | `sses`       | `ss`    | classes → class |
/// | `ies`        | `i`     | stories → stori |
/// | `s` (not `ss`/`us`) | dropped | ninjas → ninja |
/// | vowel + `y`  | `i`     | story → stori |
///
/// Hosts wanting real morphology should inject their own [`Stemmer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishStemmer;

impl Stemmer for EnglishStemmer {
    fn stem(&self, token: &str) -> String {
        let mut stem = token.to_string();

        // Plural folding. Length guards keep short function words ("is",
        // "as", "us") intact.
        if stem.len() > 4 && stem.ends_with("sses") {
            stem.truncate(stem.len() - 2);
        } else if stem.len() > 4 && stem.ends_with("ies") {
            stem.truncate(stem.len() - 2);
        } else if stem.len() > 3
            && stem.ends_with('s')
            && !stem.ends_with("ss")
            && !stem.ends_with("us")
        {
            stem.truncate(stem.len() - 1);
        }

        // Final y -> i when the rest of the word contains a vowel, so the
        // singular meets its folded plural: story -> stori, stories -> stori.
        if stem.len() > 2 && stem.ends_with('y') {
            let body = &stem[..stem.len() - 1];
            if body.chars().any(is_vowel) {
                stem.truncate(stem.len() - 1);
                stem.push('i');
            }
        }

        stem
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Tokenize `text` and stem each token once.
///
/// This is the only place stems are computed, so within one scoring call no
/// token is ever stemmed twice.
pub fn stem_sequence<S: Stemmer + ?Sized>(stemmer: &S, text: &str) -> Vec<String> {
    crate::tokenize(text)
        .iter()
        .map(|token| stemmer.stem(token))
        .collect()
}
