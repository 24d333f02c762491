// Copyright 2026-present titlerank contributors
// SPDX-License-Identifier: Apache-2.0

//! Pairwise word similarity in [0, 1].
//!
//! Three rules, first hit wins: equal stems, substring containment, edit
//! ratio. The constants are deliberately not the same number:
//!
//! | Constant | Value | Why this value |
//! |----------|-------|----------------|
//! | `SUBSTRING_SCORE` | 0.8 | Fixed ceiling for containment - computed length ratios would over-reward long substrings |
//! | `EDIT_RATIO_FLOOR` | 0.6 | Below this, edit similarity clamps to 0.0 and cannot leak into fuzzy matching |
//! | `FUZZY_MATCH_THRESHOLD` | 0.7 | What the structural matchers call a match |
//!
//! The gap between 0.6 and 0.7 is intentional hysteresis: a pair in the
//! 0.6-0.69 band contributes to the fallback average but never counts as
//! "present" for the structural matchers. Do not unify the two constants.

use crate::levenshtein::levenshtein;
use crate::stem::Stemmer;

/// Similarity returned when one stem contains the other.
pub const SUBSTRING_SCORE: f64 = 0.8;

/// Minimum edit ratio that produces a nonzero similarity.
pub const EDIT_RATIO_FLOOR: f64 = 0.6;

/// Minimum similarity for the structural matchers to call a pair a match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Similarity between two already-stemmed words.
///
/// 1. Equal stems → 1.0.
/// 2. Either stem a substring of the other → [`SUBSTRING_SCORE`].
/// 3. Otherwise `(max_len - distance) / max_len` if at least
///    [`EDIT_RATIO_FLOOR`], else 0.0. Lengths are character counts.
///
/// Deterministic, and symmetric as it happens - though callers should not
/// rely on symmetry.
pub fn stem_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    // Tokens are never empty, but stems come from an injected function.
    // An empty stem against a non-empty one is "no similarity", not a
    // trivial substring hit.
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a.contains(b) || b.contains(a) {
        return SUBSTRING_SCORE;
    }

    let max_len = a.chars().count().max(b.chars().count());
    let distance = levenshtein(a, b);
    let ratio = (max_len - distance) as f64 / max_len as f64;

    if ratio >= EDIT_RATIO_FLOOR {
        ratio
    } else {
        0.0
    }
}

/// Similarity between two raw words: stem both, then compare.
///
/// The scoring pipeline stems whole sequences up front and calls
/// [`stem_similarity`] directly; this entry point is for hosts comparing
/// individual words.
pub fn word_similarity<S: Stemmer + ?Sized>(stemmer: &S, a: &str, b: &str) -> f64 {
    stem_similarity(&stemmer.stem(a), &stemmer.stem(b))
}

/// The structural matchers' predicate: similarity at or above
/// [`FUZZY_MATCH_THRESHOLD`].
pub fn is_fuzzy_match(a: &str, b: &str) -> bool {
    stem_similarity(a, b) >= FUZZY_MATCH_THRESHOLD
}
