// Copyright 2026-present titlerank contributors
// SPDX-License-Identifier: Apache-2.0

//! The tier table: how a (title, query) pair becomes a number.
//!
//! Eight tiers, checked strictly in order, first hit wins. Exact containment
//! of the whole query phrase outranks any fuzzy or reordered match - even an
//! adjacency hit that starts earlier - and position-0 matches outrank
//! interior ones because search UIs favor titles that *begin with* the
//! query. The fallback tier turns genuinely partial matches into a smooth
//! sub-70 ranking instead of a hard 0/1 cutoff.
//!
//! # Score constants
//!
//! | Tier | Condition | Score |
//! |------|-----------|-------|
//! | Exact | concatenated stems equal | 100 |
//! | PhrasePrefix | stemmed query phrase starts the stemmed title phrase | 99 |
//! | PhraseInner | stemmed query phrase inside it, on word boundaries | 95 |
//! | AdjacentAtStart | fuzzy adjacent window at index 0 | 90 |
//! | AdjacentInside | fuzzy adjacent window at index > 0 | 85 |
//! | InOrder | all query words present, in order | 80 |
//! | AnyOrder | all query words present, out of order | 75 |
//! | Partial | weighted fallback | 0-70 |
//!
//! The gaps are deliberate: changing any constant reorders real result
//! lists, so treat the table as frozen.

use serde::Serialize;

use crate::matchers::{all_words_present, find_adjacent_sequence, words_appear_in_order};
use crate::similarity::{stem_similarity, FUZZY_MATCH_THRESHOLD};
use crate::stem::{stem_sequence, EnglishStemmer, Stemmer};

/// Score for an exact stemmed match.
pub const EXACT_SCORE: f64 = 100.0;

/// Score when the query phrase is a whole-word prefix of the title phrase.
pub const PHRASE_PREFIX_SCORE: f64 = 99.0;

/// Score when the query phrase appears inside the title phrase on word
/// boundaries.
pub const PHRASE_INNER_SCORE: f64 = 95.0;

/// Score for a fuzzy adjacent window at the start of the title.
pub const ADJACENT_AT_START_SCORE: f64 = 90.0;

/// Score for a fuzzy adjacent window anywhere else.
pub const ADJACENT_INSIDE_SCORE: f64 = 85.0;

/// Score when every query word is present and in order.
pub const IN_ORDER_SCORE: f64 = 80.0;

/// Score when every query word is present but out of order.
pub const ANY_ORDER_SCORE: f64 = 75.0;

/// Ceiling for the partial-match fallback.
pub const PARTIAL_CEILING: f64 = 70.0;

/// Which tier produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Exact,
    PhrasePrefix,
    PhraseInner,
    AdjacentAtStart,
    AdjacentInside,
    InOrder,
    AnyOrder,
    Partial,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tier::Exact => "exact",
            Tier::PhrasePrefix => "phrase-prefix",
            Tier::PhraseInner => "phrase-inner",
            Tier::AdjacentAtStart => "adjacent-at-start",
            Tier::AdjacentInside => "adjacent-inside",
            Tier::InOrder => "in-order",
            Tier::AnyOrder => "any-order",
            Tier::Partial => "partial",
        };
        f.write_str(name)
    }
}

/// A classified score: the tier that fired and the number it produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Relevance {
    pub tier: Tier,
    pub score: f64,
}

/// Score a candidate title against a search query, in [0, 100].
///
/// Total and deterministic: any pair of strings, including empty or
/// punctuation-only ones, resolves to a number. Uses [`EnglishStemmer`];
/// see [`relevance_score_with`] to inject another stemmer.
///
/// # Example
///
/// ```
/// use titlerank::relevance_score;
///
/// assert_eq!(relevance_score("Naruto", "Naruto"), 100.0);
/// assert_eq!(relevance_score("Naruto Shippuden", "Naruto"), 99.0);
/// assert_eq!(relevance_score("The Return of Naruto", "Naruto"), 95.0);
/// ```
pub fn relevance_score(title: &str, query: &str) -> f64 {
    relevance_score_with(&EnglishStemmer, title, query)
}

/// [`relevance_score`] with an injected stemmer.
pub fn relevance_score_with<S: Stemmer + ?Sized>(stemmer: &S, title: &str, query: &str) -> f64 {
    classify_with(stemmer, title, query).score
}

/// Score a pair and report which tier fired.
pub fn classify(title: &str, query: &str) -> Relevance {
    classify_with(&EnglishStemmer, title, query)
}

/// [`classify`] with an injected stemmer.
pub fn classify_with<S: Stemmer + ?Sized>(stemmer: &S, title: &str, query: &str) -> Relevance {
    evaluate_stems(&stem_sequence(stemmer, title), &stem_sequence(stemmer, query))
}

/// The tier table itself, over pre-stemmed sequences.
///
/// Each input string is tokenized and stemmed exactly once before this runs,
/// so no token is stemmed twice within one call.
pub fn evaluate_stems(title: &[String], query: &[String]) -> Relevance {
    // An empty query would satisfy tiers 6/7 vacuously and divide by zero in
    // the fallback. It matches nothing, so it scores nothing.
    if query.is_empty() {
        return Relevance {
            tier: Tier::Partial,
            score: 0.0,
        };
    }

    // Tier 1: identical after stemming. Concatenation (no separators)
    // deliberately ignores where the word breaks fell.
    if title.concat() == query.concat() {
        return Relevance {
            tier: Tier::Exact,
            score: EXACT_SCORE,
        };
    }

    let title_phrase = title.join(" ");
    let query_phrase = query.join(" ");

    // Tier 2: query phrase starts the title phrase, ending on a word
    // boundary.
    if phrase_starts_with(&title_phrase, &query_phrase) {
        return Relevance {
            tier: Tier::PhrasePrefix,
            score: PHRASE_PREFIX_SCORE,
        };
    }

    // Tier 3: query phrase anywhere inside the title phrase, bounded by
    // word breaks on both sides.
    if phrase_contains(&title_phrase, &query_phrase) {
        return Relevance {
            tier: Tier::PhraseInner,
            score: PHRASE_INNER_SCORE,
        };
    }

    // Tiers 4/5: contiguous fuzzy window, position decides the tier.
    match find_adjacent_sequence(title, query) {
        Some(0) => {
            return Relevance {
                tier: Tier::AdjacentAtStart,
                score: ADJACENT_AT_START_SCORE,
            }
        }
        Some(_) => {
            return Relevance {
                tier: Tier::AdjacentInside,
                score: ADJACENT_INSIDE_SCORE,
            }
        }
        None => {}
    }

    // Tiers 6/7: every query word present somewhere; order is the tiebreak.
    if all_words_present(title, query) {
        let tier = if words_appear_in_order(title, query) {
            Tier::InOrder
        } else {
            Tier::AnyOrder
        };
        let score = match tier {
            Tier::InOrder => IN_ORDER_SCORE,
            _ => ANY_ORDER_SCORE,
        };
        return Relevance { tier, score };
    }

    // Tier 8: at least one query word has no fuzzy match. Blend how many
    // matched with how close the rest came. The per-word maxima may sit in
    // the raw 0.6-0.69 band the structural matchers refuse.
    Relevance {
        tier: Tier::Partial,
        score: partial_score(title, query),
    }
}

/// Does `phrase` start with `prefix`, with a word boundary after it?
fn phrase_starts_with(phrase: &str, prefix: &str) -> bool {
    phrase.strip_prefix(prefix).is_some_and(|rest| {
        rest.is_empty() || rest.starts_with(' ')
    })
}

/// Does `phrase` contain `needle` bounded by word breaks on both sides?
///
/// Stems contain no spaces, so boundary checks against the single space
/// separator are exact.
fn phrase_contains(phrase: &str, needle: &str) -> bool {
    phrase.match_indices(needle).any(|(at, _)| {
        let before_ok = at == 0 || phrase.as_bytes()[at - 1] == b' ';
        let end = at + needle.len();
        let after_ok = end == phrase.len() || phrase.as_bytes()[end] == b' ';
        before_ok && after_ok
    })
}

/// The sub-70 fallback: `avg_max_similarity * 70 * proportion_matched`.
fn partial_score(title: &[String], query: &[String]) -> f64 {
    let mut matched = 0usize;
    let mut similarity_sum = 0.0;

    for q in query {
        let best = title
            .iter()
            .map(|t| stem_similarity(q, t))
            .fold(0.0, f64::max);

        if best >= FUZZY_MATCH_THRESHOLD {
            matched += 1;
        }
        similarity_sum += best;
    }

    let proportion = matched as f64 / query.len() as f64;
    let average = similarity_sum / query.len() as f64;

    (average * PARTIAL_CEILING * proportion).clamp(0.0, PARTIAL_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::IdentityStemmer;

    #[test]
    fn test_tier_exact() {
        let r = classify("Naruto", "Naruto");
        assert_eq!(r.tier, Tier::Exact);
        assert_eq!(r.score, 100.0);
    }

    #[test]
    fn test_tier_exact_ignores_word_breaks() {
        // Concatenated stems are equal even though the token boundaries
        // differ.
        let r = classify("note book", "notebook");
        assert_eq!(r.tier, Tier::Exact);
    }

    #[test]
    fn test_tier_phrase_prefix() {
        let r = classify("Naruto Shippuden", "Naruto");
        assert_eq!(r.tier, Tier::PhrasePrefix);
        assert_eq!(r.score, 99.0);
    }

    #[test]
    fn test_tier_phrase_inner() {
        let r = classify("The Return of Naruto", "Naruto");
        assert_eq!(r.tier, Tier::PhraseInner);
        assert_eq!(r.score, 95.0);
    }

    #[test]
    fn test_phrase_boundary_not_mid_word() {
        // "aru" appears inside "naruto" but not on a word boundary, so the
        // phrase tiers must not fire; "aru"/"naruto" is a substring pair at
        // 0.8, so the adjacency tier catches it instead.
        let r = classify("naruto", "aru");
        assert_eq!(r.tier, Tier::AdjacentAtStart);
    }

    #[test]
    fn test_tier_adjacent_at_start_needs_fuzz() {
        // A typo keeps it out of the phrase tiers but adjacency still holds
        // at index 0.
        let r = classify("Narufo Shippuden", "Naruto Shippuden");
        assert_eq!(r.tier, Tier::AdjacentAtStart);
        assert_eq!(r.score, 90.0);
    }

    #[test]
    fn test_tier_adjacent_inside() {
        let r = classify("Super Naruto Ninja Saga", "Naruto Ninja");
        assert_eq!(r.tier, Tier::AdjacentInside);
        assert_eq!(r.score, 85.0);
    }

    #[test]
    fn test_tier_in_order() {
        let r = classify("Naruto the Ninja", "Naruto Ninja");
        assert_eq!(r.tier, Tier::InOrder);
        assert_eq!(r.score, 80.0);
    }

    #[test]
    fn test_tier_any_order() {
        let r = classify("Ninja Naruto", "Naruto Ninja");
        assert_eq!(r.tier, Tier::AnyOrder);
        assert_eq!(r.score, 75.0);
    }

    #[test]
    fn test_tier_partial() {
        let r = classify("Naruto Uzumaki", "Naruto Bleach");
        assert_eq!(r.tier, Tier::Partial);
        assert!(r.score > 0.0 && r.score <= 70.0);
    }

    #[test]
    fn test_partial_no_overlap_is_zero() {
        assert_eq!(relevance_score("Bleach", "Hunter"), 0.0);
    }

    #[test]
    fn test_empty_query_scores_zero() {
        assert_eq!(relevance_score("Naruto", ""), 0.0);
        assert_eq!(relevance_score("", ""), 0.0);
        assert_eq!(relevance_score("", "Naruto"), 0.0);
    }

    #[test]
    fn test_partial_math() {
        // Query: [naruto, bleach] vs title [naruto]. "naruto" matches at
        // 1.0; "bleach" has no similarity. proportion = 1/2, average = 1/2.
        let score = relevance_score_with(&IdentityStemmer, "naruto", "naruto bleach");
        assert!((score - 0.5 * 70.0 * 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_partial_uses_raw_band() {
        // narotu-vs-naruto sits at 4/6 ≈ 0.667: too low to be "present",
        // but it still lifts the average once another query word matches.
        let with_band = relevance_score_with(&IdentityStemmer, "naruto", "naruto narotu");
        let without = relevance_score_with(&IdentityStemmer, "naruto", "naruto kenshin");
        assert!(with_band > without);
    }

    #[test]
    fn test_stemming_buys_equivalence() {
        // Plural title vs singular query stems to the same phrase.
        let r = classify("Ninjas", "Ninja");
        assert_eq!(r.tier, Tier::Exact);
    }

    #[test]
    fn test_tier_ladder_strictly_ordered() {
        let ladder = [
            relevance_score("Naruto", "Naruto"),
            relevance_score("Naruto Shippuden", "Naruto"),
            relevance_score("The Return of Naruto", "Naruto"),
            relevance_score("Narufo Shippuden", "Naruto Shippuden"),
            relevance_score("Super Naruto Ninja Saga", "Naruto Ninja"),
            relevance_score("Naruto the Ninja", "Naruto Ninja"),
            relevance_score("Ninja Naruto", "Naruto Ninja"),
            relevance_score("Naruto Uzumaki", "Naruto Bleach"),
        ];
        for pair in ladder.windows(2) {
            assert!(pair[0] > pair[1], "ladder not strict: {:?}", ladder);
        }
    }
}
