// Copyright 2026-present titlerank contributors
// SPDX-License-Identifier: Apache-2.0

//! Structural matchers over stemmed word sequences.
//!
//! Three independent checks, in decreasing strictness: adjacent window,
//! in-order subsequence, unordered presence. Each is a separate function
//! with its own early-return contract - the tier table in `score.rs` depends
//! on consulting them in a fixed priority order, so they must not be
//! collapsed into one loop.
//!
//! All three use the same predicate: [`is_fuzzy_match`], similarity at or
//! above 0.7 between stems.

use crate::similarity::is_fuzzy_match;

/// Find the smallest start index in `title` where the query stems match a
/// contiguous window, each query word fuzzily matching the aligned title
/// word.
///
/// Returns `None` when the query is empty, longer than the title, or no
/// window matches. Callers distinguish index 0 from interior hits - they are
/// different score tiers.
pub fn find_adjacent_sequence(title: &[String], query: &[String]) -> Option<usize> {
    if query.is_empty() || query.len() > title.len() {
        return None;
    }

    (0..=title.len() - query.len()).find(|&start| {
        query
            .iter()
            .zip(&title[start..])
            .all(|(q, t)| is_fuzzy_match(q, t))
    })
}

/// Do all query words appear in the title in order, not necessarily
/// adjacent?
///
/// Greedy left-to-right walk: each query word consumes the first title word
/// from the cursor onward that fuzzily matches it. Greediness is part of the
/// contract - a title word eaten by an earlier query word is gone, even if a
/// smarter assignment would have left it for a later one.
pub fn words_appear_in_order(title: &[String], query: &[String]) -> bool {
    let mut cursor = 0;

    for q in query {
        loop {
            if cursor == title.len() {
                return false;
            }
            let matched = is_fuzzy_match(q, &title[cursor]);
            cursor += 1;
            if matched {
                break;
            }
        }
    }

    true
}

/// Does every query word have at least one fuzzy match somewhere in the
/// title? Position-independent, and the same title word may satisfy several
/// query words.
pub fn all_words_present(title: &[String], query: &[String]) -> bool {
    query
        .iter()
        .all(|q| title.iter().any(|t| is_fuzzy_match(q, t)))
}
