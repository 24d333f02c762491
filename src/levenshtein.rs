// Copyright 2026-present titlerank contributors
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein edit distance, single-row DP.
//!
//! The similarity ratio needs the exact distance, not a within-bound check,
//! so there is no early exit here. Word-sized inputs keep the O(nm) cost
//! trivial.

/// Exact edit distance (insertions, deletions, substitutions) between two
/// strings, counted in characters rather than bytes for Unicode correctness.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_len]
}
