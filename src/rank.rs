// Copyright 2026-present titlerank contributors
// SPDX-License-Identifier: Apache-2.0

//! Batch ranking: score a whole candidate list against one query.
//!
//! The scorer is pure, so candidates score independently and in parallel
//! (rayon, behind the `parallel` feature). Ordering is fully deterministic:
//! score descending, then title ascending, then original index - two runs
//! over the same input always produce the same list.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;

use crate::score::{evaluate_stems, Relevance, Tier};
use crate::stem::{stem_sequence, Stemmer};

/// One scored candidate.
#[derive(Debug, Clone, Serialize)]
pub struct Ranked {
    /// Position in the input list, before sorting.
    pub index: usize,
    pub title: String,
    pub score: f64,
    pub tier: Tier,
}

/// Score every candidate title against `query` and sort best-first.
///
/// The query is tokenized and stemmed once; each candidate once. Ties break
/// by title, then by input position, so the result order is deterministic.
pub fn rank_titles<S>(stemmer: &S, query: &str, titles: &[String]) -> Vec<Ranked>
where
    S: Stemmer + Sync + ?Sized,
{
    let query_stems = stem_sequence(stemmer, query);

    let score_one = |(index, title): (usize, &String)| {
        let Relevance { tier, score } = evaluate_stems(&stem_sequence(stemmer, title), &query_stems);
        Ranked {
            index,
            title: title.clone(),
            score,
            tier,
        }
    };

    #[cfg(feature = "parallel")]
    let mut ranked: Vec<Ranked> = titles.par_iter().enumerate().map(score_one).collect();

    #[cfg(not(feature = "parallel"))]
    let mut ranked: Vec<Ranked> = titles.iter().enumerate().map(score_one).collect();

    ranked.sort_by(compare_ranked);
    ranked
}

/// Sort order for ranked results:
///
/// 1. **Score** - descending.
/// 2. **Title** - ascending, alphabetical.
/// 3. **Index** - ascending, final tiebreaker for absolute determinism.
fn compare_ranked(a: &Ranked, b: &Ranked) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => match a.title.cmp(&b.title) {
            Ordering::Equal => a.index.cmp(&b.index),
            ord => ord,
        },
    }
}
