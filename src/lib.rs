//! Fuzzy title-relevance scoring for ranking search results.
//!
//! Given a candidate title and a user query, produce a single score in
//! [0, 100]. The pipeline balances exactness against tolerance: literal
//! phrase containment always outranks typo-tolerant, reordered, or partial
//! matches, via a layered tier table rather than one distance metric.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────┐     ┌───────────────┐
//! │ tokenize.rs │────▶│  stem.rs  │────▶│ similarity.rs │
//! │  (tokenize) │     │ (Stemmer) │     │ (word pairs)  │
//! └─────────────┘     └───────────┘     └───────┬───────┘
//!                                               │
//!                     ┌─────────────┐    ┌──────▼──────┐
//!                     │  score.rs   │◀───│ matchers.rs │
//!                     │ (tier table)│    │ (T/Q shape) │
//!                     └─────────────┘    └─────────────┘
//! ```
//!
//! Data flows one way: raw strings → tokens → stems → score. Every function
//! is pure; there is no state between calls, so scoring is safe to run
//! concurrently across candidates (see [`rank_titles`]).
//!
//! # Usage
//!
//! ```
//! use titlerank::relevance_score;
//!
//! // Exactness wins over everything
//! assert_eq!(relevance_score("One Piece", "one piece"), 100.0);
//!
//! // Prefix beats interior beats reordered
//! assert!(relevance_score("Naruto Shippuden", "Naruto")
//!     > relevance_score("The Return of Naruto", "Naruto"));
//! assert!(relevance_score("Naruto the Ninja", "Naruto Ninja")
//!     > relevance_score("Ninja Naruto", "Naruto Ninja"));
//! ```
//!
//! The stemmer is an injected capability: any `Fn(&str) -> String` or
//! [`Stemmer`] impl works. [`relevance_score`] defaults to the bundled
//! [`EnglishStemmer`]; [`relevance_score_with`] takes yours.

// Module declarations
mod levenshtein;
mod matchers;
mod rank;
mod score;
mod similarity;
mod stem;
mod tokenize;

// Re-exports for public API
pub use levenshtein::levenshtein;
pub use matchers::{all_words_present, find_adjacent_sequence, words_appear_in_order};
pub use rank::{rank_titles, Ranked};
pub use score::{
    classify, classify_with, evaluate_stems, relevance_score, relevance_score_with, Relevance,
    Tier, ADJACENT_AT_START_SCORE, ADJACENT_INSIDE_SCORE, ANY_ORDER_SCORE, EXACT_SCORE,
    IN_ORDER_SCORE, PARTIAL_CEILING, PHRASE_INNER_SCORE, PHRASE_PREFIX_SCORE,
};
pub use similarity::{
    is_fuzzy_match, stem_similarity, word_similarity, EDIT_RATIO_FLOOR, FUZZY_MATCH_THRESHOLD,
    SUBSTRING_SCORE,
};
pub use stem::{stem_sequence, EnglishStemmer, IdentityStemmer, Stemmer};
pub use tokenize::tokenize;
