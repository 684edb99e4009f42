//! Phrase-level similarity between two documents.
//!
//! The source document is cut into overlapping phrases of `window_size`
//! words (stride one word). Each phrase is searched verbatim in the
//! comparison document with the caller's [`Algorithm`](crate::matching::Algorithm),
//! and the share of phrases found becomes the similarity percentage.
//!
//! ## Example
//!
//! ```rust
//! use doc_analyzer::matching::Algorithm;
//! use doc_analyzer::similarity::score;
//!
//! let report = score(
//!     "the quick brown fox jumps",
//!     "the quick brown fox jumps over the lazy dog",
//!     4,
//!     Algorithm::Kmp,
//! )
//! .unwrap();
//! assert_eq!(report.matched_phrases, 2);
//! assert!((report.percentage - 100.0).abs() < 1e-9);
//! ```

pub mod phrases;
pub mod scoring;

pub use phrases::segment;
pub use scoring::{
    score, PhraseMatch, ScoringConfig, SimilarityError, SimilarityReport, SimilarityScorer,
    DEFAULT_WINDOW_SIZE,
};
