use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::core::types::SimilarityLevel;
use crate::matching::{Algorithm, MatchResult, MatchingError};
use crate::similarity::phrases::segment;
use crate::utils::numeric::count_to_f64;

/// Phrase length used when the caller does not pick one
pub const DEFAULT_WINDOW_SIZE: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    #[error("Invalid window size: a phrase must contain at least one word")]
    InvalidWindowSize,

    #[error(transparent)]
    Matching(#[from] MatchingError),
}

/// A source phrase and where it occurs in the comparison document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseMatch {
    pub phrase: String,
    pub positions: MatchResult,
}

/// Outcome of comparing a source document against a comparison document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    /// Number of phrases taken from the source document
    pub total_phrases: usize,

    /// Number of those phrases found at least once in the comparison
    pub matched_phrases: usize,

    /// `matched / total * 100`, or 0 when there were no phrases
    pub percentage: f64,

    /// Coarse classification of `percentage`
    pub level: SimilarityLevel,

    /// Matched phrases in source order
    pub matches: Vec<PhraseMatch>,

    pub algorithm: Algorithm,
    pub window_size: usize,
}

/// Configuration for the similarity scorer
#[derive(Debug, Clone, Copy)]
pub struct ScoringConfig {
    /// Words per phrase
    pub window_size: usize,
    /// Matching algorithm used to look phrases up
    pub algorithm: Algorithm,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            algorithm: Algorithm::default(),
        }
    }
}

/// Phrase-window similarity scorer
#[derive(Debug, Clone, Default)]
pub struct SimilarityScorer {
    config: ScoringConfig,
}

impl SimilarityScorer {
    /// Create a scorer with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Look up every phrase of `source` in `comparison`.
    ///
    /// # Errors
    ///
    /// Returns `SimilarityError::InvalidWindowSize` if the window is 0.
    pub fn score(
        &self,
        source: &str,
        comparison: &str,
    ) -> Result<SimilarityReport, SimilarityError> {
        let ScoringConfig {
            window_size,
            algorithm,
        } = self.config;

        if window_size == 0 {
            return Err(SimilarityError::InvalidWindowSize);
        }

        let phrases = segment(source, window_size);
        let corpus: Vec<char> = comparison.chars().collect();

        let mut matches = Vec::new();
        for phrase in &phrases {
            let pattern: Vec<char> = phrase.chars().collect();
            let positions = algorithm.search_symbols(&corpus, &pattern)?;
            if !positions.is_empty() {
                matches.push(PhraseMatch {
                    phrase: phrase.clone(),
                    positions,
                });
            }
        }

        let total_phrases = phrases.len();
        let matched_phrases = matches.len();
        let percentage = if total_phrases == 0 {
            0.0
        } else {
            count_to_f64(matched_phrases) / count_to_f64(total_phrases) * 100.0
        };

        debug!(
            %algorithm,
            window_size,
            total_phrases,
            matched_phrases,
            "scored document similarity"
        );

        Ok(SimilarityReport {
            total_phrases,
            matched_phrases,
            percentage,
            level: SimilarityLevel::from_percentage(percentage),
            matches,
            algorithm,
            window_size,
        })
    }
}

/// Score how much of `source` appears verbatim in `comparison`.
///
/// # Errors
///
/// Returns `SimilarityError::InvalidWindowSize` if `window_size` is 0.
pub fn score(
    source: &str,
    comparison: &str,
    window_size: usize,
    algorithm: Algorithm,
) -> Result<SimilarityReport, SimilarityError> {
    SimilarityScorer::with_config(ScoringConfig {
        window_size,
        algorithm,
    })
    .score(source, comparison)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_overlap() {
        for algorithm in Algorithm::ALL {
            let report = score(
                "the quick brown fox jumps",
                "the quick brown fox jumps over the lazy dog",
                4,
                algorithm,
            )
            .unwrap();
            assert_eq!(report.total_phrases, 2);
            assert_eq!(report.matched_phrases, 2);
            assert!((report.percentage - 100.0).abs() < 1e-9);
            assert_eq!(report.level, SimilarityLevel::High);
            assert_eq!(report.matches[0].phrase, "the quick brown fox");
            assert_eq!(report.matches[0].positions.positions, vec![0]);
            assert_eq!(report.matches[1].phrase, "quick brown fox jumps");
            assert_eq!(report.matches[1].positions.positions, vec![4]);
        }
    }

    #[test]
    fn test_partial_overlap() {
        let report = score(
            "one two three four five six",
            "xx two three yy four five six zz",
            2,
            Algorithm::RabinKarp,
        )
        .unwrap();
        // one two | two three | three four | four five | five six
        assert_eq!(report.total_phrases, 5);
        assert_eq!(report.matched_phrases, 3);
        assert!((report.percentage - 60.0).abs() < 1e-9);
        assert_eq!(report.level, SimilarityLevel::Medium);
        let phrases: Vec<&str> = report.matches.iter().map(|m| m.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["two three", "four five", "five six"]);
    }

    #[test]
    fn test_short_document_scores_zero() {
        let report = score("too short", "too short", 4, Algorithm::Kmp).unwrap();
        assert_eq!(report.total_phrases, 0);
        assert!(report.percentage.abs() < 1e-9);
        assert!(report.matches.is_empty());
        assert_eq!(report.level, SimilarityLevel::Low);
    }

    #[test]
    fn test_zero_window_rejected() {
        assert_eq!(
            score("a b", "a b", 0, Algorithm::Naive),
            Err(SimilarityError::InvalidWindowSize)
        );
    }

    #[test]
    fn test_repeated_phrase_reports_all_positions() {
        let report = score("red fish", "red fish blue fish red fish", 2, Algorithm::Naive).unwrap();
        assert_eq!(report.matches[0].positions.positions, vec![0, 19]);
    }

    #[test]
    fn test_default_config() {
        let scorer = SimilarityScorer::new();
        assert_eq!(scorer.config().window_size, DEFAULT_WINDOW_SIZE);
        assert_eq!(scorer.config().algorithm, Algorithm::Kmp);
    }
}
