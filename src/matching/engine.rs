use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::Symbol;
use crate::matching::kmp::kmp_search;
use crate::matching::naive::naive_search;
use crate::matching::rabin_karp::rabin_karp_search;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchingError {
    #[error("Invalid pattern: the search pattern is empty")]
    InvalidPattern,
}

/// Start offsets (in chars) of every occurrence of a pattern, left to right.
///
/// Empty means the pattern was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchResult {
    pub positions: Vec<usize>,
}

impl MatchResult {
    #[must_use]
    pub fn new(positions: Vec<usize>) -> Self {
        Self { positions }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }
}

/// Exact substring search algorithm, chosen explicitly by the caller
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Brute-force comparison at every offset
    Naive,
    /// Knuth-Morris-Pratt with a failure function
    #[default]
    Kmp,
    /// Rabin-Karp rolling hash with verification
    RabinKarp,
}

impl Algorithm {
    /// All algorithms, in a fixed order
    pub const ALL: [Algorithm; 3] = [Algorithm::Naive, Algorithm::Kmp, Algorithm::RabinKarp];

    /// Find every occurrence of `pattern` in `text`.
    ///
    /// Offsets are counted in chars. Overlapping matches are all reported.
    ///
    /// # Errors
    ///
    /// Returns `MatchingError::InvalidPattern` if `pattern` is empty.
    pub fn search(self, text: &str, pattern: &str) -> Result<MatchResult, MatchingError> {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        self.search_symbols(&text, &pattern)
    }

    /// Same as [`Algorithm::search`] over pre-split symbols.
    ///
    /// # Errors
    ///
    /// Returns `MatchingError::InvalidPattern` if `pattern` is empty.
    pub fn search_symbols<T>(self, text: &[T], pattern: &[T]) -> Result<MatchResult, MatchingError>
    where
        T: Copy + PartialEq + Into<u32>,
    {
        if pattern.is_empty() {
            return Err(MatchingError::InvalidPattern);
        }

        let positions = match self {
            Algorithm::Naive => naive_search(text, pattern),
            Algorithm::Kmp => kmp_search(text, pattern),
            Algorithm::RabinKarp => rabin_karp_search(text, pattern),
        };
        Ok(MatchResult::new(positions))
    }

    /// Case-insensitive [`Algorithm::search`].
    ///
    /// Both sides go through [`fold_case`] symbol by symbol, so the folded
    /// text has the same length as the original and offsets point into the
    /// original text unchanged.
    ///
    /// # Errors
    ///
    /// Returns `MatchingError::InvalidPattern` if `pattern` is empty.
    pub fn search_ignore_case(
        self,
        text: &str,
        pattern: &str,
    ) -> Result<MatchResult, MatchingError> {
        let text: Vec<Symbol> = text.chars().map(fold_case).collect();
        let pattern: Vec<Symbol> = pattern.chars().map(fold_case).collect();
        self.search_symbols(&text, &pattern)
    }
}

/// Lowercase `symbol` when its lowercase form is a single symbol.
///
/// Symbols whose lowercase form expands (e.g. `'İ'` to `"i̇"`) are kept as
/// they are, so folding never shifts offsets.
#[must_use]
pub fn fold_case(symbol: Symbol) -> Symbol {
    let mut lower = symbol.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => c,
        _ => symbol,
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Naive => write!(f, "Naive"),
            Self::Kmp => write!(f, "KMP"),
            Self::RabinKarp => write!(f, "Rabin-Karp"),
        }
    }
}

/// Find every occurrence of `pattern` in `text` with `algorithm`.
///
/// # Errors
///
/// Returns `MatchingError::InvalidPattern` if `pattern` is empty.
pub fn search(
    algorithm: Algorithm,
    text: &str,
    pattern: &str,
) -> Result<MatchResult, MatchingError> {
    algorithm.search(text, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_example_all_algorithms() {
        for algorithm in Algorithm::ALL {
            let result = search(algorithm, "Hello World! this is Computer Science", "Computer")
                .unwrap();
            assert_eq!(result.positions, vec![21], "{algorithm}");
        }
    }

    #[test]
    fn test_overlap_all_algorithms() {
        for algorithm in Algorithm::ALL {
            assert_eq!(
                algorithm.search("aaaa", "aa").unwrap().positions,
                vec![0, 1, 2],
                "{algorithm}"
            );
        }
    }

    #[test]
    fn test_empty_pattern_rejected_by_all() {
        for algorithm in Algorithm::ALL {
            assert_eq!(
                algorithm.search("abc", ""),
                Err(MatchingError::InvalidPattern)
            );
            assert_eq!(algorithm.search("", ""), Err(MatchingError::InvalidPattern));
        }
    }

    #[test]
    fn test_empty_text_gives_empty_result() {
        for algorithm in Algorithm::ALL {
            assert!(algorithm.search("", "a").unwrap().is_empty());
        }
    }

    #[test]
    fn test_ignore_case_all_algorithms() {
        for algorithm in Algorithm::ALL {
            let found = algorithm
                .search_ignore_case("Hello HELLO hello", "hELLo")
                .unwrap();
            assert_eq!(found.positions, vec![0, 6, 12], "{algorithm}");
            assert_eq!(
                algorithm.search("Hello HELLO hello", "hello").unwrap().positions,
                vec![12]
            );
        }
    }

    #[test]
    fn test_ignore_case_keeps_offsets_when_folding_expands() {
        // 'İ' lowercases to two chars; it must stay one symbol wide
        assert_eq!(fold_case('İ'), 'İ');
        assert_eq!(fold_case('Ä'), 'ä');
        let found = Algorithm::Kmp
            .search_ignore_case("İSTANBUL and istanbul", "Istanbul")
            .unwrap();
        assert_eq!(found.positions, vec![13]);
        let found = Algorithm::Naive
            .search_ignore_case("İx İX", "x")
            .unwrap();
        assert_eq!(found.positions, vec![1, 4]);
    }

    #[test]
    fn test_ignore_case_rejects_empty_pattern() {
        assert_eq!(
            Algorithm::RabinKarp.search_ignore_case("abc", ""),
            Err(MatchingError::InvalidPattern)
        );
    }

    #[test]
    fn test_offsets_are_in_chars() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.search("ééxé", "x").unwrap().positions, vec![2]);
        }
    }

    #[test]
    fn test_search_symbols_on_bytes() {
        let result = Algorithm::RabinKarp
            .search_symbols(b"GATTACA GATTACA".as_slice(), b"TTA".as_slice())
            .unwrap();
        assert_eq!(result.positions, vec![2, 10]);
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(Algorithm::RabinKarp.to_string(), "Rabin-Karp");
        assert_eq!(
            serde_json::to_string(&Algorithm::RabinKarp).unwrap(),
            "\"rabin-karp\""
        );
        assert_eq!(Algorithm::default(), Algorithm::Kmp);
    }
}
