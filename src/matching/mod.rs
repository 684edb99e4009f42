//! Exact substring search.
//!
//! Three interchangeable algorithms share one contract: given a text and a
//! non-empty pattern, return every start offset where the pattern occurs,
//! left to right, overlaps included.
//!
//! - [`naive_search`]: O(n·m) brute force
//! - [`kmp_search`]: Knuth-Morris-Pratt, O(n + m) via the failure function
//! - [`rabin_karp_search`]: rolling hash with full verification on hits
//!
//! Callers pick one through the closed [`Algorithm`] enum. An empty pattern
//! is rejected with [`MatchingError::InvalidPattern`] by every algorithm; a
//! pattern longer than the text simply finds nothing.
//!
//! ## Example
//!
//! ```rust
//! use doc_analyzer::matching::Algorithm;
//!
//! let found = Algorithm::Kmp.search("aaaa", "aa").unwrap();
//! assert_eq!(found.positions, vec![0, 1, 2]);
//! ```

pub mod engine;
pub mod kmp;
pub mod naive;
pub mod rabin_karp;

pub use engine::{fold_case, search, Algorithm, MatchResult, MatchingError};
pub use kmp::{failure_function, kmp_search};
pub use naive::naive_search;
pub use rabin_karp::rabin_karp_search;
