//! # doc-analyzer
//!
//! A document analysis engine: Huffman compression of text and exact phrase
//! matching for plagiarism-style similarity checks.
//!
//! Every operation is a synchronous transformation over in-memory text.
//! Symbols are Unicode scalar values (`char`), so offsets and counts are in
//! chars, not bytes. File access lives in the [`cli`] layer only.
//!
//! ## Features
//!
//! - **Huffman codec**: deterministic tree construction, prefix-free codes,
//!   front-padded byte packing with explicit padding bookkeeping
//! - **Substring search**: naive, Knuth-Morris-Pratt and Rabin-Karp behind
//!   one contract
//! - **Similarity scoring**: sliding word-window phrases looked up in a
//!   comparison document
//!
//! ## Example
//!
//! ```rust
//! use doc_analyzer::{score, Algorithm, HuffmanCodec};
//!
//! let compressed = HuffmanCodec::compress("the cat sat on the mat").unwrap();
//! let restored = HuffmanCodec::decompress(&compressed).unwrap();
//! assert_eq!(restored, "the cat sat on the mat");
//!
//! let found = Algorithm::RabinKarp.search("the cat sat on the mat", "at").unwrap();
//! assert_eq!(found.positions, vec![5, 9, 20]);
//!
//! let report = score("the cat sat", "so the cat sat down", 2, Algorithm::Kmp).unwrap();
//! assert_eq!(report.matched_phrases, 2);
//! ```
//!
//! ## Modules
//!
//! - [`compression`]: Frequency table, Huffman tree, codes, bit packing
//! - [`matching`]: Naive, KMP and Rabin-Karp search
//! - [`similarity`]: Phrase segmentation and similarity reports
//! - [`core`]: Shared types
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Input validation and display helpers

pub mod cli;
pub mod compression;
pub mod core;
pub mod matching;
pub mod similarity;
pub mod utils;

// Re-export commonly used types for convenience
pub use compression::{CodeTable, CompressedDocument, CompressionError, HuffmanCodec};
pub use crate::core::types::{SimilarityLevel, Symbol};
pub use matching::{search, Algorithm, MatchResult, MatchingError};
pub use similarity::{score, SimilarityError, SimilarityReport};
