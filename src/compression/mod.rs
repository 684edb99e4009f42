//! Huffman compression of in-memory text.
//!
//! The pipeline runs in five steps, each exposed on its own:
//!
//! 1. [`build_frequency_table`]: count each distinct symbol
//! 2. [`build_huffman_tree`]: greedy merge of the two lightest nodes
//! 3. [`generate_codes`]: `0` for left, `1` for right
//! 4. [`encode`] / [`decode`]: symbols to bits and back
//! 5. [`pack`] / [`unpack`]: bits to front-padded bytes and back
//!
//! [`HuffmanCodec`] chains them for the common case.
//!
//! ## Determinism
//!
//! Equal-weight nodes are ordered by insertion: leaves are inserted in
//! ascending symbol order and merged nodes after them, so the same text
//! always produces the same codes.
//!
//! ## Example
//!
//! ```rust
//! use doc_analyzer::compression::HuffmanCodec;
//!
//! let compressed = HuffmanCodec::compress("abracadabra").unwrap();
//! assert_eq!(HuffmanCodec::decompress(&compressed).unwrap(), "abracadabra");
//! ```

pub mod bits;
pub mod codec;
pub mod codes;
pub mod error;
pub mod frequency;
pub mod stream;
pub mod tree;

pub use bits::BitString;
pub use codec::{CompressedDocument, CompressionStats, HuffmanCodec};
pub use codes::{generate_codes, CodeTable};
pub use error::CompressionError;
pub use frequency::{build_frequency_table, FrequencyTable};
pub use stream::{decode, encode, pack, unpack, PackedBuffer};
pub use tree::{build_huffman_tree, HuffmanTree, Node};
