use tracing::debug;

use crate::compression::codes::{generate_codes, CodeTable};
use crate::compression::error::CompressionError;
use crate::compression::frequency::build_frequency_table;
use crate::compression::stream::{decode, encode, pack, PackedBuffer};
use crate::compression::tree::build_huffman_tree;
use crate::utils::numeric::count_to_f64;

/// Output of [`HuffmanCodec::compress`]: everything needed to decode again.
///
/// There is no self-describing header; the caller stores `packed.padding_bits`
/// and `codes` alongside the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedDocument {
    pub packed: PackedBuffer,
    pub codes: CodeTable,
    /// Number of symbols in the original text
    pub symbol_count: usize,
}

impl CompressedDocument {
    /// Size comparison against the original text's UTF-8 length
    #[must_use]
    pub fn stats(&self, original_bytes: usize) -> CompressionStats {
        CompressionStats::new(original_bytes, self.packed.bytes.len())
    }
}

/// Size of a document before and after compression
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct CompressionStats {
    pub original_bytes: usize,
    pub compressed_bytes: usize,
    /// Space saved as a percentage of the original size
    pub saving_percent: f64,
}

impl CompressionStats {
    #[must_use]
    pub fn new(original_bytes: usize, compressed_bytes: usize) -> Self {
        let saving_percent = if original_bytes == 0 {
            0.0
        } else {
            100.0 - count_to_f64(compressed_bytes) / count_to_f64(original_bytes) * 100.0
        };
        Self {
            original_bytes,
            compressed_bytes,
            saving_percent,
        }
    }
}

/// Runs the full Huffman pipeline over an in-memory text
pub struct HuffmanCodec;

impl HuffmanCodec {
    /// Build a code table from `text` and compress it.
    ///
    /// # Errors
    ///
    /// Returns `CompressionError::EmptyInput` if `text` is empty.
    pub fn compress(text: &str) -> Result<CompressedDocument, CompressionError> {
        let frequencies = build_frequency_table(text);
        let tree = build_huffman_tree(&frequencies)?;
        let codes = generate_codes(&tree);
        let stream = encode(text, &codes)?;
        let packed = pack(&stream);

        debug!(
            symbols = frequencies.total(),
            distinct = codes.len(),
            bits = stream.len(),
            bytes = packed.bytes.len(),
            padding = packed.padding_bits,
            "compressed text"
        );

        Ok(CompressedDocument {
            packed,
            codes,
            symbol_count: frequencies.total(),
        })
    }

    /// Decode a compressed document back into text.
    ///
    /// # Errors
    ///
    /// Returns `CompressionError::CorruptStream` if the bytes do not decode
    /// cleanly or decode to a different number of symbols than recorded.
    pub fn decompress(document: &CompressedDocument) -> Result<String, CompressionError> {
        let stream = document.packed.unpack()?;
        let text = decode(&stream, &document.codes)?;

        let decoded = text.chars().count();
        if decoded != document.symbol_count {
            return Err(CompressionError::CorruptStream(format!(
                "expected {} symbols, decoded {decoded}",
                document.symbol_count
            )));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let text = "Hello, world! This is a sample text for Huffman compression.\n\
                    The quick brown fox jumps over the lazy dog.";
        let compressed = HuffmanCodec::compress(text).unwrap();
        assert_eq!(HuffmanCodec::decompress(&compressed).unwrap(), text);
        assert_eq!(compressed.symbol_count, text.chars().count());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(HuffmanCodec::compress(""), Err(CompressionError::EmptyInput));
    }

    #[test]
    fn test_skewed_text_shrinks() {
        let text = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaabbbbbbbbbbccccc d";
        let compressed = HuffmanCodec::compress(text).unwrap();
        let stats = compressed.stats(text.len());
        assert!(stats.compressed_bytes <= text.len());
        assert!(stats.saving_percent > 0.0);
    }

    #[test]
    fn test_symbol_count_mismatch_is_corrupt() {
        let mut compressed = HuffmanCodec::compress("abcabc").unwrap();
        compressed.symbol_count += 1;
        assert!(matches!(
            HuffmanCodec::decompress(&compressed),
            Err(CompressionError::CorruptStream(_))
        ));
    }

    #[test]
    fn test_wrong_padding_is_detected() {
        // a=0, b=1: a short padding leaks a zero bit that decodes as an extra 'a'
        let mut compressed = HuffmanCodec::compress("abbbbbbbbb").unwrap();
        assert_ne!(compressed.packed.padding_bits, 0);
        compressed.packed.padding_bits -= 1;
        assert!(HuffmanCodec::decompress(&compressed).is_err());
    }

    #[test]
    fn test_stats() {
        let stats = CompressionStats::new(200, 50);
        assert!((stats.saving_percent - 75.0).abs() < 1e-9);
        assert!(CompressionStats::new(0, 0).saving_percent.abs() < 1e-9);
    }
}
