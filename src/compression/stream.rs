//! Bit-level encode/decode and byte packing.
//!
//! Packing pads the encoded stream with zero bits at the FRONT so that the
//! final byte always ends on the last code bit. The padding length travels
//! with the bytes in [`PackedBuffer`]; without it the stream cannot be
//! recovered.

use tracing::{debug, warn};

use crate::compression::bits::BitString;
use crate::compression::codes::CodeTable;
use crate::compression::error::CompressionError;

/// Packed bytes plus the count of zero bits prepended to reach a byte boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedBuffer {
    pub bytes: Vec<u8>,
    pub padding_bits: u8,
}

impl PackedBuffer {
    /// Recover the encoded stream.
    ///
    /// # Errors
    ///
    /// See [`unpack`].
    pub fn unpack(&self) -> Result<BitString, CompressionError> {
        unpack(&self.bytes, self.padding_bits)
    }
}

/// Concatenate the code of every symbol of `text`, in order.
///
/// # Errors
///
/// Returns `CompressionError::UnknownSymbol` for the first symbol without a
/// code.
pub fn encode(text: &str, codes: &CodeTable) -> Result<BitString, CompressionError> {
    let mut stream = BitString::with_capacity(text.len() * 2);
    for (position, symbol) in text.chars().enumerate() {
        let code = codes
            .get(symbol)
            .ok_or(CompressionError::UnknownSymbol { symbol, position })?;
        stream.extend_from(code);
    }
    debug!(bits = stream.len(), "encoded text");
    Ok(stream)
}

/// Front-pad `stream` with zeros to a multiple of 8 bits and group into
/// big-endian bytes.
#[must_use]
pub fn pack(stream: &BitString) -> PackedBuffer {
    let padding = (8 - stream.len() % 8) % 8;
    let mut padded = BitString::with_capacity(stream.len() + padding);
    for _ in 0..padding {
        padded.push(false);
    }
    padded.extend_from(stream);

    // padding < 8 by construction
    #[allow(clippy::cast_possible_truncation)]
    let padding_bits = padding as u8;

    PackedBuffer {
        bytes: padded.as_bytes().to_vec(),
        padding_bits,
    }
}

/// Expand `bytes` to bits and strip the first `padding_bits` bits.
///
/// # Errors
///
/// Returns `CompressionError::CorruptStream` if `padding_bits` is above 7,
/// is non-zero for an empty buffer, or covers bits that are not zero.
pub fn unpack(bytes: &[u8], padding_bits: u8) -> Result<BitString, CompressionError> {
    if padding_bits > 7 {
        return Err(CompressionError::CorruptStream(format!(
            "padding of {padding_bits} bits exceeds 7"
        )));
    }
    if bytes.is_empty() {
        if padding_bits != 0 {
            return Err(CompressionError::CorruptStream(format!(
                "padding of {padding_bits} bits on an empty buffer"
            )));
        }
        return Ok(BitString::new());
    }

    let padding = usize::from(padding_bits);
    if padding > 0 && bytes[0] >> (8 - padding) != 0 {
        warn!(padding, first_byte = bytes[0], "non-zero padding bits");
        return Err(CompressionError::CorruptStream(
            "padding bits are not zero".to_string(),
        ));
    }

    let mut stream = BitString::with_capacity(bytes.len() * 8 - padding);
    for (i, byte) in bytes.iter().enumerate() {
        let start = if i == 0 { padding } else { 0 };
        for bit in start..8 {
            stream.push(byte & (1 << (7 - bit)) != 0);
        }
    }
    Ok(stream)
}

/// Decode `stream` by greedily matching accumulated bits against the codes.
///
/// # Errors
///
/// Returns `CompressionError::CorruptStream` if the bits do not split
/// cleanly into codes, including leftover bits at the end.
pub fn decode(stream: &BitString, codes: &CodeTable) -> Result<String, CompressionError> {
    let lookup = codes.inverse();
    let max_len = codes.max_code_len();
    let mut text = String::new();
    let mut current = BitString::new();

    for (index, bit) in stream.iter().enumerate() {
        current.push(bit);
        if let Some(&symbol) = lookup.get(&current) {
            text.push(symbol);
            current.clear();
        } else if current.len() >= max_len {
            return Err(CompressionError::CorruptStream(format!(
                "no code matches the bits ending at offset {index}"
            )));
        }
    }

    if !current.is_empty() {
        return Err(CompressionError::CorruptStream(format!(
            "{} trailing bits do not form a complete code",
            current.len()
        )));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compression::codes::generate_codes;
    use crate::compression::frequency::build_frequency_table;
    use crate::compression::tree::build_huffman_tree;

    fn codes_for(text: &str) -> CodeTable {
        generate_codes(&build_huffman_tree(&build_frequency_table(text)).unwrap())
    }

    #[test]
    fn test_encode_known_stream() {
        // a=0 c=10 b=11
        let codes = codes_for("aaabbc");
        let stream = encode("abcab", &codes).unwrap();
        assert_eq!(stream.to_string(), "01110011");
    }

    #[test]
    fn test_encode_unknown_symbol() {
        let codes = codes_for("abc");
        assert_eq!(
            encode("abz", &codes),
            Err(CompressionError::UnknownSymbol {
                symbol: 'z',
                position: 2
            })
        );
    }

    #[test]
    fn test_pack_pads_at_front() {
        let stream = BitString::parse("101").unwrap();
        let packed = pack(&stream);
        assert_eq!(packed.padding_bits, 5);
        assert_eq!(packed.bytes, vec![0b0000_0101]);

        let stream = BitString::parse("1111111101").unwrap();
        let packed = pack(&stream);
        assert_eq!(packed.padding_bits, 6);
        assert_eq!(packed.bytes, vec![0b0000_0011, 0b1111_1101]);
    }

    #[test]
    fn test_pack_byte_aligned_has_no_padding() {
        let stream = BitString::parse("10000001").unwrap();
        let packed = pack(&stream);
        assert_eq!(packed.padding_bits, 0);
        assert_eq!(packed.bytes, vec![0x81]);
    }

    #[test]
    fn test_unpack_inverts_pack() {
        for digits in ["", "1", "0", "0101", "11111111", "101010101"] {
            let stream = BitString::parse(digits).unwrap();
            assert_eq!(pack(&stream).unpack().unwrap(), stream, "bits {digits}");
        }
    }

    #[test]
    fn test_unpack_rejects_bad_padding() {
        assert!(matches!(
            unpack(&[0x01], 8),
            Err(CompressionError::CorruptStream(_))
        ));
        assert!(matches!(
            unpack(&[], 3),
            Err(CompressionError::CorruptStream(_))
        ));
        assert!(matches!(
            unpack(&[0b1000_0001], 2),
            Err(CompressionError::CorruptStream(_))
        ));
    }

    #[test]
    fn test_decode_known_stream() {
        let codes = codes_for("aaabbc");
        let stream = BitString::parse("01110011").unwrap();
        assert_eq!(decode(&stream, &codes).unwrap(), "abcab");
    }

    #[test]
    fn test_decode_trailing_bits_is_corrupt() {
        let codes = codes_for("aaabbc");
        let stream = BitString::parse("0111001").unwrap();
        assert!(matches!(
            decode(&stream, &codes),
            Err(CompressionError::CorruptStream(_))
        ));
    }

    #[test]
    fn test_decode_unmatched_bits_is_corrupt() {
        // only "0" is a valid code here
        let codes = codes_for("aaaa");
        let stream = BitString::parse("0010").unwrap();
        assert!(matches!(
            decode(&stream, &codes),
            Err(CompressionError::CorruptStream(_))
        ));
    }

    #[test]
    fn test_single_symbol_roundtrip() {
        let codes = codes_for("aaaa");
        let stream = encode("aaaa", &codes).unwrap();
        assert_eq!(stream.len(), 4);
        let packed = pack(&stream);
        assert_eq!(packed.bytes.len(), 1);
        assert_eq!(decode(&packed.unpack().unwrap(), &codes).unwrap(), "aaaa");
    }

    #[test]
    fn test_whitespace_roundtrip() {
        let text = "line one\n\tline two  \r\nend";
        let codes = codes_for(text);
        let packed = pack(&encode(text, &codes).unwrap());
        assert_eq!(decode(&packed.unpack().unwrap(), &codes).unwrap(), text);
    }
}
