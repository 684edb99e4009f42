use std::fmt;

/// A growable, MSB-first packed sequence of bits.
///
/// Used both for individual Huffman codes and for the full encoded stream.
/// Bits past `len` in the last byte are always zero, so two `BitString`s
/// holding the same bits compare and hash equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitString {
    bytes: Vec<u8>,
    len: usize,
}

impl BitString {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Number of bits held
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, bit: bool) {
        let byte_index = self.len / 8;
        let bit_offset = self.len % 8;

        if byte_index >= self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[byte_index] |= 1 << (7 - bit_offset);
        }
        self.len += 1;
    }

    /// Bit at `index`, or `None` past the end
    #[must_use]
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (1 << (7 - index % 8)) != 0)
    }

    /// Append every bit of `other`
    pub fn extend_from(&mut self, other: &BitString) {
        for bit in other.iter() {
            self.push(bit);
        }
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
        self.len = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.bytes[i / 8] & (1 << (7 - i % 8)) != 0)
    }

    /// True if every bit of `self` matches the start of `other`
    #[must_use]
    pub fn is_prefix_of(&self, other: &BitString) -> bool {
        self.len <= other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }

    /// Raw backing bytes. The final byte is zero-filled past `len`.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Parse a string of `0`/`1` characters.
    ///
    /// Returns `None` if any other character is present.
    #[must_use]
    pub fn parse(digits: &str) -> Option<Self> {
        let mut bits = Self::with_capacity(digits.len());
        for c in digits.chars() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return None,
            }
        }
        Some(bits)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = Self::new();
        for bit in iter {
            bits.push(bit);
        }
        bits
    }
}

impl TryFrom<String> for BitString {
    type Error = String;

    fn try_from(digits: String) -> Result<Self, Self::Error> {
        Self::parse(&digits).ok_or_else(|| format!("invalid bit string: {digits:?}"))
    }
}

impl serde::Serialize for BitString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BitString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let digits = String::deserialize(deserializer)?;
        Self::try_from(digits).map_err(serde::de::Error::custom)
    }
}
