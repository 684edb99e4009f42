use thiserror::Error;

use crate::core::types::Symbol;

/// Errors raised by the Huffman compression pipeline
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CompressionError {
    #[error("Nothing to encode: input is empty")]
    EmptyInput,

    #[error("Symbol {symbol:?} at position {position} is not in the code table")]
    UnknownSymbol { symbol: Symbol, position: usize },

    #[error("Corrupt stream: {0}")]
    CorruptStream(String),

    #[error("Invalid code table: {0}")]
    InvalidCodeTable(String),

    #[error("Failed to (de)serialize code table: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CompressionError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
