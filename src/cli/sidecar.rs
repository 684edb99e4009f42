//! JSON sidecar holding what the raw compressed blob cannot carry.
//!
//! The blob is headerless, so the padding length, symbol count and code table
//! are written next to it as `<blob>.codes.json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::compression::{CodeTable, CompressedDocument, CompressionError, PackedBuffer};
use crate::utils::validation::{check_document_size, ValidationError};

#[derive(Error, Debug)]
pub enum SidecarError {
    #[error("Failed to read or write sidecar: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse sidecar: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Compression(#[from] CompressionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Serializable metadata for one compressed blob
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodesSidecar {
    pub padding_bits: u8,
    pub symbol_count: usize,
    pub created_at: String,
    pub codes: CodeTable,
}

impl CodesSidecar {
    #[must_use]
    pub fn from_document(document: &CompressedDocument) -> Self {
        Self {
            padding_bits: document.packed.padding_bits,
            symbol_count: document.symbol_count,
            created_at: chrono::Utc::now().to_rfc3339(),
            codes: document.codes.clone(),
        }
    }

    /// Reattach the blob bytes to rebuild a decodable document
    #[must_use]
    pub fn into_document(self, bytes: Vec<u8>) -> CompressedDocument {
        CompressedDocument {
            packed: PackedBuffer {
                bytes,
                padding_bits: self.padding_bits,
            },
            codes: self.codes,
            symbol_count: self.symbol_count,
        }
    }

    /// Default sidecar location for a blob
    #[must_use]
    pub fn path_for(blob: &Path) -> PathBuf {
        let mut name = blob.as_os_str().to_owned();
        name.push(".codes.json");
        PathBuf::from(name)
    }

    pub fn save(&self, path: &Path) -> Result<(), SidecarError> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Load a sidecar and validate its code table.
    ///
    /// Oversized files are refused before they are read.
    pub fn load(path: &Path) -> Result<Self, SidecarError> {
        check_document_size(std::fs::metadata(path)?.len())?;
        let content = std::fs::read_to_string(path)?;
        let sidecar: Self = serde_json::from_str(&content)?;
        sidecar.codes.validate()?;
        debug!(
            path = %path.display(),
            created_at = %sidecar.created_at,
            symbols = sidecar.codes.len(),
            "loaded code table sidecar"
        );
        Ok(sidecar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compression::HuffmanCodec;

    #[test]
    fn test_path_for() {
        assert_eq!(
            CodesSidecar::path_for(Path::new("out/doc.bin")),
            PathBuf::from("out/doc.bin.codes.json")
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.bin.codes.json");

        let document = HuffmanCodec::compress("sidecar round trip\n").unwrap();
        CodesSidecar::from_document(&document).save(&path).unwrap();

        let restored = CodesSidecar::load(&path)
            .unwrap()
            .into_document(document.packed.bytes.clone());
        assert_eq!(restored, document);
        assert_eq!(
            HuffmanCodec::decompress(&restored).unwrap(),
            "sidecar round trip\n"
        );
    }

    #[test]
    fn test_load_rejects_oversized_sidecar() {
        let file = tempfile::NamedTempFile::new().unwrap();
        file.as_file()
            .set_len(crate::utils::validation::MAX_DOCUMENT_BYTES + 1)
            .unwrap();
        assert!(matches!(
            CodesSidecar::load(file.path()),
            Err(SidecarError::Validation(
                ValidationError::DocumentTooLarge { .. }
            ))
        ));
    }

    #[test]
    fn test_load_rejects_invalid_codes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.codes.json");
        std::fs::write(
            &path,
            r#"{"padding_bits":0,"symbol_count":1,"created_at":"","codes":{"a":"0","b":"0"}}"#,
        )
        .unwrap();
        assert!(matches!(
            CodesSidecar::load(&path),
            Err(SidecarError::Compression(
                CompressionError::InvalidCodeTable(_)
            ))
        ));
    }
}
