use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::compression::bits::BitString;
use crate::compression::error::CompressionError;
use crate::compression::tree::{HuffmanTree, Node};
use crate::core::types::Symbol;
use crate::utils::validation::display_symbol;

/// Bijective mapping from symbol to its prefix-free bit code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, BitString>,
}

impl CodeTable {
    #[must_use]
    pub fn get(&self, symbol: Symbol) -> Option<&BitString> {
        self.codes.get(&symbol)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in ascending symbol order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &BitString)> + '_ {
        self.codes.iter().map(|(&c, code)| (c, code))
    }

    /// Length of the longest code, 0 for an empty table
    #[must_use]
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(BitString::len).max().unwrap_or(0)
    }

    /// Code to symbol lookup used by the decoder
    #[must_use]
    pub fn inverse(&self) -> HashMap<&BitString, Symbol> {
        self.codes.iter().map(|(&c, code)| (code, c)).collect()
    }

    /// Entries ordered by code length then symbol, with whitespace made
    /// visible, e.g. `("␣", "01")`.
    #[must_use]
    pub fn listing(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(Symbol, &BitString)> = self.iter().collect();
        entries.sort_by_key(|(c, code)| (code.len(), *c));
        entries
            .into_iter()
            .map(|(c, code)| (display_symbol(c), code.to_string()))
            .collect()
    }

    /// Serialize the table as a JSON object of symbol to bit string.
    ///
    /// # Errors
    ///
    /// Returns `CompressionError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String, CompressionError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load and validate a table previously written by [`CodeTable::to_json`].
    ///
    /// # Errors
    ///
    /// Returns `CompressionError::Serialization` for malformed JSON and
    /// `CompressionError::InvalidCodeTable` if the codes are not a usable
    /// prefix code.
    pub fn from_json(json: &str) -> Result<Self, CompressionError> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Check that a table from outside the encoder can drive the decoder.
    ///
    /// # Errors
    ///
    /// Returns `CompressionError::InvalidCodeTable` on empty, duplicate, or
    /// prefix-overlapping codes.
    pub fn validate(&self) -> Result<(), CompressionError> {
        if self.codes.is_empty() {
            return Err(CompressionError::InvalidCodeTable(
                "table has no entries".to_string(),
            ));
        }

        let mut seen: HashSet<&BitString> = HashSet::with_capacity(self.codes.len());
        for (symbol, code) in &self.codes {
            if code.is_empty() {
                return Err(CompressionError::InvalidCodeTable(format!(
                    "symbol {symbol:?} has an empty code"
                )));
            }
            if !seen.insert(code) {
                return Err(CompressionError::InvalidCodeTable(format!(
                    "code {code} is assigned to more than one symbol"
                )));
            }
        }

        // Sorted bit strings place any prefix directly before a code it prefixes.
        let mut sorted: Vec<String> = self.codes.values().map(ToString::to_string).collect();
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|w| w[1].starts_with(w[0].as_str())) {
            return Err(CompressionError::InvalidCodeTable(format!(
                "code {} is a prefix of {}",
                pair[0], pair[1]
            )));
        }

        Ok(())
    }
}

/// Assign a code to every leaf: `0` on each left descent, `1` on each right.
///
/// A single-leaf tree gets the one-bit code `0`, since an empty code could
/// never be read back. Each call builds a fresh table.
#[must_use]
pub fn generate_codes(tree: &HuffmanTree) -> CodeTable {
    let mut codes = BTreeMap::new();

    if let Node::Leaf { symbol, .. } = tree.node(tree.root()) {
        let mut code = BitString::new();
        code.push(false);
        codes.insert(*symbol, code);
        return CodeTable { codes };
    }

    let mut stack = vec![(tree.root(), BitString::new())];
    while let Some((id, prefix)) = stack.pop() {
        match tree.node(id) {
            Node::Leaf { symbol, .. } => {
                codes.insert(*symbol, prefix);
            }
            Node::Internal { left, right, .. } => {
                let mut right_code = prefix.clone();
                right_code.push(true);
                let mut left_code = prefix;
                left_code.push(false);
                stack.push((*right, right_code));
                stack.push((*left, left_code));
            }
        }
    }

    CodeTable { codes }
}
