use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::compression::error::CompressionError;
use crate::compression::frequency::FrequencyTable;
use crate::core::types::Symbol;

/// Index of a node inside a [`HuffmanTree`] arena
pub type NodeId = usize;

/// A node of the Huffman tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: NodeId,
        right: NodeId,
    },
}

impl Node {
    #[must_use]
    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }
}

/// Huffman tree stored as an arena of nodes.
///
/// Node ids double as insertion sequence numbers: leaves occupy
/// `0..symbol_count` in ascending symbol order and each merge appends one
/// internal node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build a tree by repeatedly merging the two lightest nodes.
    ///
    /// Ties on weight go to the node inserted first. Leaves are inserted in
    /// ascending symbol order, so equal-weight leaves resolve to the smaller
    /// symbol. The first node popped becomes the left child.
    ///
    /// # Errors
    ///
    /// Returns `CompressionError::EmptyInput` if the table has no symbols.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self, CompressionError> {
        if frequencies.is_empty() {
            return Err(CompressionError::EmptyInput);
        }

        let mut nodes: Vec<Node> = Vec::with_capacity(2 * frequencies.len() - 1);
        let mut heap: BinaryHeap<Reverse<(usize, NodeId)>> =
            BinaryHeap::with_capacity(frequencies.len());

        for (symbol, weight) in frequencies.iter() {
            heap.push(Reverse((weight, nodes.len())));
            nodes.push(Node::Leaf { symbol, weight });
        }

        while let Some(((w1, left), (w2, right))) = pop_two(&mut heap) {
            let weight = w1 + w2;
            heap.push(Reverse((weight, nodes.len())));
            nodes.push(Node::Internal {
                weight,
                left,
                right,
            });
        }

        let root = nodes.len() - 1;
        debug!(
            symbols = frequencies.len(),
            nodes = nodes.len(),
            "built Huffman tree"
        );

        Ok(Self { nodes, root })
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Total weight, i.e. the symbol length of the source text
    #[must_use]
    pub fn weight(&self) -> usize {
        self.nodes[self.root].weight()
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }

    #[must_use]
    pub fn internal_count(&self) -> usize {
        self.nodes.len() - self.leaf_count()
    }

    /// True for the degenerate tree built from a single distinct symbol
    #[must_use]
    pub fn is_single_leaf(&self) -> bool {
        matches!(self.nodes[self.root], Node::Leaf { .. })
    }
}

/// Pop the two lightest nodes, or `None` once only the root remains
fn pop_two(
    heap: &mut BinaryHeap<Reverse<(usize, NodeId)>>,
) -> Option<((usize, NodeId), (usize, NodeId))> {
    if heap.len() < 2 {
        return None;
    }
    let Reverse(first) = heap.pop()?;
    let Reverse(second) = heap.pop()?;
    Some((first, second))
}

/// Build a Huffman tree from a frequency table.
///
/// # Errors
///
/// Returns `CompressionError::EmptyInput` if the table is empty.
pub fn build_huffman_tree(frequencies: &FrequencyTable) -> Result<HuffmanTree, CompressionError> {
    HuffmanTree::build(frequencies)
}
