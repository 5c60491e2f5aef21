//! Huffman tree construction and code assignment
//!
//! The tree is built with the two-queue method: leaves are sorted once by
//! weight, and internal nodes come out of the merge loop already in
//! non-decreasing weight order, so the next two minimums are always at the
//! front of one of the two queues. Which queue wins a tie decides the shape
//! of the tree, and with it the exact bitstream, so the rule is fixed: a leaf
//! is taken only when it is strictly lighter than the front internal node.
//!
//! Nodes live in one arena. Leaves occupy `0..leaf_count` in sorted order and
//! internal nodes are appended behind them in creation order, which makes the
//! arena tail the internal queue and its last slot the root.

use super::frequency::FrequencyTable;
use crate::common::MAX_SYMBOLS;
use crate::{HuffError, Result};

/// A node of the encode-side tree
#[derive(Debug, Clone)]
struct EncodeNode {
    weight: u64,
    left: Option<usize>,
    right: Option<usize>,
    /// Only meaningful for leaves
    byte: u8,
    /// Local branch label until paths are assigned, then the full code
    bits: String,
}

impl EncodeNode {
    fn leaf(byte: u8, weight: u64) -> Self {
        Self {
            weight,
            left: None,
            right: None,
            byte,
            bits: String::new(),
        }
    }

    fn internal(weight: u64, left: usize, right: usize) -> Self {
        Self {
            weight,
            left: Some(left),
            right: Some(right),
            byte: 0,
            bits: String::new(),
        }
    }
}

/// Huffman tree over the symbols of one input
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<EncodeNode>,
    leaf_count: usize,
}

impl HuffmanTree {
    /// Build the tree for every nonzero slot of `frequencies`
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        let mut nodes: Vec<EncodeNode> = frequencies
            .symbols()
            .map(|(byte, count)| EncodeNode::leaf(byte, count))
            .collect();

        if nodes.is_empty() {
            return Err(HuffError::EmptyInput);
        }

        // Stable: equal weights keep ascending byte order
        nodes.sort_by_key(|node| node.weight);

        let leaf_count = nodes.len();
        nodes.reserve(leaf_count - 1);

        let mut next_leaf = 0;
        let mut next_internal = leaf_count;

        for _ in 1..leaf_count {
            let min1 = Self::take_min(&nodes, leaf_count, &mut next_leaf, &mut next_internal)?;
            let min2 = Self::take_min(&nodes, leaf_count, &mut next_leaf, &mut next_internal)?;

            nodes[min1].bits.push('1');
            nodes[min2].bits.push('0');

            let weight = nodes[min1].weight + nodes[min2].weight;
            nodes.push(EncodeNode::internal(weight, min1, min2));
        }

        let mut tree = Self { nodes, leaf_count };
        tree.assign_paths();
        Ok(tree)
    }

    /// Pop the lighter front of the leaf queue or the internal queue
    fn take_min(
        nodes: &[EncodeNode],
        leaf_count: usize,
        next_leaf: &mut usize,
        next_internal: &mut usize,
    ) -> Result<usize> {
        let leaf_ready = *next_leaf < leaf_count;
        let internal_ready = *next_internal < nodes.len();

        let take_leaf = match (leaf_ready, internal_ready) {
            (true, true) => nodes[*next_leaf].weight < nodes[*next_internal].weight,
            (true, false) => true,
            (false, true) => false,
            (false, false) => {
                return Err(HuffError::InternalInvariantViolation(
                    "both merge queues are empty".to_string(),
                ))
            }
        };

        let picked = if take_leaf { next_leaf } else { next_internal };
        let index = *picked;
        *picked += 1;
        Ok(index)
    }

    /// Turn local branch labels into full root-to-leaf codes
    fn assign_paths(&mut self) {
        // Parents are created after their children, so walking the arena
        // backwards visits every parent before either child.
        for index in (self.leaf_count..self.nodes.len()).rev() {
            let prefix = self.nodes[index].bits.clone();
            let children = [self.nodes[index].left, self.nodes[index].right];
            for child in children.into_iter().flatten() {
                self.nodes[child].bits.insert_str(0, &prefix);
            }
        }
    }

    /// Number of distinct symbols (leaves)
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Weight of the root, i.e. the total number of input bytes
    pub fn root_weight(&self) -> u64 {
        self.nodes.last().map_or(0, |root| root.weight)
    }

    /// Extract the per-symbol codes
    pub fn code_table(&self) -> CodeTable {
        let mut codes = vec![None; MAX_SYMBOLS];
        let mut order = Vec::with_capacity(self.leaf_count);
        for leaf in &self.nodes[..self.leaf_count] {
            log::trace!("symbol {:#04x} weight {} code {}", leaf.byte, leaf.weight, leaf.bits);
            codes[leaf.byte as usize] = Some(leaf.bits.clone());
            order.push(leaf.byte);
        }
        CodeTable { codes, order }
    }
}

/// Byte value to code mapping produced from a [`HuffmanTree`]
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<Option<String>>,
    /// Symbols in ascending weight order, the order they are stored in
    order: Vec<u8>,
}

impl CodeTable {
    /// Code for `byte`, if it occurred in the input
    pub fn code(&self, byte: u8) -> Option<&str> {
        self.codes[byte as usize].as_deref()
    }

    /// Number of symbols with a code
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no symbol has a code
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(byte, code)` pairs in stored order
    pub fn entries(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.order
            .iter()
            .map(move |&byte| (byte, self.codes[byte as usize].as_deref().unwrap_or("")))
    }

    /// Length of the longest code
    pub fn max_code_length(&self) -> usize {
        self.entries().map(|(_, code)| code.len()).max().unwrap_or(0)
    }
}
