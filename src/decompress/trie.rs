//! Decode trie rebuilt from a stored symbol table
//!
//! Nodes are kept in an arena and refer to their children by index; the
//! root is slot 0. A node is a leaf when it carries a byte value, and a
//! leaf never has children.

use crate::bits::BitReader;
use crate::{HuffError, Result};

const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    zero: Option<usize>,
    one: Option<usize>,
    byte: Option<u8>,
}

impl TrieNode {
    fn has_children(&self) -> bool {
        self.zero.is_some() || self.one.is_some()
    }
}

/// Binary trie mapping code bits back to byte values
#[derive(Debug, Clone)]
pub struct DecodeTrie {
    nodes: Vec<TrieNode>,
}

impl Default for DecodeTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodeTrie {
    /// Create a trie holding only an empty root
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Add the path for one code, creating branches on demand
    ///
    /// The code must not run through an existing leaf and must not end on a
    /// node that is already a leaf or already has children; either would
    /// break the prefix-free property the payload walk relies on.
    pub fn insert<I>(&mut self, byte: u8, bits: I) -> Result<()>
    where
        I: IntoIterator<Item = bool>,
    {
        let mut node = ROOT;
        for bit in bits {
            if self.nodes[node].byte.is_some() {
                return Err(HuffError::InvalidFormat(format!(
                    "code for byte {byte:#04x} extends another symbol's code"
                )));
            }
            node = self.child_or_create(node, bit);
        }

        let target = &mut self.nodes[node];
        if target.byte.is_some() || target.has_children() {
            return Err(HuffError::InvalidFormat(format!(
                "code for byte {byte:#04x} collides with another symbol's code"
            )));
        }
        target.byte = Some(byte);
        Ok(())
    }

    fn child_or_create(&mut self, node: usize, bit: bool) -> usize {
        let existing = if bit {
            self.nodes[node].one
        } else {
            self.nodes[node].zero
        };
        if let Some(child) = existing {
            return child;
        }

        let child = self.nodes.len();
        self.nodes.push(TrieNode::default());
        let slot = if bit {
            &mut self.nodes[node].one
        } else {
            &mut self.nodes[node].zero
        };
        *slot = Some(child);
        child
    }

    /// The sole symbol when the root itself is a leaf (one-symbol alphabet)
    pub fn single_symbol(&self) -> Option<u8> {
        let root = &self.nodes[ROOT];
        if root.has_children() {
            None
        } else {
            root.byte
        }
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walk from the root, one bit at a time, until a leaf is reached
    pub fn decode_symbol(&self, reader: &mut BitReader<'_>) -> Result<u8> {
        let mut node = &self.nodes[ROOT];
        loop {
            if let Some(byte) = node.byte {
                return Ok(byte);
            }
            let next = if reader.read_bit()? { node.one } else { node.zero };
            let index = next.ok_or_else(|| {
                HuffError::InvalidFormat("payload bits match no stored code".to_string())
            })?;
            node = &self.nodes[index];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::BitWriter;

    fn bits(code: &str) -> Vec<bool> {
        code.chars().map(|ch| ch == '1').collect()
    }

    fn trie(entries: &[(u8, &str)]) -> DecodeTrie {
        let mut trie = DecodeTrie::new();
        for &(byte, code) in entries {
            trie.insert(byte, bits(code)).unwrap();
        }
        trie
    }

    #[test]
    fn test_walk_decodes_symbols() {
        let trie = trie(&[(b'c', "11"), (b'b', "10"), (b'a', "0")]);
        assert_eq!(trie.node_count(), 5);
        assert_eq!(trie.single_symbol(), None);

        let mut writer = BitWriter::new();
        writer.write_code("011100").unwrap();
        let data = writer.finish();
        let mut reader = BitReader::new(&data);

        let decoded: Vec<u8> = (0..4).map(|_| trie.decode_symbol(&mut reader).unwrap()).collect();
        assert_eq!(decoded, b"acba");
    }

    #[test]
    fn test_single_symbol_root_leaf() {
        let trie = trie(&[(0xAA, "")]);
        assert_eq!(trie.single_symbol(), Some(0xAA));

        // decoding consumes no bits
        let mut reader = BitReader::new(&[]);
        assert_eq!(trie.decode_symbol(&mut reader).unwrap(), 0xAA);
    }

    #[test]
    fn test_code_through_leaf_rejected() {
        let mut trie = trie(&[(b'a', "0")]);
        let err = trie.insert(b'b', bits("01")).unwrap_err();
        assert!(matches!(err, HuffError::InvalidFormat(_)));
    }

    #[test]
    fn test_code_ending_on_internal_node_rejected() {
        let mut trie = trie(&[(b'a', "01")]);
        let err = trie.insert(b'b', bits("0")).unwrap_err();
        assert!(matches!(err, HuffError::InvalidFormat(_)));
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let mut trie = trie(&[(b'a', "1")]);
        let err = trie.insert(b'b', bits("1")).unwrap_err();
        assert!(matches!(err, HuffError::InvalidFormat(_)));
    }

    #[test]
    fn test_missing_branch_is_invalid_format() {
        // only "0" is defined, so a 1 bit leads nowhere
        let trie = trie(&[(b'a', "0")]);
        let mut reader = BitReader::new(&[0x80]);
        let err = trie.decode_symbol(&mut reader).unwrap_err();
        assert!(matches!(err, HuffError::InvalidFormat(_)));
    }

    #[test]
    fn test_truncated_walk() {
        let trie = trie(&[(b'a', "00"), (b'b', "01"), (b'c', "1")]);
        let mut reader = BitReader::new(&[]);
        let err = trie.decode_symbol(&mut reader).unwrap_err();
        assert!(matches!(err, HuffError::TruncatedInput));
    }
}
