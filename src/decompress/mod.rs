//! Huffman decompression
//!
//! Rebuilds the decode trie from the stored symbol table, validates the
//! metadata block and walks the trie once per payload byte.

mod reader;
mod trie;

pub use reader::ContainerReader;
pub use trie::DecodeTrie;

use crate::{ContainerHeader, Result};

/// Decompress a container back into the original bytes
pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut reader = ContainerReader::new(data);
    let (header, trie) = reader.read_header()?;

    log::debug!(
        "decompressing container of {} bytes: {} symbols, {} trie nodes, payload {} bytes",
        data.len(),
        header.symbols.len(),
        trie.node_count(),
        header.payload_length
    );

    reader.read_payload(&trie, header.payload_length)
}

/// Parse a container's symbol table and metadata without decoding the payload
pub fn read_header(data: &[u8]) -> Result<ContainerHeader> {
    let (header, _trie) = ContainerReader::new(data).read_header()?;
    Ok(header)
}
