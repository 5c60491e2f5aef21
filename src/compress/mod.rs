//! Huffman compression
//!
//! Counts byte frequencies, builds the Huffman tree, derives the code table
//! and serializes table, metadata and payload into one container.

mod frequency;
mod tree;
mod writer;

pub use frequency::FrequencyTable;
pub use tree::{CodeTable, HuffmanTree};
pub use writer::ContainerWriter;

use crate::{CompressionStats, HuffError, Result};

/// Compress `data` into a container
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    compress_with_stats(data).map(|(output, _)| output)
}

/// Compress `data` and report statistics about the run
pub fn compress_with_stats(data: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
    if data.is_empty() {
        return Err(HuffError::EmptyInput);
    }

    let frequencies = FrequencyTable::from_bytes(data);
    let tree = HuffmanTree::build(&frequencies)?;
    let table = tree.code_table();

    log::debug!(
        "compressing {} bytes: {} symbols, longest code {} bits",
        data.len(),
        table.len(),
        table.max_code_length()
    );

    let mut writer = ContainerWriter::with_capacity(data.len() / 2 + table.len() * 4 + 16);
    writer.write_symbol_table(&table)?;
    writer.write_metadata(data.len() as u64);
    writer.write_payload(data, &table)?;
    let output = writer.finish();

    log::debug!("container is {} bytes", output.len());

    let stats = CompressionStats::new(
        data.len() as u64,
        output.len() as u64,
        table.len(),
        table.max_code_length(),
    );
    Ok((output, stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(compress_bytes(&[]), Err(HuffError::EmptyInput)));
        assert!(matches!(compress_with_stats(b""), Err(HuffError::EmptyInput)));
    }

    #[test]
    fn test_exact_container_for_small_input() {
        // a:4 b:2 c:1 -> a=0 b=10 c=11, stored as c, b, a
        let output = compress_bytes(b"aaaabbc").unwrap();

        let mut expected = crate::bits::BitWriter::new();
        expected.write_byte(3);
        for (byte, code) in [(b'c', "11"), (b'b', "10"), (b'a', "0")] {
            expected.write_byte(byte);
            expected.write_byte(code.len() as u8);
            expected.write_code(code).unwrap();
        }
        expected.write_byte(1);
        expected.write_byte(0);
        expected.write_bit(true);
        expected.write_byte(7);
        for _ in 0..7 {
            expected.write_byte(0);
        }
        expected.write_code("0000101011").unwrap();

        assert_eq!(output, expected.finish());
    }

    #[test]
    fn test_stats() {
        let data = b"mississippi river";
        let (output, stats) = compress_with_stats(data).unwrap();
        assert_eq!(stats.input_bytes, data.len() as u64);
        assert_eq!(stats.output_bytes, output.len() as u64);
        assert_eq!(stats.symbol_count, 8);
        assert!(stats.max_code_length >= 3);
        assert!(stats.compression_ratio > 0.0);
    }

    #[test]
    fn test_deterministic() {
        let data = b"deterministic output for identical input";
        assert_eq!(compress_bytes(data).unwrap(), compress_bytes(data).unwrap());
    }
}
