//! huffpack - byte-oriented Huffman compression in a self-describing container
//!
//! This crate compresses one in-memory byte sequence at a time with a static
//! Huffman code and stores the code table next to the payload, so a container
//! can be decoded without any side information.
//!
//! # Features
//!
//! - Two-queue Huffman construction with a fixed tie-break, so identical input
//!   always produces identical output bytes
//! - Bit-exact container layout, most-significant-bit first throughout
//! - Typed errors for empty input, malformed and truncated containers
//! - Header inspection without decoding the payload
//! - Optional async file helpers (`async` feature)
//!
//! # Container layout
//!
//! | Field          | Size                               | Notes                      |
//! |----------------|------------------------------------|----------------------------|
//! | symbol count   | 8 bits                             | 0 means 256                |
//! | symbol entry   | 8 bits byte + 8 bits length + code | ascending frequency order  |
//! | payload count  | 16 bits, little-endian             | always 1                   |
//! | file flag      | 1 bit                              | always 1                   |
//! | payload length | 64 bits, little-endian             | original byte count        |
//! | payload        | one code per input byte            |                            |
//! | padding        | 0-7 zero bits                      |                            |
//!
//! # Example
//!
//! ```
//! use huffpack::{compress, decompress};
//!
//! let data = b"Hello, World! This is a test.";
//! let compressed = compress(data)?;
//! let restored = decompress(&compressed)?;
//! assert_eq!(&restored[..], &data[..]);
//! # Ok::<(), huffpack::HuffError>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// Public modules
pub mod bits;
pub mod common;
pub mod compress;
pub mod decompress;
pub mod error;

// Async modules (only available with async feature)
#[cfg(feature = "async")]
pub mod async_batch;
#[cfg(feature = "async")]
pub mod async_convenience;

// Re-export commonly used types
pub use common::{
    decode_code_length, encode_code_length, CompressionStats, ContainerHeader, HuffError,
    Result, SymbolEntry, MAX_CODE_LENGTH, MAX_SYMBOLS, PAYLOAD_COUNT,
};
pub use compress::{compress_with_stats, CodeTable, FrequencyTable, HuffmanTree};
pub use decompress::{read_header, DecodeTrie};

#[cfg(feature = "async")]
pub use async_batch::AsyncBatchProcessor;
#[cfg(feature = "async")]
pub use async_convenience::*;

/// Compress a byte sequence into a container
///
/// # Arguments
/// * `data` - The bytes to compress; must not be empty
///
/// # Returns
/// The container bytes, or `HuffError::EmptyInput` for empty input
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress::compress_bytes(data)
}

/// Decompress a container back into the original bytes
///
/// # Arguments
/// * `data` - A container produced by [`compress`]
///
/// # Returns
/// The original bytes, or an error describing why the container was rejected
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    decompress::decompress_bytes(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        let data = b"test";
        let compressed = compress(data).unwrap();
        let header = read_header(&compressed).unwrap();
        assert_eq!(header.payload_count, PAYLOAD_COUNT);
        assert_eq!(decompress(&compressed).unwrap(), data);
    }
}
