//! Common types and constants for the huffpack container format
//!
//! This module defines the error type, the format constants and the small
//! value types shared by the compression and decompression halves.

use thiserror::Error;

/// Number of distinct byte values, and therefore the largest symbol table
pub const MAX_SYMBOLS: usize = 256;

/// Largest code length the one-byte length field can describe (stored as 0)
pub const MAX_CODE_LENGTH: usize = 256;

/// The only payload count this format supports
pub const PAYLOAD_COUNT: u16 = 1;

/// Width of the payload count field in bytes
pub const PAYLOAD_COUNT_BYTES: usize = 2;

/// Width of the payload length field in bytes
pub const PAYLOAD_LENGTH_BYTES: usize = 8;

/// Error type for huffpack operations
#[derive(Debug, Error)]
pub enum HuffError {
    /// Compression was asked to process zero bytes
    #[error("Input is empty; nothing to compress")]
    EmptyInput,

    /// The container is structurally invalid
    #[error("Invalid container format: {0}")]
    InvalidFormat(String),

    /// The container ended before all expected fields were read
    #[error("Unexpected end of input")]
    TruncatedInput,

    /// A generated code contained something other than '0' or '1'
    #[error("Internal invariant violated: {0}")]
    InternalInvariantViolation(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for huffpack operations
pub type Result<T> = std::result::Result<T, HuffError>;

/// Map a code length onto the one-byte length field (256 wraps to 0)
pub fn encode_code_length(length: usize) -> u8 {
    (length % MAX_CODE_LENGTH) as u8
}

/// Map a stored length byte back onto a code length (0 means 256)
pub fn decode_code_length(stored: u8) -> usize {
    match stored {
        0 => MAX_CODE_LENGTH,
        n => n as usize,
    }
}

/// One entry of a stored symbol table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    /// The byte value this code stands for
    pub byte: u8,
    /// The code as a string of '0' and '1' characters
    pub code: String,
}

/// Everything a container says about itself before the payload bits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Symbol table in stored (ascending frequency) order
    pub symbols: Vec<SymbolEntry>,
    /// Payload count field
    pub payload_count: u16,
    /// File flag; folders are not supported
    pub is_file: bool,
    /// Number of bytes the payload decodes to
    pub payload_length: u64,
}

impl ContainerHeader {
    /// Length of the longest stored code
    pub fn max_code_length(&self) -> usize {
        self.symbols
            .iter()
            .map(|entry| entry.code.len())
            .max()
            .unwrap_or(0)
    }
}

/// Statistics for a compression run
#[derive(Debug, Default, Clone)]
pub struct CompressionStats {
    /// Bytes handed to the compressor
    pub input_bytes: u64,
    /// Bytes in the produced container
    pub output_bytes: u64,
    /// Number of distinct byte values in the input
    pub symbol_count: usize,
    /// Length of the longest assigned code
    pub max_code_length: usize,
    /// Output size divided by input size
    pub compression_ratio: f64,
}

impl CompressionStats {
    /// Build stats for one finished run
    pub fn new(
        input_bytes: u64,
        output_bytes: u64,
        symbol_count: usize,
        max_code_length: usize,
    ) -> Self {
        let compression_ratio = if input_bytes > 0 {
            output_bytes as f64 / input_bytes as f64
        } else {
            0.0
        };
        Self {
            input_bytes,
            output_bytes,
            symbol_count,
            max_code_length,
            compression_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length_wrap() {
        assert_eq!(encode_code_length(1), 1);
        assert_eq!(encode_code_length(255), 255);
        assert_eq!(encode_code_length(256), 0);

        assert_eq!(decode_code_length(1), 1);
        assert_eq!(decode_code_length(255), 255);
        assert_eq!(decode_code_length(0), 256);
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_SYMBOLS, 256);
        assert_eq!(MAX_CODE_LENGTH, 256);
        assert_eq!(PAYLOAD_COUNT, 1);
        assert_eq!(PAYLOAD_COUNT_BYTES, 2);
        assert_eq!(PAYLOAD_LENGTH_BYTES, 8);
    }

    #[test]
    fn test_stats_ratio() {
        let stats = CompressionStats::new(200, 50, 4, 3);
        assert!((stats.compression_ratio - 0.25).abs() < f64::EPSILON);

        let empty = CompressionStats::new(0, 0, 0, 0);
        assert_eq!(empty.compression_ratio, 0.0);
    }

    #[test]
    fn test_error_display() {
        let err = HuffError::InvalidFormat("payload count 2".to_string());
        assert_eq!(err.to_string(), "Invalid container format: payload count 2");
        assert_eq!(HuffError::TruncatedInput.to_string(), "Unexpected end of input");
    }
}
