//! ContainerWriter - serializes a code table and payload into a container
//!
//! Every field goes through one MSB-first bit stream, so the symbol table
//! codes, the file flag and the payload are packed without byte alignment.
//! Multi-byte integers are written least significant byte first, one byte at
//! a time, independent of host byte order.

use super::tree::CodeTable;
use crate::bits::BitWriter;
use crate::common::{encode_code_length, PAYLOAD_COUNT, PAYLOAD_COUNT_BYTES, PAYLOAD_LENGTH_BYTES};
use crate::{HuffError, Result};

/// Bit-level container encoder
#[derive(Debug, Default)]
pub struct ContainerWriter {
    bits: BitWriter,
}

impl ContainerWriter {
    /// Create a writer with an empty output buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer expecting roughly `capacity` output bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: BitWriter::with_capacity(capacity),
        }
    }

    /// Write the symbol count and one entry per symbol, in stored order
    pub fn write_symbol_table(&mut self, table: &CodeTable) -> Result<()> {
        // 256 symbols wrap to 0
        self.bits.write_byte(table.len() as u8);

        for (byte, code) in table.entries() {
            self.bits.write_byte(byte);
            self.bits.write_byte(encode_code_length(code.len()));
            self.bits.write_code(code)?;
        }
        Ok(())
    }

    /// Write payload count, file flag and payload length
    pub fn write_metadata(&mut self, payload_length: u64) {
        self.write_le(PAYLOAD_COUNT as u64, PAYLOAD_COUNT_BYTES);
        self.bits.write_bit(true);
        self.write_le(payload_length, PAYLOAD_LENGTH_BYTES);
    }

    /// Write the code of every byte of `data`
    pub fn write_payload(&mut self, data: &[u8], table: &CodeTable) -> Result<()> {
        for &byte in data {
            let code = table.code(byte).ok_or_else(|| {
                HuffError::InternalInvariantViolation(format!("no code for byte {byte:#04x}"))
            })?;
            self.bits.write_code(code)?;
        }
        Ok(())
    }

    /// Zero-pad the trailing byte and return the container
    pub fn finish(self) -> Vec<u8> {
        self.bits.finish()
    }

    /// Write `width` bytes of `value`, least significant first
    fn write_le(&mut self, mut value: u64, width: usize) {
        for _ in 0..width {
            self.bits.write_byte((value % 256) as u8);
            value /= 256;
        }
    }
}
