//! ContainerReader - parses a container and decodes its payload
//!
//! The reader mirrors [`crate::compress::ContainerWriter`]: one MSB-first bit
//! stream, multi-byte integers least significant byte first. Any field that
//! runs past the end of the input is `TruncatedInput`; any field whose value
//! the format does not allow is `InvalidFormat`.

use super::trie::DecodeTrie;
use crate::bits::BitReader;
use crate::common::{
    decode_code_length, ContainerHeader, SymbolEntry, MAX_SYMBOLS, PAYLOAD_COUNT,
    PAYLOAD_COUNT_BYTES, PAYLOAD_LENGTH_BYTES,
};
use crate::{HuffError, Result};

/// Bit-level container decoder
#[derive(Debug)]
pub struct ContainerReader<'a> {
    bits: BitReader<'a>,
}

impl<'a> ContainerReader<'a> {
    /// Start reading a container from its first byte
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            bits: BitReader::new(input),
        }
    }

    /// Parse the symbol table and metadata block, growing the trie as codes
    /// are read
    pub fn read_header(&mut self) -> Result<(ContainerHeader, DecodeTrie)> {
        let symbol_count = match self.bits.read_byte()? {
            0 => MAX_SYMBOLS,
            n => n as usize,
        };

        let mut trie = DecodeTrie::new();
        let mut symbols = Vec::with_capacity(symbol_count);
        let mut seen = [false; MAX_SYMBOLS];

        for _ in 0..symbol_count {
            let byte = self.bits.read_byte()?;
            let stored_length = self.bits.read_byte()?;

            if seen[byte as usize] {
                return Err(HuffError::InvalidFormat(format!(
                    "byte {byte:#04x} appears twice in the symbol table"
                )));
            }
            seen[byte as usize] = true;

            // A lone symbol has an empty code, which is stored as length 0
            let length = if symbol_count == 1 && stored_length == 0 {
                0
            } else {
                decode_code_length(stored_length)
            };

            let mut code = String::with_capacity(length);
            let mut path = Vec::with_capacity(length);
            for _ in 0..length {
                let bit = self.bits.read_bit()?;
                code.push(if bit { '1' } else { '0' });
                path.push(bit);
            }
            trie.insert(byte, path)?;

            log::trace!("stored symbol {byte:#04x} code {code}");
            symbols.push(SymbolEntry { byte, code });
        }

        let payload_count = self.read_le(PAYLOAD_COUNT_BYTES)? as u16;
        if payload_count != PAYLOAD_COUNT {
            return Err(HuffError::InvalidFormat(format!(
                "payload count is {payload_count}, expected {PAYLOAD_COUNT}"
            )));
        }

        let is_file = self.bits.read_bit()?;
        if !is_file {
            return Err(HuffError::InvalidFormat(
                "folder payloads are not supported".to_string(),
            ));
        }

        let payload_length = self.read_le(PAYLOAD_LENGTH_BYTES)?;

        let header = ContainerHeader {
            symbols,
            payload_count,
            is_file,
            payload_length,
        };
        Ok((header, trie))
    }

    /// Decode exactly `count` symbols from the payload
    pub fn read_payload(&mut self, trie: &DecodeTrie, count: u64) -> Result<Vec<u8>> {
        let count = usize::try_from(count).map_err(|_| {
            HuffError::InvalidFormat(format!("payload length {count} does not fit in memory"))
        })?;

        if let Some(byte) = trie.single_symbol() {
            let mut output = Vec::new();
            output.try_reserve_exact(count).map_err(|_| {
                HuffError::InvalidFormat(format!("payload length {count} cannot be allocated"))
            })?;
            output.resize(count, byte);
            return Ok(output);
        }

        // Every symbol costs at least one bit
        let available = usize::try_from(self.bits.remaining_bits()).unwrap_or(usize::MAX);
        let mut output = Vec::with_capacity(count.min(available));
        for _ in 0..count {
            output.push(trie.decode_symbol(&mut self.bits)?);
        }
        Ok(output)
    }

    /// Read `width` bytes as an integer, least significant first
    fn read_le(&mut self, width: usize) -> Result<u64> {
        let mut value = 0u64;
        let mut scale = 1u64;
        for _ in 0..width {
            value += self.bits.read_byte()? as u64 * scale;
            scale = scale.wrapping_mul(256);
        }
        Ok(value)
    }
}
