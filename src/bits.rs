//! Bit accumulator shared by the container writer and reader
//!
//! Both directions work most-significant-bit first: the writer shifts the
//! pending byte left and ORs the new bit into position 0, the reader hands
//! out bit 7 of the pending byte first.

use crate::{HuffError, Result};

/// A partial byte and the number of bits it holds
#[derive(Debug, Default, Clone, Copy)]
pub struct BitAccumulator {
    byte: u8,
    filled: u8,
}

impl BitAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits currently held (0..=7 between operations)
    pub fn filled(&self) -> u8 {
        self.filled
    }

    /// True when no partial byte is pending
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Shift one bit in; returns the completed byte once eight bits are held
    fn push(&mut self, bit: bool) -> Option<u8> {
        self.byte = (self.byte << 1) | bit as u8;
        self.filled += 1;
        if self.filled == 8 {
            let complete = self.byte;
            self.byte = 0;
            self.filled = 0;
            Some(complete)
        } else {
            None
        }
    }

    /// Load a fresh byte for reading
    fn load(&mut self, byte: u8) {
        self.byte = byte;
        self.filled = 8;
    }

    /// Shift the most significant pending bit out
    fn pop(&mut self) -> Option<bool> {
        if self.filled == 0 {
            return None;
        }
        let bit = self.byte & 0x80 != 0;
        self.byte <<= 1;
        self.filled -= 1;
        Some(bit)
    }

    /// Left-align the pending bits and zero-fill the rest of the byte
    fn take_padded(&mut self) -> Option<u8> {
        if self.filled == 0 {
            return None;
        }
        let padded = self.byte << (8 - self.filled);
        self.byte = 0;
        self.filled = 0;
        Some(padded)
    }
}

/// MSB-first bit writer appending to a byte vector
#[derive(Debug, Default)]
pub struct BitWriter {
    output: Vec<u8>,
    pending: BitAccumulator,
}

impl BitWriter {
    /// Create a writer with an empty output buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer whose output buffer has room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            output: Vec::with_capacity(capacity),
            pending: BitAccumulator::new(),
        }
    }

    /// Append a single bit
    pub fn write_bit(&mut self, bit: bool) {
        if let Some(byte) = self.pending.push(bit) {
            self.output.push(byte);
        }
    }

    /// Append all eight bits of `byte`, most significant first
    pub fn write_byte(&mut self, byte: u8) {
        if self.pending.is_empty() {
            self.output.push(byte);
            return;
        }
        for shift in (0..8).rev() {
            self.write_bit((byte >> shift) & 1 != 0);
        }
    }

    /// Append a code written as a string of '0' and '1' characters
    pub fn write_code(&mut self, code: &str) -> Result<()> {
        for ch in code.chars() {
            match ch {
                '0' => self.write_bit(false),
                '1' => self.write_bit(true),
                other => {
                    return Err(HuffError::InternalInvariantViolation(format!(
                        "code {code:?} contains {other:?}"
                    )))
                }
            }
        }
        Ok(())
    }

    /// Number of bits written so far
    pub fn bit_len(&self) -> u64 {
        self.output.len() as u64 * 8 + self.pending.filled() as u64
    }

    /// Pad the trailing partial byte with zero bits and return the output
    pub fn finish(mut self) -> Vec<u8> {
        if let Some(byte) = self.pending.take_padded() {
            self.output.push(byte);
        }
        self.output
    }
}

/// MSB-first bit reader over a byte slice
#[derive(Debug)]
pub struct BitReader<'a> {
    input: &'a [u8],
    pos: usize,
    pending: BitAccumulator,
}

impl<'a> BitReader<'a> {
    /// Start reading at the first bit of `input`
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            pending: BitAccumulator::new(),
        }
    }

    /// Read one bit; running past the end is `TruncatedInput`
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.pending.is_empty() {
            let byte = *self.input.get(self.pos).ok_or(HuffError::TruncatedInput)?;
            self.pos += 1;
            self.pending.load(byte);
        }
        self.pending.pop().ok_or(HuffError::TruncatedInput)
    }

    /// Read eight bits as one byte, most significant first
    pub fn read_byte(&mut self) -> Result<u8> {
        if self.pending.is_empty() {
            let byte = *self.input.get(self.pos).ok_or(HuffError::TruncatedInput)?;
            self.pos += 1;
            return Ok(byte);
        }
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | self.read_bit()? as u8;
        }
        Ok(byte)
    }

    /// Bits left before the end of the input
    pub fn remaining_bits(&self) -> u64 {
        (self.input.len() - self.pos) as u64 * 8 + self.pending.filled() as u64
    }
}
