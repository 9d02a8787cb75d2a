//! Bit reader for MRCI2 compressed streams.
//!
//! Reads bits from a byte stream, LSB first within each byte (MRCI2
//! convention): bit 0 of a byte has value 1, bit 7 has value 128.
//!
//! End-of-stream policy: [`BitReader::read_bit`] is strict and returns
//! [`DecompressError::UnexpectedEof`] once the cursor reaches the end;
//! [`BitReader::read_bits`] is lenient and returns 0 without consuming
//! anything when fewer than `n` bits remain. The lenient path is what lets
//! trailing zero padding at the end of a stream decode as harmless
//! literal-0 tokens instead of an error.

use super::{DecompressError, Result};

/// Bit reader that reads from a byte slice.
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Bit cursor, monotonically increasing, in `[0, bit_len]`.
    pos: usize,
    /// Total number of bits in `data`.
    bit_len: usize,
}

impl<'a> BitReader<'a> {
    /// Create a new bit reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            bit_len: data.len() * 8,
        }
    }

    /// Read a single bit and advance the cursor.
    ///
    /// Errors with [`DecompressError::UnexpectedEof`] if no bits remain.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.pos >= self.bit_len {
            return Err(DecompressError::UnexpectedEof);
        }
        let bit = (self.data[self.pos >> 3] >> (self.pos & 7)) & 1;
        self.pos += 1;
        Ok(bit != 0)
    }

    /// Read `n` bits and advance the cursor.
    ///
    /// The first bit read becomes bit 0 of the result, the second bit 1,
    /// and so on (LSB-first accumulation, not big-endian).
    ///
    /// Returns 0 without consuming input if fewer than `n` bits remain.
    #[inline]
    pub fn read_bits(&mut self, n: u32) -> u32 {
        debug_assert!(n <= 16);

        if self.pos + n as usize > self.bit_len {
            return 0;
        }

        let mut value = 0u32;
        for i in 0..n {
            let bit = (self.data[self.pos >> 3] >> (self.pos & 7)) & 1;
            value |= (bit as u32) << i;
            self.pos += 1;
        }
        value
    }

    /// Get the current bit position.
    pub fn bit_position(&self) -> usize {
        self.pos
    }

    /// Total number of bits in the underlying stream.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Check if all input bits have been consumed.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.bit_len
    }

    /// Remaining bits available.
    pub fn remaining_bits(&self) -> usize {
        self.bit_len - self.pos
    }
}
