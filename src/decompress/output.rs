//! Output buffer for MRCI2 decompression.
//!
//! Unlike a ring-buffer dictionary, MRCI2 back-references always stay within
//! the output produced so far (maximum displacement 4095), so the window is
//! simply the output buffer itself. The buffer is pre-sized to the caller's
//! expected length plus [`MAX_TOKEN_OUTPUT`] of slack, and every write is
//! bounds-checked against that capacity.

use super::{DecompressError, Result};

/// Maximum bytes a single token can produce: a 513-byte run plus up to
/// 3 bytes of framing slack the original format accounts for.
pub const MAX_TOKEN_OUTPUT: usize = 516;

/// Capacity-checked output buffer with back-reference copy support.
pub struct OutputWindow {
    buf: Vec<u8>,
    /// Current write position.
    pos: usize,
}

impl OutputWindow {
    /// Create an output buffer for a stream expected to decompress to
    /// `expected_len` bytes.
    pub fn new(expected_len: usize) -> Self {
        Self {
            buf: vec![0; expected_len + MAX_TOKEN_OUTPUT],
            pos: 0,
        }
    }

    /// Append one literal byte.
    #[inline]
    pub fn write_literal(&mut self, byte: u8) -> Result<()> {
        if self.pos >= self.buf.len() {
            return Err(DecompressError::BufferOverflow {
                needed: self.pos + 1,
                capacity: self.buf.len(),
            });
        }
        self.buf[self.pos] = byte;
        self.pos += 1;
        Ok(())
    }

    /// Copy `length` bytes starting `displacement` bytes back from the
    /// current write position.
    ///
    /// When `displacement < length` the run overlaps itself: freshly
    /// written bytes become source bytes for the rest of the copy,
    /// producing a repeating pattern. Handled by copying at most
    /// `displacement` bytes per step, which strictly shrinks the
    /// remainder each round.
    pub fn copy_match(&mut self, displacement: usize, length: usize) -> Result<()> {
        if displacement == 0 || displacement > self.pos {
            return Err(DecompressError::InvalidBackReference {
                displacement,
                position: self.pos,
            });
        }
        if self.pos + length > self.buf.len() {
            return Err(DecompressError::BufferOverflow {
                needed: self.pos + length,
                capacity: self.buf.len(),
            });
        }

        let mut remaining = length;
        while remaining > 0 {
            let step = remaining.min(displacement);
            let src = self.pos - displacement;
            self.buf.copy_within(src..src + step, self.pos);
            self.pos += step;
            remaining -= step;
        }
        Ok(())
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.pos
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// Consume the buffer, truncated to at most `limit` bytes of output.
    ///
    /// Trailing padding tokens may have written a few bytes past the
    /// caller's expected length; those never leave this buffer.
    pub fn into_bytes(mut self, limit: usize) -> Vec<u8> {
        self.buf.truncate(self.pos.min(limit));
        self.buf
    }
}
