//! MRCI2 decompression.
//!
//! Implements the MRCI2 LZ77-family bitstream decoder used for LRM bundle
//! payloads. The caller hands in the raw compressed bytes (extracted from
//! the bundle container upstream) and the decompressed length declared by
//! the container header; the decoder reconstructs the original data.
//!
//! ## Architecture
//!
//! The decompression pipeline:
//!
//! ```text
//! Compressed Data
//!       ↓
//! ┌─────────────┐
//! │ BitReader   │ ← Bit-level access, LSB-first
//! └─────────────┘
//!       ↓
//! ┌─────────────┐
//! │ Tokens      │ ← Literals, back-references, end-of-sector
//! └─────────────┘
//!       ↓
//! ┌─────────────┐
//! │ OutputWindow│ ← Expand literals and self-overlapping copies
//! └─────────────┘
//!       ↓
//! Decompressed Data
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! let payload = bundle.compressed_body();
//! let data = mrci2::decompress(payload, bundle.message_length())?;
//! ```
//!
//! A `decompress` call holds no shared state and may run concurrently
//! with other calls.

mod bit_reader;
mod mrci2;
mod output;


pub use bit_reader::BitReader;
pub use mrci2::decompress;
pub use output::{OutputWindow, MAX_TOKEN_OUTPUT};

use std::fmt;

/// Decompression errors.
///
/// Any error aborts the whole `decompress` call; the format has no
/// resynchronization points, so nothing is retried and no partial output
/// is returned.
#[derive(Debug)]
pub enum DecompressError {
    /// A required bit was read past the end of the compressed input.
    UnexpectedEof,
    /// A run-length code carried more leading zero bits than the format
    /// allows (more than 8).
    InvalidRunLength {
        /// Leading zeros counted before giving up.
        zeros: u32,
    },
    /// A back-reference pointed at data that does not exist: displacement
    /// of zero, or further back than the output produced so far.
    InvalidBackReference {
        /// Displacement of the offending token.
        displacement: usize,
        /// Output position when it was decoded.
        position: usize,
    },
    /// A write would exceed the output buffer capacity. The stream is
    /// corrupt, or the caller's expected-length hint was too small.
    BufferOverflow {
        /// Bytes the write would have required.
        needed: usize,
        /// Allocated capacity.
        capacity: usize,
    },
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "Unexpected end of compressed data"),
            Self::InvalidRunLength { zeros } => {
                write!(f, "Invalid run length code: {} leading zeros", zeros)
            }
            Self::InvalidBackReference {
                displacement,
                position,
            } => {
                write!(
                    f,
                    "Invalid back reference: displacement {} at output position {}",
                    displacement, position
                )
            }
            Self::BufferOverflow { needed, capacity } => {
                write!(
                    f,
                    "Output buffer overflow: need {} bytes, capacity {}",
                    needed, capacity
                )
            }
        }
    }
}

impl std::error::Error for DecompressError {}

pub type Result<T> = std::result::Result<T, DecompressError>;
