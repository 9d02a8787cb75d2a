//! MRCI2 bitstream decompression.
//!
//! Decoder for the MRCI2 compression scheme used inside LRM bundle files.
//! The surrounding container format (a multipart MIME bundle) records
//! where the compressed body starts and how long the decompressed data
//! is; this crate takes exactly those two things and gives back the
//! original bytes:
//!
//! ```
//! let compressed = [b'H' << 1, b'i' << 1];
//! let data = mrci2::decompress(&compressed, 2).unwrap();
//! assert_eq!(data, b"Hi");
//! ```
//!
//! Container parsing, file I/O, and ZIP payloads are out of scope; only
//! the MRCI2 bitstream itself is handled here.

pub mod decompress;

pub use decompress::{decompress, DecompressError};
