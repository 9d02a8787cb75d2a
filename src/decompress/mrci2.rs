//! MRCI2 token decoding and the decompression driver.
//!
//! MRCI2 is an LZ77-family scheme: a bitstream of literal and
//! back-reference tokens, distinguished by a short prefix code read
//! LSB-first:
//!
//! | Prefix | Token |
//! |--------|-------|
//! | `0`    | Literal, 7-bit payload (0x00-0x7F) |
//! | `11`   | Literal, 7-bit payload + 128 (0x80-0xFF) |
//! | `100`  | Back-reference, 6-bit displacement |
//! | `1010` | Back-reference, 8-bit displacement + 64 |
//! | `1011` | Back-reference, 12-bit displacement |
//!
//! A 12-bit displacement equal to 4095 is the end-of-sector marker: it
//! consumes its 16 token bits, carries no run length, and emits nothing.
//! Sectors are a conceptual 512-byte framing unit of the original format;
//! the decoder only skips the marker and never enforces sector lengths.
//!
//! Every other back-reference is followed by a run-length code: `z` zero
//! bits, a terminating one bit, then `z` extra bits, decoding to
//! `2 + 2^z + extra` bytes (minimum match length 3, maximum 513 at the
//! supported limit of `z = 8`).

use super::{bit_reader::BitReader, output::OutputWindow, DecompressError, Result};

/// Displacement offset added to the 8-bit (medium) displacement field.
const DISP_MED_OFFSET: usize = 64;

/// 12-bit displacement value reserved as the end-of-sector marker.
const END_OF_SECTOR: usize = 4095;

/// Maximum number of leading zero bits in a run-length code.
const MAX_RUN_ORDER: u32 = 8;

/// A single decoded token. Tokens are consumed immediately; nothing is
/// buffered between them.
#[derive(Debug, PartialEq, Eq)]
enum Token {
    Literal(u8),
    BackReference { displacement: usize, length: usize },
    EndOfSector,
}

/// Decode the run length ("byte count") that follows a back-reference
/// displacement.
fn decode_run_length(reader: &mut BitReader) -> Result<usize> {
    let mut order = 0u32;
    while !reader.read_bit()? {
        order += 1;
        if order > MAX_RUN_ORDER {
            return Err(DecompressError::InvalidRunLength { zeros: order });
        }
    }
    let extra = reader.read_bits(order) as usize;
    Ok(2 + (1usize << order) + extra)
}

/// Decode the next token from the stream.
///
/// The caller guarantees at least one bit remains; reads past the end
/// inside a token either yield zeros (multi-bit fields, covering trailing
/// padding) or fail with [`DecompressError::UnexpectedEof`] (a truncated
/// token after a one bit, which no valid encoder produces).
fn decode_token(reader: &mut BitReader) -> Result<Token> {
    if !reader.read_bit()? {
        return Ok(Token::Literal(reader.read_bits(7) as u8));
    }
    if reader.read_bit()? {
        return Ok(Token::Literal(128 + reader.read_bits(7) as u8));
    }

    let displacement = if !reader.read_bit()? {
        reader.read_bits(6) as usize
    } else if !reader.read_bit()? {
        reader.read_bits(8) as usize + DISP_MED_OFFSET
    } else {
        let raw = reader.read_bits(12) as usize;
        if raw == END_OF_SECTOR {
            return Ok(Token::EndOfSector);
        }
        raw
    };

    let length = decode_run_length(reader)?;
    Ok(Token::BackReference {
        displacement,
        length,
    })
}

/// Decompress an MRCI2 stream.
///
/// `expected_len` is the decompressed length recorded by the enclosing
/// container; it sizes the output buffer and caps the returned data. The
/// decoder loops until the bit cursor exhausts the input, so trailing
/// zero padding decodes as literal-0 tokens that the final truncation
/// drops. Whether the bytes produced actually match `expected_len` is the
/// caller's check to make; this function only guarantees it never writes
/// past `expected_len` plus one token of slack.
///
/// # Example
///
/// ```
/// // A stream of literal tokens: prefix bit 0 + 7 payload bits each
/// let compressed = [b'H' << 1, b'i' << 1];
/// let decompressed = mrci2::decompress(&compressed, 2).unwrap();
/// assert_eq!(decompressed, b"Hi");
/// ```
pub fn decompress(compressed: &[u8], expected_len: usize) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(compressed);
    let mut window = OutputWindow::new(expected_len);

    while !reader.is_eof() {
        match decode_token(&mut reader)? {
            Token::Literal(byte) => window.write_literal(byte)?,
            Token::BackReference {
                displacement,
                length,
            } => window.copy_match(displacement, length)?,
            Token::EndOfSector => {}
        }
    }

    Ok(window.into_bytes(expected_len))
}
