// LZW decoder: reads codes, reconstructs bytes, and mirrors the encoder's
// table growth so both sides derive identical identifiers without ever
// exchanging the table.
//
// Per code after the first, the decoder appends one entry: (previous code,
// first byte of the current code's sequence) — exactly the insert that made
// the encoder emit the previous code. A code equal to the table's logical
// size references the one entry the decoder has not mirrored yet; its
// sequence is the previous sequence plus that sequence's own first byte.

use std::io::{Read, Write};

use log::{debug, warn};

use super::bits::BitUnpacker;
use super::error::CodecError;
use super::header;
use super::table::{ESCAPE, SymbolTable};
use super::width;

/// Decoder behavior switches.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    /// Fail on a magic mismatch. When off, the mismatch is logged and
    /// decoding proceeds as if the header had been present.
    pub strict_header: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict_header: true,
        }
    }
}

/// Decompress `input` to `output` with default options (strict header).
/// Returns the number of bytes written.
pub fn decompress<R, W>(input: &mut R, output: &mut W) -> Result<u64, CodecError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    decompress_with(input, output, DecodeOptions::default())
}

/// Decompress `input` to `output`.
pub fn decompress_with<R, W>(
    input: &mut R,
    output: &mut W,
    opts: DecodeOptions,
) -> Result<u64, CodecError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    match header::read_magic(input) {
        Ok(()) => {}
        Err(CodecError::BadHeader { found }) if !opts.strict_header => {
            warn!(
                "bad magic header ({:02X} {:02X} {:02X}), decoding anyway",
                found[0], found[1], found[2]
            );
        }
        Err(e) => return Err(e),
    }

    let mut codes = BitUnpacker::new(input);
    let mut table = SymbolTable::new();
    let mut prev: Option<u16> = None;
    let mut seq = Vec::new();
    let mut total = 0u64;

    loop {
        let w = width::code_width(table.entries() + 2);
        let Some(code) = codes.extract(w)? else {
            break; // input exhausted on zero padding
        };

        if code == ESCAPE {
            table.reset();
            prev = None;
            continue;
        }

        seq.clear();
        let len = table.logical_len();
        if (code as usize) < len {
            table.resolve(code, &mut seq)?;
        } else if code as usize == len {
            // One code ahead of our table: only valid when it names the
            // entry implied by the previous code.
            let Some(p) = prev else {
                return Err(CodecError::InvalidSymbol(code));
            };
            table.resolve(p, &mut seq)?;
            seq.push(seq[0]);
        } else {
            return Err(CodecError::InvalidSymbol(code));
        }

        output.write_all(&seq)?;
        total += seq.len() as u64;

        if let Some(p) = prev {
            table.find_or_add(p, seq[0])?;
        }
        prev = Some(code);
    }

    debug!(
        "lzw decode: {total} bytes out, {} table entries",
        table.entries()
    );
    Ok(total)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
