// LZW encoder: consumes raw bytes, grows the symbol table, emits codes.
//
// Per input byte the session either extends the pending match (table hit,
// nothing on the wire) or emits the pending symbol and restarts the match
// from the byte that broke it (table miss, which also appends the new
// entry). The emitted code is always the match *before* the extension
// failed, sized per the width phase contract in `width.rs`.
//
// Two output personalities: the binary bit-packed wire format, and a
// line-per-symbol trace for debugging. Trace output is not decodable.

use std::io::{self, Read, Write};

use log::debug;

use super::bits::BitPacker;
use super::error::CodecError;
use super::header;
use super::table::{ESCAPE, SymbolTable};
use super::width;

const READ_BUF: usize = 8 * 1024;

// ---------------------------------------------------------------------------
// Output sinks
// ---------------------------------------------------------------------------

enum SymbolSink<W: Write> {
    Packed(BitPacker<W>),
    Trace(W),
}

impl<W: Write> SymbolSink<W> {
    fn header(&mut self) -> io::Result<()> {
        match self {
            Self::Packed(p) => header::write_magic(p.get_mut()),
            Self::Trace(w) => writeln!(w, "MAGIC"),
        }
    }

    fn emit(&mut self, code: u16, width: u32) -> io::Result<()> {
        match self {
            Self::Packed(p) => p.emit(code, width),
            Self::Trace(w) => trace_symbol(w, code, width),
        }
    }

    fn finish(self) -> io::Result<W> {
        match self {
            Self::Packed(p) => p.finish(),
            Self::Trace(mut w) => {
                writeln!(w, "EOF")?;
                Ok(w)
            }
        }
    }
}

/// One trace line: decimal width, then the symbol. Printable literals get a
/// character annotation, the escape marker and compound ids a bracket form.
fn trace_symbol<W: Write>(w: &mut W, code: u16, width: u32) -> io::Result<()> {
    if code < 0x100 {
        if (0x1A..0x7F).contains(&code) {
            writeln!(w, "{width}<0x{code:02X}|{}>", code as u8 as char)
        } else {
            writeln!(w, "{width}<0x{code:02X}>")
        }
    } else if code == ESCAPE {
        writeln!(w, "{width}[Escape]")
    } else {
        writeln!(w, "{width}[0x{code:04X}]")
    }
}

// ---------------------------------------------------------------------------
// Encoder session
// ---------------------------------------------------------------------------

/// One compression session: owns the symbol table, the pending match and the
/// output sink. Construction writes the stream header.
pub struct Encoder<W: Write> {
    table: SymbolTable,
    pending: Option<u16>,
    sink: SymbolSink<W>,
    bytes_in: u64,
}

impl<W: Write> Encoder<W> {
    /// Binary (wire format) session.
    pub fn new(out: W) -> Result<Self, CodecError> {
        Self::with_sink(SymbolSink::Packed(BitPacker::new(out)))
    }

    /// Trace (human-readable) session. The output is a debugging aid and
    /// cannot be fed back into the decoder.
    pub fn trace(out: W) -> Result<Self, CodecError> {
        Self::with_sink(SymbolSink::Trace(out))
    }

    fn with_sink(mut sink: SymbolSink<W>) -> Result<Self, CodecError> {
        sink.header()?;
        Ok(Self {
            table: SymbolTable::new(),
            pending: None,
            sink,
            bytes_in: 0,
        })
    }

    /// Feed input bytes into the session.
    ///
    /// `TableFull` is a hard stop: the format has a reset code, but this
    /// encoder never emits it, so a full table cannot be recovered from
    /// mid-session.
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), CodecError> {
        for &b in buf {
            self.push(b)?;
        }
        self.bytes_in += buf.len() as u64;
        Ok(())
    }

    fn push(&mut self, b: u8) -> Result<(), CodecError> {
        let Some(current) = self.pending else {
            // first byte of the session
            self.pending = Some(b as u16);
            return Ok(());
        };

        if let Some(id) = self.table.lookup(current, b) {
            // match extended, nothing emitted
            self.pending = Some(id);
        } else {
            self.table.insert(current, b)?;
            self.sink
                .emit(current, width::code_width(self.table.entries()))?;
            self.pending = Some(b as u16);
        }
        Ok(())
    }

    /// Emit the final pending symbol, flush the bit stream and return the
    /// sink. Empty input produces just the header.
    pub fn finish(mut self) -> Result<W, CodecError> {
        if let Some(current) = self.pending {
            // The decoder mirrors one table insert for this code as well,
            // hence entries + 1 (see width.rs).
            self.sink
                .emit(current, width::code_width(self.table.entries() + 1))?;
        }
        debug!(
            "lzw encode: {} bytes in, {} table entries",
            self.bytes_in,
            self.table.entries()
        );
        Ok(self.sink.finish()?)
    }
}

// ---------------------------------------------------------------------------
// Streaming entry points
// ---------------------------------------------------------------------------

/// Compress `input` to `output` in the binary wire format. Returns the
/// number of input bytes consumed.
pub fn compress<R, W>(input: &mut R, output: &mut W) -> Result<u64, CodecError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    run_session(Encoder::new(&mut *output)?, input)
}

/// Compress `input` to `output` in the human-readable trace format.
pub fn compress_trace<R, W>(input: &mut R, output: &mut W) -> Result<u64, CodecError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    run_session(Encoder::trace(&mut *output)?, input)
}

fn run_session<R, W>(mut enc: Encoder<&mut W>, input: &mut R) -> Result<u64, CodecError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = [0u8; READ_BUF];
    let mut total = 0u64;
    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        enc.write_all(&buf[..n])?;
        total += n as u64;
    }
    enc.finish()?;
    Ok(total)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
