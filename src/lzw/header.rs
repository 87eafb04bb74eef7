// Stream header: a fixed 3-byte magic written raw, ahead of the bit-packed
// code stream.

use std::io::{self, Read, Write};

use super::error::CodecError;

/// Magic sequence opening every compressed stream.
pub const MAGIC: [u8; 3] = [0x1F, 0x9D, 0x90];

/// Write the magic header.
pub fn write_magic<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    w.write_all(&MAGIC)
}

/// Read and verify the magic header.
///
/// A mismatch returns `BadHeader` carrying the bytes actually read; the
/// caller chooses whether that is fatal.
pub fn read_magic<R: Read + ?Sized>(r: &mut R) -> Result<(), CodecError> {
    let mut found = [0u8; 3];
    r.read_exact(&mut found)?;
    if found != MAGIC {
        return Err(CodecError::BadHeader { found });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn magic_roundtrip() {
        let mut buf = Vec::new();
        write_magic(&mut buf).unwrap();
        assert_eq!(buf, [0x1F, 0x9D, 0x90]);
        read_magic(&mut Cursor::new(&buf)).unwrap();
    }

    #[test]
    fn mismatch_reports_found_bytes() {
        let data = [0x1F, 0x8B, 0x08]; // gzip, not us
        match read_magic(&mut Cursor::new(&data)) {
            Err(CodecError::BadHeader { found }) => assert_eq!(found, data),
            other => panic!("expected BadHeader, got {other:?}"),
        }
    }

    #[test]
    fn short_input_is_an_io_error() {
        let data = [0x1F];
        assert!(matches!(
            read_magic(&mut Cursor::new(&data)),
            Err(CodecError::Io(_))
        ));
    }
}
