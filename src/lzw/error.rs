// Codec error type shared by every stage of the LZW pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// The 3-byte magic at the start of a compressed stream did not match.
    #[error(
        "bad magic header: expected 1F 9D 90, got {:02X} {:02X} {:02X}",
        found[0], found[1], found[2]
    )]
    BadHeader { found: [u8; 3] },

    /// A code referenced the escape marker where a literal was expected, or
    /// an identifier past the end of the symbol table.
    #[error("invalid symbol {0:#06X} in stream")]
    InvalidSymbol(u16),

    /// The symbol table hit its compound-entry capacity. The encoder never
    /// emits a reset, so this is fatal for the session.
    #[error("symbol table full ({0} compound entries)")]
    TableFull(usize),

    /// Input ended in the middle of a code with nonzero bits left over.
    /// All-zero leftovers are flush padding and are not an error.
    #[error("truncated stream: {bits} nonzero bits left mid-code")]
    TruncatedStream { bits: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_header_names_the_bytes() {
        let e = CodecError::BadHeader {
            found: [0x50, 0x4B, 0x03],
        };
        assert_eq!(
            e.to_string(),
            "bad magic header: expected 1F 9D 90, got 50 4B 03"
        );
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let e: CodecError = io.into();
        assert!(matches!(e, CodecError::Io(_)));
    }
}
