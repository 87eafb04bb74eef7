// Variable-width bit packing for symbol codes.
//
// Wire contract: codes are packed LSB-first within each byte and run
// contiguously across byte boundaries; the final partial byte is zero-padded
// in its high bits. No alternative ordering is compatible.

use std::io::{self, Read, Write};

use super::error::CodecError;

// ---------------------------------------------------------------------------
// Packer
// ---------------------------------------------------------------------------

/// Serializes variable-width codes into a byte stream.
///
/// Keeps fewer than 8 pending bits between calls; full bytes are written as
/// soon as they complete.
#[derive(Debug)]
pub struct BitPacker<W: Write> {
    out: W,
    acc: u32,
    nbits: u32,
}

impl<W: Write> BitPacker<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            acc: 0,
            nbits: 0,
        }
    }

    /// Append the low `width` bits of `value` to the stream.
    pub fn emit(&mut self, value: u16, width: u32) -> io::Result<()> {
        debug_assert!((9..=16).contains(&width));
        debug_assert!((value as u32) < (1u32 << width) || width == 16);

        self.acc |= (value as u32) << self.nbits;
        self.nbits += width;
        while self.nbits >= 8 {
            self.out.write_all(&[self.acc as u8])?;
            self.acc >>= 8;
            self.nbits -= 8;
        }
        Ok(())
    }

    /// Write out any pending partial byte (zero-padded) and return the sink.
    pub fn finish(mut self) -> io::Result<W> {
        if self.nbits > 0 {
            self.out.write_all(&[self.acc as u8])?;
            self.acc = 0;
            self.nbits = 0;
        }
        Ok(self.out)
    }

    /// Access the underlying writer (header bytes bypass the bit stream).
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }
}

// ---------------------------------------------------------------------------
// Unpacker
// ---------------------------------------------------------------------------

/// The inverse of [`BitPacker`]: accumulates input bytes and hands back
/// fixed-width codes.
#[derive(Debug)]
pub struct BitUnpacker<R: Read> {
    input: R,
    acc: u32,
    nbits: u32,
}

impl<R: Read> BitUnpacker<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            acc: 0,
            nbits: 0,
        }
    }

    /// Remove and return the next `width` bits.
    ///
    /// Returns `Ok(None)` on a clean end of stream: input exhausted with only
    /// zero bits left over (flush padding). Nonzero leftovers mean the stream
    /// was cut mid-code and surface as `TruncatedStream`.
    pub fn extract(&mut self, width: u32) -> Result<Option<u16>, CodecError> {
        debug_assert!((9..=16).contains(&width));

        while self.nbits < width {
            match self.read_byte()? {
                Some(byte) => {
                    self.acc |= (byte as u32) << self.nbits;
                    self.nbits += 8;
                }
                None if self.acc == 0 => return Ok(None),
                None => {
                    return Err(CodecError::TruncatedStream { bits: self.nbits });
                }
            }
        }

        let code = (self.acc & ((1u32 << width) - 1)) as u16;
        self.acc >>= width;
        self.nbits -= width;
        Ok(Some(code))
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.input
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(codes: &[(u16, u32)]) -> Vec<u8> {
        let mut p = BitPacker::new(Vec::new());
        for &(value, width) in codes {
            p.emit(value, width).unwrap();
        }
        p.finish().unwrap()
    }

    #[test]
    fn lsb_first_byte_layout() {
        // Two 9-bit codes: 0x41 then 0x42.
        //   bits 0..8   = 0x41            -> byte 0x41
        //   bits 9..17  = 0x42 << 1       -> byte 0x84, leftover bits 0b00
        // flush pads the 2 leftover bits to 0x00.
        assert_eq!(pack(&[(0x41, 9), (0x42, 9)]), vec![0x41, 0x84, 0x00]);
    }

    #[test]
    fn high_bit_of_nine_bit_code_lands_in_next_byte() {
        // 0x1A5 = 1_1010_0101: low byte 0xA5, ninth bit padded to 0x01.
        assert_eq!(pack(&[(0x1A5, 9)]), vec![0xA5, 0x01]);
    }

    #[test]
    fn no_pending_bits_means_no_flush_byte() {
        // Eight 9-bit codes fill exactly 9 bytes.
        let codes: Vec<(u16, u32)> = (0..8).map(|i| (i as u16, 9)).collect();
        assert_eq!(pack(&codes).len(), 9);
    }

    #[test]
    fn empty_packer_writes_nothing() {
        assert!(pack(&[]).is_empty());
    }

    #[test]
    fn mixed_width_roundtrip() {
        let codes: &[(u16, u32)] = &[
            (0x1FF, 9),
            (0x000, 9),
            (0x2A7, 10),
            (0x3FF, 10),
            (0xFFFF, 16),
            (0x0001, 12),
        ];
        let bytes = pack(codes);
        let mut u = BitUnpacker::new(&bytes[..]);
        for &(value, width) in codes {
            assert_eq!(u.extract(width).unwrap(), Some(value));
        }
        assert_eq!(u.extract(9).unwrap(), None);
    }

    #[test]
    fn zero_padding_terminates_cleanly() {
        let bytes = pack(&[(0x41, 9)]);
        let mut u = BitUnpacker::new(&bytes[..]);
        assert_eq!(u.extract(9).unwrap(), Some(0x41));
        assert_eq!(u.extract(9).unwrap(), None);
        // repeated polls after end stay clean
        assert_eq!(u.extract(9).unwrap(), None);
    }

    #[test]
    fn nonzero_leftover_is_truncation() {
        let mut u = BitUnpacker::new(&[0xFF][..]);
        assert!(matches!(
            u.extract(9),
            Err(CodecError::TruncatedStream { bits: 8 })
        ));
    }

    #[test]
    fn empty_input_is_clean_end() {
        let mut u = BitUnpacker::new(&[][..]);
        assert_eq!(u.extract(9).unwrap(), None);
    }
}
