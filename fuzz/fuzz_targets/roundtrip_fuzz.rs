#![no_main]
use libfuzzer_sys::fuzz_target;
use oxilzw::lzw::{self, CodecError};

fuzz_target!(|data: &[u8]| {
    let mut packed = Vec::new();
    match lzw::compress(&mut &data[..], &mut packed) {
        Ok(_) => {}
        // Inputs beyond the table capacity are rejected, not round-tripped.
        Err(CodecError::TableFull(_)) => return,
        Err(e) => panic!("compress failed: {e}"),
    }

    let mut decoded = Vec::new();
    lzw::decompress(&mut &packed[..], &mut decoded).unwrap();
    assert_eq!(decoded, data);
});
