#![no_main]
use libfuzzer_sys::fuzz_target;
use oxilzw::lzw;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic the decoder — only return errors.
    let mut out = Vec::new();
    let _ = lzw::decompress(&mut &data[..], &mut out);

    // Same input behind a valid header exercises the bit stream paths.
    let mut framed = Vec::with_capacity(data.len() + 3);
    framed.extend_from_slice(&lzw::MAGIC);
    framed.extend_from_slice(data);
    out.clear();
    let _ = lzw::decompress(&mut &framed[..], &mut out);
});
