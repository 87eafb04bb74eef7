use oxilzw::lzw;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = b"Hello from the land of adaptive dictionaries, hello again";

    let mut packed = Vec::new();
    lzw::compress(&mut &input[..], &mut packed)?;

    let mut restored = Vec::new();
    lzw::decompress(&mut &packed[..], &mut restored)?;
    assert_eq!(restored, input);

    println!(
        "compressed {} bytes -> {} bytes -> restored {} bytes",
        input.len(),
        packed.len(),
        restored.len()
    );

    Ok(())
}
