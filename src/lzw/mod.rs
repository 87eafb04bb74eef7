// Adaptive LZW wire format implementation.
//
// One 3-byte magic header followed by a contiguous, LSB-first bit-packed
// sequence of symbol codes whose width grows with the symbol table.
//
// # Modules
//
// - `table`   — append-only (head, follow) symbol dictionary
// - `width`   — code-width policy derived from table size
// - `bits`    — variable-width bit packing/unpacking
// - `header`  — magic header read/write
// - `encoder` — compression sessions (binary and trace personalities)
// - `decoder` — decompression sessions with lockstep table mirroring
// - `error`   — unified codec error type

pub mod bits;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod header;
pub mod table;
pub mod width;

// Re-export key types for convenience.
pub use bits::{BitPacker, BitUnpacker};
pub use decoder::{DecodeOptions, decompress, decompress_with};
pub use encoder::{Encoder, compress, compress_trace};
pub use error::CodecError;
pub use header::MAGIC;
pub use table::{ESCAPE, FIRST_COMPOUND, MAX_ENTRIES, SymbolDef, SymbolTable};
