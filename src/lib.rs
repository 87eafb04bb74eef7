//! Oxilzw: adaptive LZW compression/decompression in Rust.
//!
//! The crate provides:
//! - A pure-Rust adaptive LZW engine with a variable-width bit-packed wire
//!   format (`lzw`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use oxilzw::lzw;
//!
//! let input = b"to be or not to be, that is the question";
//!
//! let mut packed = Vec::new();
//! lzw::compress(&mut &input[..], &mut packed).unwrap();
//!
//! let mut decoded = Vec::new();
//! lzw::decompress(&mut &packed[..], &mut decoded).unwrap();
//! assert_eq!(decoded, input);
//! ```

pub mod lzw;

#[cfg(feature = "cli")]
pub mod cli;
