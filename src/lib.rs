//! Binembed: embed binary files in C/C++ source, with an LZ-style
//! compressor producing streams readable by the stb decompressor.
//!
//! The crate provides:
//! - A single-pass compressor (`compress`, built on `hash`, `stream` and `engine`)
//! - An Adler-32 utility matching the stream trailer (`checksum`)
//! - C/C++ declaration rendering (`render`)
//! - File-oriented helpers (`io`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use binembed::{CompressOptions, adler32, compress_to};
//!
//! let data = b"hello hello hello hello hello hello";
//! let (packed, stats) = compress_to(Vec::new(), data, &CompressOptions::default()).unwrap();
//! assert_eq!(stats.output_size, packed.len() as u64);
//! assert_eq!(stats.checksum, adler32(1, data));
//! ```

pub mod checksum;
pub mod compress;
pub mod engine;
pub mod hash;
pub mod io;
pub mod render;
pub mod stream;

#[cfg(feature = "cli")]
pub mod cli;

pub use checksum::adler32;
pub use compress::{
    CompressError, CompressOptions, CompressStats, compress, compress_bound, compress_to,
    compress_with_options,
};
