// Compressed stream format.
//
// This module provides:
// - Opcode definitions and their byte encodings
// - Header and trailer framing
// - The stream encoder that writes them to an output sink

pub mod encoder;
pub mod header;
pub mod opcode;

pub use encoder::{StreamEncoder, StreamStats};
pub use header::{StreamHeader, StreamTrailer};
pub use opcode::Opcode;
