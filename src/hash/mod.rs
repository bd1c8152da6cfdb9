// Hashing and match finding.
//
// This module provides:
// - Cascaded context hashes over a 13-byte lookahead
// - The flat position table they index
// - The four-candidate match finder and its acceptance policy

pub mod config;
pub mod matching;
pub mod rolling;
pub mod table;
