// Stream framing: fixed header and end-of-stream trailer.
//
// Header layout (16 bytes, big-endian):
//   [0..2]   signature 0x57 0xBC
//   [2..4]   reserved, zero
//   [4..8]   high word of a 64-bit length, zero for inputs below 4 GiB
//   [8..12]  uncompressed length
//   [12..16] match window size
//
// Trailer layout (6 bytes):
//   [0..2]   end marker 0x05 0xFA
//   [2..6]   Adler-32 of the uncompressed input, big-endian

use std::io::{self, Write};

/// Stream signature.
pub const SIGNATURE: [u8; 2] = [0x57, 0xBC];

/// End-of-stream marker.
pub const END_MARKER: [u8; 2] = [0x05, 0xFA];

/// Encoded header size.
pub const HEADER_LEN: usize = 16;

/// Encoded trailer size.
pub const TRAILER_LEN: usize = 6;

/// Leading stream header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamHeader {
    /// Uncompressed input length.
    pub length: u32,
    /// Match window the stream was produced with.
    pub window: u32,
}

impl StreamHeader {
    /// Serialize the header.
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[..2].copy_from_slice(&SIGNATURE);
        buf[8..12].copy_from_slice(&self.length.to_be_bytes());
        buf[12..16].copy_from_slice(&self.window.to_be_bytes());
        buf
    }

    /// Write the header to `w`.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.encode())
    }
}

/// Closing stream trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamTrailer {
    /// Adler-32 of all input bytes.
    pub checksum: u32,
}

impl StreamTrailer {
    /// Serialize the trailer.
    pub fn encode(&self) -> [u8; TRAILER_LEN] {
        let mut buf = [0u8; TRAILER_LEN];
        buf[..2].copy_from_slice(&END_MARKER);
        buf[2..].copy_from_slice(&self.checksum.to_be_bytes());
        buf
    }

    /// Write the trailer to `w`.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.encode())
    }
}
