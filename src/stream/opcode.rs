// Opcode layer: variable-width literal and copy instructions.
//
// Every opcode is self-describing from its first byte:
//
//   first byte   opcode              fields (big-endian)
//   0x80..=0xFF  short match         len-1 in low 7 bits, 1 byte dist-1
//   0x40..=0x7F  medium match        0x4000+dist-1 (2 bytes), 1 byte len-1
//   0x20..=0x3F  short literal       len-1 in low 5 bits
//   0x18..=0x1F  far match           0x180000+dist-1 (3 bytes), 1 byte len-1
//   0x10..=0x17  far long match      0x100000+dist-1 (3 bytes), 2 bytes len-1
//   0x08..=0x0F  medium literal      0x0800+len-1 (2 bytes)
//   0x07         long literal        0x070000+len-1 (3 bytes)
//   0x06         extended match      tag, 3 bytes dist-1, 1 byte len-1
//   0x05 0xFA    end of stream       (trailer, see header.rs)
//   0x04         extended long match tag, 3 bytes dist-1, 2 bytes len-1
//
// Literal opcodes are followed by the literal bytes themselves.

use std::io::{self, Write};

/// Largest encoded opcode (extended long match).
pub const MAX_OPCODE_LEN: usize = 6;

/// Longest literal run a single opcode can carry.
pub const MAX_LITERAL_RUN: usize = 65_536;

const SHORT_LITERAL_MAX: usize = 32;
const MEDIUM_LITERAL_MAX: usize = 2_048;

const SHORT_MATCH_MAX_LEN: usize = 0x80;
const SHORT_MATCH_MAX_DIST: usize = 0x100;
const MEDIUM_MATCH_MIN_LEN: usize = 6;
const MEDIUM_MATCH_MAX_DIST: usize = 0x4000;
const FAR_MATCH_MIN_LEN: usize = 8;
const FAR_LONG_MATCH_MIN_LEN: usize = 9;
const FAR_MATCH_MAX_DIST: usize = 0x8_0000;
const EXTENDED_MATCH_MIN_LEN: usize = 10;
const EXTENDED_MATCH_MAX_DIST: usize = 0x100_0000;
const ONE_BYTE_LEN_MAX: usize = 0x100;
const TWO_BYTE_LEN_MAX: usize = 0x1_0000;

/// A single encoded instruction.
///
/// `len` and `dist` hold the real (not biased) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// Literal run of 1..=32 bytes.
    ShortLiteral { len: usize },
    /// Literal run of 33..=2048 bytes.
    MediumLiteral { len: usize },
    /// Literal run of 2049..=65536 bytes.
    LongLiteral { len: usize },
    /// Copy of 3..=128 bytes from up to 256 back.
    ShortMatch { len: usize, dist: usize },
    /// Copy of 6..=256 bytes from up to 16384 back.
    MediumMatch { len: usize, dist: usize },
    /// Copy of 8..=256 bytes from up to 524288 back.
    FarMatch { len: usize, dist: usize },
    /// Copy of 9..=65536 bytes from up to 524288 back.
    FarLongMatch { len: usize, dist: usize },
    /// Copy of 10..=65536 bytes from up to 16 MiB back.
    ExtendedMatch { len: usize, dist: usize },
}

impl Opcode {
    /// Literal opcode for a run of `len` bytes (`1..=MAX_LITERAL_RUN`).
    pub fn literal(len: usize) -> Self {
        debug_assert!((1..=MAX_LITERAL_RUN).contains(&len));
        if len <= SHORT_LITERAL_MAX {
            Self::ShortLiteral { len }
        } else if len <= MEDIUM_LITERAL_MAX {
            Self::MediumLiteral { len }
        } else {
            Self::LongLiteral { len }
        }
    }

    /// Narrowest copy opcode that can express `len` bytes at `dist`.
    ///
    /// Returns `None` when no class fits; the caller then treats the
    /// position as a literal.
    pub fn for_match(len: usize, dist: usize) -> Option<Self> {
        if len < 3 || dist == 0 {
            return None;
        }
        let op = if len <= SHORT_MATCH_MAX_LEN && dist <= SHORT_MATCH_MAX_DIST {
            Self::ShortMatch { len, dist }
        } else if len >= MEDIUM_MATCH_MIN_LEN
            && len <= ONE_BYTE_LEN_MAX
            && dist <= MEDIUM_MATCH_MAX_DIST
        {
            Self::MediumMatch { len, dist }
        } else if len >= FAR_MATCH_MIN_LEN && len <= ONE_BYTE_LEN_MAX && dist <= FAR_MATCH_MAX_DIST
        {
            Self::FarMatch { len, dist }
        } else if len >= FAR_LONG_MATCH_MIN_LEN
            && len <= TWO_BYTE_LEN_MAX
            && dist <= FAR_MATCH_MAX_DIST
        {
            Self::FarLongMatch { len, dist }
        } else if len >= EXTENDED_MATCH_MIN_LEN && dist <= EXTENDED_MATCH_MAX_DIST {
            Self::ExtendedMatch {
                len: len.min(TWO_BYTE_LEN_MAX),
                dist,
            }
        } else {
            return None;
        };
        Some(op)
    }

    /// Bytes of input this opcode accounts for.
    pub fn span(&self) -> usize {
        match *self {
            Self::ShortLiteral { len }
            | Self::MediumLiteral { len }
            | Self::LongLiteral { len }
            | Self::ShortMatch { len, .. }
            | Self::MediumMatch { len, .. }
            | Self::FarMatch { len, .. }
            | Self::FarLongMatch { len, .. }
            | Self::ExtendedMatch { len, .. } => len,
        }
    }

    /// True for literal opcodes.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::ShortLiteral { .. } | Self::MediumLiteral { .. } | Self::LongLiteral { .. }
        )
    }

    /// Encode into `buf`, returning the number of bytes used.
    pub fn encode(&self, buf: &mut [u8; MAX_OPCODE_LEN]) -> usize {
        match *self {
            Self::ShortLiteral { len } => {
                buf[0] = (0x20 + len - 1) as u8;
                1
            }
            Self::MediumLiteral { len } => put_be(buf, 0x0800 + len - 1, 2),
            Self::LongLiteral { len } => put_be(buf, 0x07_0000 + len - 1, 3),
            Self::ShortMatch { len, dist } => {
                buf[0] = (0x80 + len - 1) as u8;
                buf[1] = (dist - 1) as u8;
                2
            }
            Self::MediumMatch { len, dist } => {
                let n = put_be(buf, 0x4000 + dist - 1, 2);
                buf[n] = (len - 1) as u8;
                n + 1
            }
            Self::FarMatch { len, dist } => {
                let n = put_be(buf, 0x18_0000 + dist - 1, 3);
                buf[n] = (len - 1) as u8;
                n + 1
            }
            Self::FarLongMatch { len, dist } => {
                let n = put_be(buf, 0x10_0000 + dist - 1, 3);
                n + put_be(&mut buf[n..], len - 1, 2)
            }
            Self::ExtendedMatch { len, dist } => {
                let long = len > ONE_BYTE_LEN_MAX;
                buf[0] = if long { 0x04 } else { 0x06 };
                let n = 1 + put_be(&mut buf[1..], dist - 1, 3);
                n + put_be(&mut buf[n..], len - 1, if long { 2 } else { 1 })
            }
        }
    }

    /// Encode and write to `w`, returning the number of bytes written.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let mut buf = [0u8; MAX_OPCODE_LEN];
        let n = self.encode(&mut buf);
        w.write_all(&buf[..n])?;
        Ok(n)
    }
}

/// Write the low `width` bytes of `value` big-endian at the start of `buf`.
#[inline]
fn put_be(buf: &mut [u8], value: usize, width: usize) -> usize {
    let bytes = (value as u32).to_be_bytes();
    buf[..width].copy_from_slice(&bytes[4 - width..]);
    width
}
