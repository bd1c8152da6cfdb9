// Test support: a reference decoder for the compressed stream, plus
// deterministic data generators.
//
// The decoder follows the stb decompressor's opcode table and checks the
// framing strictly so tests catch layout regressions, not just data loss.

#![allow(dead_code)]

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Literal(usize),
    Copy { len: usize, dist: usize },
}

#[derive(Debug)]
pub struct Decoded {
    pub data: Vec<u8>,
    pub tokens: Vec<Token>,
    pub window: u32,
    pub checksum: u32,
}

fn be(bytes: &[u8]) -> usize {
    bytes.iter().fold(0usize, |acc, &b| (acc << 8) | b as usize)
}

/// Plain Adler-32, kept independent of the crate's implementation.
pub fn reference_adler32(data: &[u8]) -> u32 {
    let (mut a, mut b) = (1u32, 0u32);
    for &byte in data {
        a = (a + byte as u32) % 65521;
        b = (b + a) % 65521;
    }
    (b << 16) | a
}

pub fn decode(s: &[u8]) -> Result<Decoded, String> {
    if s.len() < 22 {
        return Err(format!("stream too short: {} bytes", s.len()));
    }
    if s[..4] != [0x57, 0xBC, 0, 0] || s[4..8] != [0, 0, 0, 0] {
        return Err(format!("bad header {:02x?}", &s[..8]));
    }
    let expected_len = be(&s[8..12]);
    let window = be(&s[12..16]) as u32;

    let mut out: Vec<u8> = Vec::with_capacity(expected_len);
    let mut tokens = Vec::new();
    let mut i = 16usize;

    let need = |i: usize, n: usize| -> Result<(), String> {
        if i + n > s.len() {
            Err(format!("truncated opcode at {i}"))
        } else {
            Ok(())
        }
    };

    loop {
        need(i, 1)?;
        let c = s[i];
        if c == 0x05 && s.get(i + 1) == Some(&0xFA) {
            need(i, 6)?;
            let checksum = be(&s[i + 2..i + 6]) as u32;
            if i + 6 != s.len() {
                return Err(format!("{} bytes after trailer", s.len() - i - 6));
            }
            if out.len() != expected_len {
                return Err(format!("decoded {} bytes, header says {expected_len}", out.len()));
            }
            if checksum != reference_adler32(&out) {
                return Err(format!("checksum mismatch: {checksum:#010x}"));
            }
            return Ok(Decoded {
                data: out,
                tokens,
                window,
                checksum,
            });
        }

        let (op_len, tok) = if c >= 0x80 {
            need(i, 2)?;
            (2, Token::Copy { len: (c - 0x80) as usize + 1, dist: s[i + 1] as usize + 1 })
        } else if c >= 0x40 {
            need(i, 3)?;
            (3, Token::Copy { len: s[i + 2] as usize + 1, dist: be(&s[i..i + 2]) - 0x4000 + 1 })
        } else if c >= 0x20 {
            (1, Token::Literal((c - 0x20) as usize + 1))
        } else if c >= 0x18 {
            need(i, 4)?;
            (4, Token::Copy { len: s[i + 3] as usize + 1, dist: be(&s[i..i + 3]) - 0x18_0000 + 1 })
        } else if c >= 0x10 {
            need(i, 5)?;
            (5, Token::Copy { len: be(&s[i + 3..i + 5]) + 1, dist: be(&s[i..i + 3]) - 0x10_0000 + 1 })
        } else if c >= 0x08 {
            need(i, 2)?;
            (2, Token::Literal(be(&s[i..i + 2]) - 0x0800 + 1))
        } else if c == 0x07 {
            need(i, 3)?;
            (3, Token::Literal(be(&s[i + 1..i + 3]) + 1))
        } else if c == 0x06 {
            need(i, 5)?;
            (5, Token::Copy { len: s[i + 4] as usize + 1, dist: be(&s[i + 1..i + 4]) + 1 })
        } else if c == 0x04 {
            need(i, 6)?;
            (6, Token::Copy { len: be(&s[i + 4..i + 6]) + 1, dist: be(&s[i + 1..i + 4]) + 1 })
        } else {
            return Err(format!("unknown opcode {c:#04x} at {i}"));
        };
        i += op_len;

        match tok {
            Token::Literal(n) => {
                need(i, n)?;
                out.extend_from_slice(&s[i..i + n]);
                i += n;
            }
            Token::Copy { len, dist } => {
                if dist == 0 || dist > out.len() {
                    return Err(format!("copy distance {dist} before start ({} decoded)", out.len()));
                }
                let from = out.len() - dist;
                for k in 0..len {
                    let b = out[from + k];
                    out.push(b);
                }
            }
        }
        tokens.push(tok);
    }
}

pub fn roundtrip(stream: &[u8], original: &[u8]) -> Decoded {
    let decoded = decode(stream).unwrap_or_else(|e| panic!("decode failed: {e}"));
    assert_eq!(decoded.data.len(), original.len());
    assert!(decoded.data == original, "decoded data differs from input");
    decoded
}

/// 64-bit LCG bytes: high-entropy, deterministic.
pub fn generate_data(size: usize, seed: u64) -> Vec<u8> {
    let mut s = seed;
    (0..size)
        .map(|_| {
            s = s
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (s >> 33) as u8
        })
        .collect()
}

/// Text-like data with plenty of short and medium repeats.
pub fn generate_text(size: usize) -> Vec<u8> {
    const WORDS: [&str; 12] = [
        "the ", "quick ", "brown ", "fox ", "jumps ", "over ", "lazy ", "dog ", "and ",
        "embeds ", "binary ", "data\n",
    ];
    let mut s = 7u64;
    let mut out = Vec::with_capacity(size + 8);
    while out.len() < size {
        s = s
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        out.extend_from_slice(WORDS[((s >> 33) % WORDS.len() as u64) as usize].as_bytes());
    }
    out.truncate(size);
    out
}
