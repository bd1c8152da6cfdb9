// Base85 digits for C string literals.
//
// Each 4-byte little-endian word becomes five digits, least significant
// first.  Digits start at '#' (35) and skip '\\' so the output never needs
// backslash escaping inside a string literal.

/// First digit character.
const DIGIT_BASE: u32 = 35;

/// Encoded length of `n` input bytes (last word zero padded).
pub const fn encoded_len(n: usize) -> usize {
    n.div_ceil(4) * 5
}

/// Map the low base-85 digit of `x` to its character.
#[inline]
pub fn digit(x: u32) -> u8 {
    let c = (x % 85 + DIGIT_BASE) as u8;
    if c >= b'\\' { c + 1 } else { c }
}

/// Encode one little-endian word as five digits.
#[inline]
pub fn encode_word(mut word: u32) -> [u8; 5] {
    let mut out = [0u8; 5];
    for c in &mut out {
        *c = digit(word);
        word /= 85;
    }
    out
}

/// Words of `data`, little-endian, with the final word zero padded.
pub fn words(data: &[u8]) -> impl Iterator<Item = u32> + '_ {
    data.chunks(4).map(|chunk| {
        let mut w = [0u8; 4];
        w[..chunk.len()].copy_from_slice(chunk);
        u32::from_le_bytes(w)
    })
}

/// Encode `data` as Base85 digits.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(data.len()));
    for w in words(data) {
        out.extend_from_slice(&encode_word(w));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_alphabet_skips_backslash() {
        assert_eq!(digit(0), b'#');
        assert_eq!(digit(56), b'[');
        assert_eq!(digit(57), b']');
        assert_eq!(digit(84), b'x');
        assert!((0..85).all(|x| digit(x) != b'\\'));
    }

    #[test]
    fn zero_word() {
        assert_eq!(&encode_word(0), b"#####");
    }

    #[test]
    fn max_word() {
        // Base-85 digits of 0xFFFFFFFF, least significant first: 0 12 54 23 82.
        assert_eq!(&encode_word(u32::MAX), b"#/Y:v");
    }

    #[test]
    fn padding_of_final_word() {
        assert_eq!(encoded_len(0), 0);
        assert_eq!(encoded_len(1), 5);
        assert_eq!(encoded_len(4), 5);
        assert_eq!(encoded_len(5), 10);
        assert_eq!(encode(&[1]), encode(&[1, 0, 0, 0]));
        assert_eq!(encode(&[1, 2, 3, 4, 5]).len(), 10);
    }

    #[test]
    fn words_are_little_endian() {
        let w: Vec<u32> = words(&[0x57, 0xBC, 0, 0, 9]).collect();
        assert_eq!(w, [0x0000_BC57, 9]);
    }
}
