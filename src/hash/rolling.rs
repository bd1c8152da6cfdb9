// Cascaded context hashes and forward match comparison.
//
// Four hashes are derived from one 13-byte lookahead.  Each longer hash
// continues from the partial sum of the shorter one, so the four contexts
// (3, 5, 9 and 13 bytes) cost little more than the longest alone.  The
// exact arithmetic decides which positions collide and therefore which
// matches are found; it has to stay bit-for-bit stable.

use super::config::LOOKAHEAD;

// ---------------------------------------------------------------------------
// Hash cascade
// ---------------------------------------------------------------------------

/// Seed hash over the first three bytes.
#[inline(always)]
fn seed3(a: u8, b: u8, c: u8) -> u32 {
    ((a as u32) << 14)
        .wrapping_add((b as u32) << 7)
        .wrapping_add(c as u32)
}

/// Fold two more bytes into a running hash.
#[inline(always)]
fn step2(h: u32, c: u8, d: u8) -> u32 {
    (h << 14)
        .wrapping_add(h >> 18)
        .wrapping_add((c as u32) << 7)
        .wrapping_add(d as u32)
}

/// Reduce a raw hash to a table slot.
#[inline(always)]
pub fn scramble(h: u32, mask: u32) -> usize {
    (h.wrapping_add(h >> 16) & mask) as usize
}

/// Raw hashes of the 3-, 5-, 9- and 13-byte contexts at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextHashes(pub [u32; 4]);

impl ContextHashes {
    /// Hash the lookahead at the start of `window`.
    ///
    /// `window` must hold at least [`LOOKAHEAD`] bytes.
    #[inline]
    pub fn compute(window: &[u8]) -> Self {
        let q = &window[..LOOKAHEAD];
        let h1 = seed3(q[0], q[1], q[2]);
        let h2 = step2(h1, q[3], q[4]);
        let h = step2(h2, q[5], q[6]);
        let h3 = step2(h, q[7], q[8]);
        let h = step2(h3, q[9], q[10]);
        let h4 = step2(h, q[11], q[12]);
        Self([h1, h2, h3, h4])
    }

    /// Table slots for each context, in probe order.
    #[inline]
    pub fn slots(&self, mask: u32) -> [usize; 4] {
        self.0.map(|h| scramble(h, mask))
    }
}

// ---------------------------------------------------------------------------
// Forward match
// ---------------------------------------------------------------------------

/// Count matching leading bytes of `s1` and `s2`, up to `n`.
///
/// The two slices may come from overlapping regions of the same buffer.
#[inline]
pub fn forward_match(s1: &[u8], s2: &[u8], n: usize) -> usize {
    let n = n.min(s1.len()).min(s2.len());
    let mut i = 0;
    let p1 = s1.as_ptr();
    let p2 = s2.as_ptr();

    // Compare 8 bytes at a time.
    while i + 8 <= n {
        // Safety: loop guard ensures i..i+8 in bounds for both slices.
        let a = u64::from_le(unsafe { std::ptr::read_unaligned(p1.add(i) as *const u64) });
        // Safety: loop guard ensures i..i+8 in bounds for both slices.
        let b = u64::from_le(unsafe { std::ptr::read_unaligned(p2.add(i) as *const u64) });
        let xor = a ^ b;
        if xor != 0 {
            return i + (xor.trailing_zeros() / 8) as usize;
        }
        i += 8;
    }

    // Tail: byte by byte.
    while i < n && s1[i] == s2[i] {
        i += 1;
    }
    i
}
