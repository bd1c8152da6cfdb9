// Match finder tuning constants and the match acceptance policy.
//
// The acceptance thresholds trade match length against the cost of the
// opcode needed to reach a given distance.  They are part of the output
// format's behaviour and must not be retuned.

/// Default match window (256 KiB).
pub const DEFAULT_WINDOW: u32 = 0x4_0000;

/// Largest window the extended match opcode can address (16 MiB).
pub const MAX_WINDOW: u32 = 0x100_0000;

/// Default hash table size in slots (power of two).
pub const DEFAULT_HASH_SIZE: usize = 32_768;

/// Longest match a single opcode can carry.
pub const MAX_MATCH: usize = 65_536;

/// Bytes read by the hash cascade at each scan position.
pub const LOOKAHEAD: usize = 13;

/// Shortest match the finder ever proposes.
pub const MIN_MATCH: usize = 3;

/// Matches of this length or longer are accepted at any in-window distance.
const ALWAYS_WORTHWHILE: usize = 10;

/// Length/distance tiers: a match of length `> len` is worth encoding when
/// its distance does not exceed `dist`.
const TIERS: [(usize, usize); 3] = [(2, 0x100), (5, 0x4000), (7, 0x8_0000)];

/// Returns true if a match of `len` bytes at distance `dist` is cheaper to
/// encode as a copy than as literals.
#[inline]
pub fn is_worthwhile(len: usize, dist: usize, window: usize) -> bool {
    if dist == 0 || dist > window {
        return false;
    }
    len >= ALWAYS_WORTHWHILE || TIERS.iter().any(|&(l, d)| len > l && dist <= d)
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: usize = DEFAULT_WINDOW as usize;

    #[test]
    fn short_matches_need_short_distance() {
        assert!(is_worthwhile(3, 1, W));
        assert!(is_worthwhile(3, 256, W));
        assert!(!is_worthwhile(3, 257, W));
        assert!(!is_worthwhile(3, 300, W));
        assert!(!is_worthwhile(2, 1, W));
    }

    #[test]
    fn medium_tier() {
        assert!(!is_worthwhile(5, 257, W));
        assert!(is_worthwhile(6, 257, W));
        assert!(is_worthwhile(6, 16_384, W));
        assert!(!is_worthwhile(6, 16_385, W));
    }

    #[test]
    fn far_tier_is_bounded_by_window() {
        assert!(is_worthwhile(8, 16_385, W));
        assert!(is_worthwhile(8, W, W));
        assert!(!is_worthwhile(8, W + 1, W));
        assert!(is_worthwhile(8, 0x8_0000, 0x8_0000));
        assert!(!is_worthwhile(9, 0x8_0001, MAX_WINDOW as usize));
    }

    #[test]
    fn long_matches_accepted_anywhere_in_window() {
        let big = MAX_WINDOW as usize;
        assert!(is_worthwhile(10, big, big));
        assert!(!is_worthwhile(10, big + 1, big));
        assert!(!is_worthwhile(MAX_MATCH, W + 1, W));
    }

    #[test]
    fn zero_distance_rejected() {
        assert!(!is_worthwhile(100, 0, W));
    }
}
