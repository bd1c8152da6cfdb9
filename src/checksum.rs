// Adler-32 over the uncompressed input.
//
// The trailer carries the Adler-32 of every input byte, seeded with 1.
// With the `adler32` feature the SIMD implementation from `simd-adler32`
// is used; otherwise a portable version with deferred modulo reduction.

/// Largest prime below 2^16.
const MOD_ADLER: u32 = 65_521;

/// Bytes that can be summed before `s2` could overflow 32 bits.
const NMAX: usize = 5_552;

/// Continue an Adler-32 checksum from `seed` over `data`.
///
/// `adler32(1, data)` is the standard Adler-32 of `data`, and
/// `adler32(adler32(1, a), b) == adler32(1, a ++ b)`.
pub fn adler32(seed: u32, data: &[u8]) -> u32 {
    #[cfg(feature = "adler32")]
    {
        let mut hasher = simd_adler32::Adler32::from_checksum(seed);
        hasher.write(data);
        hasher.finish()
    }
    #[cfg(not(feature = "adler32"))]
    {
        adler32_portable(seed, data)
    }
}

#[cfg_attr(feature = "adler32", allow(dead_code))]
fn adler32_portable(seed: u32, data: &[u8]) -> u32 {
    let mut s1 = (seed & 0xFFFF) % MOD_ADLER;
    let mut s2 = (seed >> 16) % MOD_ADLER;
    for block in data.chunks(NMAX) {
        for &b in block {
            s1 += b as u32;
            s2 += s1;
        }
        s1 %= MOD_ADLER;
        s2 %= MOD_ADLER;
    }
    (s2 << 16) | s1
}

/// Incremental checksum of the bytes consumed so far.
#[derive(Debug, Clone, Copy)]
pub struct RunningChecksum {
    value: u32,
    bytes: u64,
}

impl Default for RunningChecksum {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningChecksum {
    /// Checksum of the empty sequence.
    pub fn new() -> Self {
        Self::from_seed(1)
    }

    /// Resume from a previously computed checksum.
    pub fn from_seed(seed: u32) -> Self {
        Self {
            value: seed,
            bytes: 0,
        }
    }

    /// Fold `data` into the checksum.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.value = adler32(self.value, data);
        self.bytes += data.len() as u64;
    }

    /// Current checksum.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Number of bytes folded in since construction.
    pub fn bytes(&self) -> u64 {
        self.bytes
    }
}
