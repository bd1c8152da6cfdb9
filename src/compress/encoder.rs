// One-shot compressor.
//
// `compress_to` frames a whole input buffer into any `io::Write` sink:
//   - Options are validated and a fresh hash table is allocated per call
//   - The scan loop emits the body, folding the checksum as it goes
//   - The trailer closes the stream and the sink is handed back
//
// Nothing is shared between calls, so concurrent calls from different
// threads are independent and produce identical output for identical
// input and options.

use std::io::Write;

use log::debug;
use thiserror::Error;

use crate::engine;
use crate::hash::config::{DEFAULT_HASH_SIZE, DEFAULT_WINDOW, MAX_WINDOW};
use crate::hash::matching::MatchFinder;
use crate::hash::table::MAX_POSITION;
use crate::stream::{StreamEncoder, StreamHeader, StreamStats};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for the compressor.
#[derive(Debug, Clone)]
pub struct CompressOptions {
    /// Maximum back-reference distance, `1..=16 MiB`.  Recorded in the
    /// stream header.
    pub window_size: u32,
    /// Hash table slots; must be a power of two.
    pub hash_size: usize,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW,
            hash_size: DEFAULT_HASH_SIZE,
        }
    }
}

impl CompressOptions {
    /// Check the options without compressing anything.
    pub fn validate(&self) -> Result<(), CompressError> {
        if self.window_size == 0 || self.window_size > MAX_WINDOW {
            return Err(CompressError::InvalidWindow(self.window_size));
        }
        if !self.hash_size.is_power_of_two() || (self.hash_size as u64) > (1u64 << 32) {
            return Err(CompressError::InvalidHashSize(self.hash_size));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Compression failures.
#[derive(Debug, Error)]
pub enum CompressError {
    /// Writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The hash table could not be allocated.
    #[error("hash table allocation failed ({slots} slots)")]
    HashTableAlloc { slots: usize },

    /// The input does not fit the 32-bit length field.
    #[error("input too large: {len} bytes (maximum {max})")]
    InputTooLarge { len: usize, max: usize },

    /// Window size outside `1..=16 MiB`.
    #[error("invalid window size {0}: must be between 1 and 16777216")]
    InvalidWindow(u32),

    /// Hash table size not a power of two.
    #[error("invalid hash table size {0}: must be a power of two")]
    InvalidHashSize(usize),
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Statistics returned by `compress_to()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressStats {
    /// Uncompressed input size in bytes.
    pub input_size: u64,
    /// Encoded stream size in bytes, header and trailer included.
    pub output_size: u64,
    /// Copy opcodes emitted.
    pub matches: u64,
    /// Input bytes covered by copies.
    pub matched_bytes: u64,
    /// Literal opcodes emitted.
    pub literal_ops: u64,
    /// Input bytes stored as literals.
    pub literal_bytes: u64,
    /// Adler-32 of the input, as written in the trailer.
    pub checksum: u32,
}

impl CompressStats {
    fn new(input_size: usize, s: StreamStats) -> Self {
        Self {
            input_size: input_size as u64,
            output_size: s.bytes_out,
            matches: s.matches,
            matched_bytes: s.matched_bytes,
            literal_ops: s.literal_ops,
            literal_bytes: s.literal_bytes,
            checksum: s.checksum,
        }
    }

    /// Output size divided by input size (1.0 for empty input).
    pub fn ratio(&self) -> f64 {
        if self.input_size == 0 {
            1.0
        } else {
            self.output_size as f64 / self.input_size as f64
        }
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Upper bound on the compressed size of `len` input bytes.
///
/// Covers the all-literal worst case including framing.
pub const fn compress_bound(len: usize) -> usize {
    len + 512 + len / 4 + 4
}

/// Compress `input` with default options.
///
/// # Example
/// ```
/// let packed = binembed::compress(b"ABCDABCDABCDABCDABCDABCD").unwrap();
/// assert_eq!(&packed[..2], &[0x57, 0xBC]);
/// ```
pub fn compress(input: &[u8]) -> Result<Vec<u8>, CompressError> {
    compress_with_options(input, &CompressOptions::default())
}

/// Compress `input` into a new buffer.
pub fn compress_with_options(
    input: &[u8],
    opts: &CompressOptions,
) -> Result<Vec<u8>, CompressError> {
    let out = Vec::with_capacity(compress_bound(input.len()));
    let (out, _) = compress_to(out, input, opts)?;
    Ok(out)
}

/// Compress `input` into `writer`.
///
/// Returns the writer and statistics about the produced stream.  For file
/// sinks wrap the file in a `BufWriter`; opcodes are written piecemeal.
pub fn compress_to<W: Write>(
    writer: W,
    input: &[u8],
    opts: &CompressOptions,
) -> Result<(W, CompressStats), CompressError> {
    opts.validate()?;
    if input.len() > MAX_POSITION {
        return Err(CompressError::InputTooLarge {
            len: input.len(),
            max: MAX_POSITION,
        });
    }

    let mut finder = MatchFinder::new(opts.hash_size, opts.window_size as usize).map_err(|_| {
        CompressError::HashTableAlloc {
            slots: opts.hash_size,
        }
    })?;

    let header = StreamHeader {
        length: input.len() as u32,
        window: opts.window_size,
    };
    let mut stream = StreamEncoder::new(writer, header)?;
    engine::scan(input, &mut finder, &mut stream)?;
    let (writer, stream_stats) = stream.finish()?;

    let stats = CompressStats::new(input.len(), stream_stats);
    debug!(
        "compressed {} -> {} bytes ({} copies, {} literal bytes, adler32 {:#010x})",
        stats.input_size, stats.output_size, stats.matches, stats.literal_bytes, stats.checksum
    );
    Ok((writer, stats))
}
