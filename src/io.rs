// File-level embedding helpers.
//
// `embed_file()` reads a whole file, compresses it unless disabled, and
// writes the rendered C/C++ declaration through a buffered writer.
// `embed_bytes()` does the same for data already in memory.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::compress::encoder::{CompressError, CompressOptions, CompressStats, compress_to};
use crate::render::{Declaration, Format};

// ---------------------------------------------------------------------------
// Options and stats
// ---------------------------------------------------------------------------

/// How a file is embedded.
#[derive(Debug, Clone)]
pub struct EmbedOptions {
    /// Compress the data before rendering.
    pub compress: bool,
    /// Output layout.
    pub format: Format,
    /// Compressor settings (ignored when `compress` is false).
    pub compress_options: CompressOptions,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            compress: true,
            format: Format::Array,
            compress_options: CompressOptions::default(),
        }
    }
}

/// Statistics returned by `embed_file()`.
#[derive(Debug, Clone)]
pub struct EmbedStats {
    /// Size of the input file in bytes.
    pub input_size: u64,
    /// Size of the embedded blob (compressed stream or raw bytes).
    pub embedded_size: u64,
    /// Compressor statistics, if compression ran.
    pub compress: Option<CompressStats>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for file embedding.
#[derive(Debug, Error)]
pub enum IoError {
    /// The input file could not be read.
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the rendered output failed.
    #[error("write error: {0}")]
    Write(#[from] io::Error),

    /// Compression failed.
    #[error("compress error: {0}")]
    Compress(#[from] CompressError),
}

const BUF_SIZE: usize = 64 * 1024;

// ---------------------------------------------------------------------------
// embed_file / embed_bytes
// ---------------------------------------------------------------------------

/// Embed the file at `path` as a declaration named after `symbol`.
///
/// The file is read fully into memory.  The path as given is used in the
/// leading comment of the output.
pub fn embed_file<W: Write>(
    path: &Path,
    symbol: &str,
    opts: &EmbedOptions,
    writer: W,
) -> Result<EmbedStats, IoError> {
    let data = std::fs::read(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    embed_bytes(&data, &path.display().to_string(), symbol, opts, writer)
}

/// Embed `data` as a declaration named after `symbol`.
pub fn embed_bytes<W: Write>(
    data: &[u8],
    source_name: &str,
    symbol: &str,
    opts: &EmbedOptions,
    writer: W,
) -> Result<EmbedStats, IoError> {
    let (blob, compress) = if opts.compress {
        let (packed, stats) = compress_to(Vec::new(), data, &opts.compress_options)?;
        (packed, Some(stats))
    } else {
        (data.to_vec(), None)
    };

    let decl = Declaration {
        source_name,
        original_len: data.len(),
        symbol,
        compressed: opts.compress,
        data: &blob,
    };

    let mut out = BufWriter::with_capacity(BUF_SIZE, writer);
    decl.write_to(&mut out, opts.format)?;
    out.flush()?;

    Ok(EmbedStats {
        input_size: data.len() as u64,
        embedded_size: blob.len() as u64,
        compress,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
