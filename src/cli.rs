// Command-line front end.
//
// `binembed <INPUT> <SYMBOL>` prints a C/C++ declaration embedding INPUT,
// compressed by default, as a word array or a Base85 string literal.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueHint};

use crate::compress::encoder::CompressOptions;
use crate::hash::config::{DEFAULT_HASH_SIZE, DEFAULT_WINDOW};
use crate::io::{EmbedOptions, EmbedStats, embed_file};
use crate::render::Format;

// ---------------------------------------------------------------------------
// Byte size parsing (supports K, M, G suffixes)
// ---------------------------------------------------------------------------

fn parse_byte_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty size string".into());
    }
    let (num_part, multiplier) = match s.as_bytes().last() {
        Some(b'k' | b'K') => (&s[..s.len() - 1], 1024u64),
        Some(b'm' | b'M') => (&s[..s.len() - 1], 1024 * 1024),
        Some(b'g' | b'G') => (&s[..s.len() - 1], 1024 * 1024 * 1024),
        _ => (s, 1u64),
    };
    let num: u64 = num_part
        .trim()
        .parse()
        .map_err(|e| format!("invalid size '{s}': {e}"))?;
    num.checked_mul(multiplier)
        .ok_or_else(|| format!("size overflow: '{s}'"))
}

fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Embed a binary file in C/C++ source, optionally compressed.
#[derive(Parser, Debug)]
#[command(
    name = "binembed",
    version,
    about = "Embed binary files in C/C++ source",
    arg_required_else_help = true
)]
struct Cli {
    /// Emit a Base85 string literal instead of an unsigned int array.
    #[arg(long)]
    base85: bool,

    /// Embed the raw bytes without compressing them.
    #[arg(long = "no-compress")]
    no_compress: bool,

    /// Maximum match distance (supports K/M suffix, at most 16M).
    #[arg(long = "window-size", value_parser = parse_byte_size, default_value_t = DEFAULT_WINDOW as u64)]
    window_size: u64,

    /// Hash table slots (power of two, supports K/M suffix).
    #[arg(long = "hash-size", value_parser = parse_byte_size, default_value_t = DEFAULT_HASH_SIZE as u64)]
    hash_size: u64,

    /// Output file (default: stdout).
    #[arg(short = 'o', long, value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json")]
    json_output: bool,

    /// File to embed.
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Symbol prefix for the generated declarations.
    symbol: String,
}

// ---------------------------------------------------------------------------
// Resolved options
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Options {
    embed: EmbedOptions,
    input_file: PathBuf,
    output_file: Option<PathBuf>,
    symbol: String,
    quiet: bool,
    verbose: u8,
    json_output: bool,
}

fn resolve_options(cli: Cli) -> Result<Options, String> {
    if !is_c_identifier(&cli.symbol) {
        return Err(format!("invalid symbol name '{}'", cli.symbol));
    }
    let window_size = u32::try_from(cli.window_size)
        .map_err(|_| format!("window size {} out of range", cli.window_size))?;
    let hash_size = usize::try_from(cli.hash_size)
        .map_err(|_| format!("hash size {} out of range", cli.hash_size))?;

    let compress_options = CompressOptions {
        window_size,
        hash_size,
    };
    if !cli.no_compress {
        compress_options.validate().map_err(|e| e.to_string())?;
    }

    Ok(Options {
        embed: EmbedOptions {
            compress: !cli.no_compress,
            format: if cli.base85 {
                Format::Base85
            } else {
                Format::Array
            },
            compress_options,
        },
        input_file: cli.input,
        output_file: cli.output,
        symbol: cli.symbol,
        quiet: cli.quiet,
        verbose: cli.verbose.min(2),
        json_output: cli.json_output,
    })
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("binembed".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(cli) = Cli::try_parse_from(argv) {
        let _ = resolve_options(cli);
    }
}

// ---------------------------------------------------------------------------
// Embed command
// ---------------------------------------------------------------------------

fn report(opts: &Options, stats: &EmbedStats) {
    if opts.verbose > 0 && !opts.quiet {
        eprintln!(
            "binembed: {}: {} -> {} bytes",
            opts.input_file.display(),
            stats.input_size,
            stats.embedded_size
        );
        if let (Some(c), true) = (&stats.compress, opts.verbose > 1) {
            eprintln!(
                "binembed: {} copies ({} bytes), {} literal runs ({} bytes), adler32 {:#010x}",
                c.matches, c.matched_bytes, c.literal_ops, c.literal_bytes, c.checksum
            );
        }
    }

    if opts.json_output {
        let json = serde_json::json!({
            "input": opts.input_file.display().to_string(),
            "symbol": opts.symbol,
            "input_size": stats.input_size,
            "embedded_size": stats.embedded_size,
            "compressed": stats.compress.is_some(),
            "matches": stats.compress.map(|c| c.matches),
            "literal_bytes": stats.compress.map(|c| c.literal_bytes),
            "adler32": stats.compress.map(|c| c.checksum),
            "ratio": stats.compress.map(|c| c.ratio()),
        });
        eprintln!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
    }
}

fn cmd_embed(opts: &Options) -> i32 {
    let output: Box<dyn Write> = match &opts.output_file {
        Some(path) => match File::create(path) {
            Ok(f) => Box::new(f),
            Err(e) => {
                eprintln!("binembed: output file: {}: {e}", path.display());
                return 1;
            }
        },
        None => Box::new(io::stdout().lock()),
    };

    match embed_file(&opts.input_file, &opts.symbol, &opts.embed, output) {
        Ok(stats) => {
            report(opts, &stats);
            0
        }
        Err(e) => {
            eprintln!("binembed: {e}");
            1
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run() -> ! {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let opts = match resolve_options(cli) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("binembed: {msg}");
            process::exit(1);
        }
    };

    process::exit(cmd_embed(&opts));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
