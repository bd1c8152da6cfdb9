#![no_main]
use binembed::stream::header::{END_MARKER, HEADER_LEN, SIGNATURE, TRAILER_LEN};
use binembed::{CompressOptions, adler32, compress_bound, compress_with_options};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First two bytes pick the window and hash table size.
    let window_size = 1u32 << (data[0] % 25);
    let hash_size = 1usize << (data[1] % 17);
    let input = &data[2..];

    let opts = CompressOptions {
        window_size,
        hash_size,
    };
    let out = compress_with_options(input, &opts).unwrap();

    assert!(out.len() <= compress_bound(input.len()));
    assert!(out.len() >= HEADER_LEN + TRAILER_LEN);
    assert_eq!(out[..2], SIGNATURE);
    assert_eq!(out[8..12], (input.len() as u32).to_be_bytes());
    assert_eq!(out[12..16], window_size.to_be_bytes());

    let trailer = &out[out.len() - TRAILER_LEN..];
    assert_eq!(trailer[..2], END_MARKER);
    assert_eq!(trailer[2..], adler32(1, input).to_be_bytes());

    // Deterministic for identical inputs and options.
    assert_eq!(compress_with_options(input, &opts).unwrap(), out);
});
