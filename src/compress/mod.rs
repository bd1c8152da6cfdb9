// Public compression API.
//
// - `encoder`: options, errors, statistics and the `compress*` entry points

pub mod encoder;

pub use encoder::{
    CompressError, CompressOptions, CompressStats, compress, compress_bound, compress_to,
    compress_with_options,
};
