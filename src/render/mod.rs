// Source-code rendering of embedded blobs.
//
// - `base85`: digit alphabet and word encoding
// - `c_source`: C/C++ declarations (word array or Base85 string)

pub mod base85;
pub mod c_source;

pub use c_source::{Declaration, Format};
