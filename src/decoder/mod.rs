// src/decoder/mod.rs
pub mod quoted_printable;

pub use quoted_printable::decode_quoted_printable;
