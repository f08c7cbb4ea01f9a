//! GRid encoding/decoding.
//!
//! The base62 radix primitives and the tagged-string assembly built on
//! them.

pub mod base62;
pub mod grid;

pub use base62::{ALPHABET, BODY_LEN, SEPARATOR, decode_body, encode_body};
pub use grid::{decode, decode_uuid, encode, encode_uuid};
