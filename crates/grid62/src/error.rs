//! Error types for GRid decoding.

use thiserror::Error;

/// Error during GRid decoding.
///
/// Encoding is infallible: every 128-bit value has a 22-character base62
/// representation, and the type tag is accepted verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The body contains a character outside the base62 alphabet.
    #[error("invalid base62 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// The body segment is empty (input was empty or ended with the separator).
    #[error("empty base62 body")]
    EmptyBody,

    /// The body encodes a magnitude that does not fit in 128 bits.
    ///
    /// Cannot arise from encoder output; malformed input is rejected rather
    /// than silently truncated.
    #[error("base62 body overflows 128 bits")]
    Overflow,
}
