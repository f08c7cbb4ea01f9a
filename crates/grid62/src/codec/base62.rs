//! Base62 radix primitives for the GRid body.
//!
//! Implements the fixed-width conversion between an unsigned 128-bit value
//! and its 22-character base62 numeral.

use lazy_static::lazy_static;

use crate::error::DecodeError;

/// Digit set for the base62 body, index 0..61.
///
/// The order is part of the wire format. It is ASCII-ascending, so
/// equal-width encodings of increasing values sort in increasing byte
/// order.
pub const ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Separator between the type tag and the body. Not a member of
/// [`ALPHABET`].
pub const SEPARATOR: char = '_';

/// Width of the encoded body: 62^21 <= 2^128 - 1 < 62^22.
pub const BODY_LEN: usize = 22;

lazy_static! {
    /// Reverse lookup: byte value -> digit index, or -1 for bytes outside
    /// the alphabet.
    static ref DIGIT_VALUES: [i8; 256] = {
        let mut table = [-1i8; 256];
        for (index, &byte) in ALPHABET.iter().enumerate() {
            table[byte as usize] = index as i8;
        }
        table
    };
}

/// Encodes a 128-bit value as a fixed-width base62 numeral.
///
/// Always returns exactly [`BODY_LEN`] characters, left-padded with the
/// index-0 digit (`'0'`) for small values.
#[inline]
pub fn encode_body(value: u128) -> String {
    let mut buf = [0u8; BODY_LEN];
    let mut n = value;
    for slot in buf.iter_mut().rev() {
        *slot = ALPHABET[(n % 62) as usize];
        n /= 62;
    }
    // n is fully consumed here: 62^22 exceeds u128::MAX.
    // SAFETY: every byte comes from ALPHABET, which is pure ASCII.
    String::from_utf8(buf.to_vec()).unwrap()
}

/// Parses a base62 numeral into a 128-bit value.
///
/// Accepts bodies of any length; a magnitude past 2^128 - 1 is rejected as
/// [`DecodeError::Overflow`] rather than truncated.
pub fn decode_body(body: &str) -> Result<u128, DecodeError> {
    if body.is_empty() {
        return Err(DecodeError::EmptyBody);
    }

    let mut value: u128 = 0;
    for (position, character) in body.chars().enumerate() {
        let digit = if character.is_ascii() {
            DIGIT_VALUES[character as usize]
        } else {
            -1
        };
        if digit < 0 {
            return Err(DecodeError::InvalidCharacter {
                character,
                position,
            });
        }
        value = value
            .checked_mul(62)
            .and_then(|v| v.checked_add(digit as u128))
            .ok_or(DecodeError::Overflow)?;
    }

    Ok(value)
}
