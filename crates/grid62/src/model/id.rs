//! Canonical byte-level identifiers.
//!
//! A GRid carries exactly one 128-bit identifier, represented as 16 raw
//! bytes in RFC 4122 / RFC 9562 network order: byte 0 is the most
//! significant byte of the value. The codec never interprets version or
//! variant bits.

/// A 16-byte identifier in canonical big-endian (network) order.
pub type Id = [u8; 16];

/// The zero/nil identifier.
pub const NIL_ID: Id = [0u8; 16];

/// The maximal identifier (2^128 - 1).
pub const MAX_ID: Id = [0xFF; 16];

/// Returns the identifier's value as an unsigned 128-bit integer.
#[inline]
pub fn id_to_u128(id: &Id) -> u128 {
    u128::from_be_bytes(*id)
}

/// Builds an identifier from an unsigned 128-bit integer.
#[inline]
pub fn id_from_u128(value: u128) -> Id {
    value.to_be_bytes()
}

/// Converts a mixed-endian GUID byte dump into canonical network order.
///
/// Some platforms store the first three RFC fields (one 4-byte and two
/// 2-byte integers) little-endian in memory, so their raw byte dump differs
/// from the RFC presentation. Reversing those three sub-fields individually
/// restores network order; the trailing 8 bytes are an opaque byte string
/// in both layouts and stay put.
pub fn from_guid_bytes(bytes: Id) -> Id {
    swap_guid_fields(bytes)
}

/// Converts a canonical identifier back into the mixed-endian GUID layout.
///
/// The field swap is an involution, so this is the same transform as
/// [`from_guid_bytes`]; the two names keep direction readable at call
/// sites.
pub fn to_guid_bytes(id: Id) -> Id {
    swap_guid_fields(id)
}

fn swap_guid_fields(mut bytes: Id) -> Id {
    bytes[0..4].reverse(); // time-low (u32)
    bytes[4..6].reverse(); // time-mid (u16)
    bytes[6..8].reverse(); // time-hi-and-version (u16)
    bytes
}

/// Formats an identifier as non-hyphenated lowercase hex.
pub fn format_id(id: &Id) -> String {
    id.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Parses an identifier from a hex string (with or without hyphens).
pub fn parse_id(s: &str) -> Option<Id> {
    let hex: String = s.chars().filter(|c| *c != '-').collect();
    if hex.len() != 32 {
        return None;
    }

    let mut id = [0u8; 16];
    for (i, slot) in id.iter_mut().enumerate() {
        *slot = u8::from_str_radix(hex.get(2 * i..2 * i + 2)?, 16).ok()?;
    }
    Some(id)
}
