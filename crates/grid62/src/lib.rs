//! grid62: tagged, sortable base62 identifiers (GRids).
//!
//! A GRid renders a 128-bit identifier (UUID/GUID) as
//! `<type_tag>_<22 base62 chars>`: compact, URL-safe, self-describing, and
//! lexicographically sortable in numeric order. Encoding is deterministic
//! and exactly invertible on every architecture.
//!
//! # Quick Start
//!
//! ```rust
//! use uuid::Uuid;
//!
//! let id = Uuid::parse_str("9b3ea5f2-e43b-44d0-83f3-e2d97dfff065").unwrap();
//!
//! // Encode with a human-readable type tag
//! let grid = grid62::encode_uuid(&id, "item");
//! assert_eq!(grid, "item_4iwRLEQjyM887lIHKr7h3d");
//!
//! // Decode back
//! let decoded = grid62::decode_uuid(&grid).unwrap();
//! assert_eq!(decoded, id);
//! ```
//!
//! # Modules
//!
//! - [`model`]: the canonical identifier type and byte-layout adapters
//! - [`codec`]: base62 radix primitives and GRid assembly
//! - [`error`]: error types
//!
//! # Wire Format
//!
//! ```text
//! <type_tag> '_' <22 base62 chars>
//! ```
//!
//! - The body is exactly 22 characters from the alphabet
//!   `0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz`,
//!   most significant digit first, left-padded with `'0'`.
//! - The tag is opaque and never validated. Decoding splits on the *last*
//!   `'_'`, so tags containing the separator round-trip; a bare body with
//!   no tag at all also decodes.
//!
//! # Portability
//!
//! The codec consumes and produces identifiers as canonical big-endian
//! bytes (RFC 4122 network order) and converts through an explicit `u128`,
//! so the encoded string never depends on host byte order. Adapters for
//! platforms that hand out the mixed-endian GUID memory layout live at the
//! boundary in [`model::id`], not inside the codec.

pub mod codec;
pub mod error;
pub mod model;

// Re-export commonly used items at crate root
pub use codec::{
    ALPHABET, BODY_LEN, SEPARATOR, decode, decode_body, decode_uuid, encode, encode_body,
    encode_uuid,
};
pub use error::DecodeError;
pub use model::{
    Id, MAX_ID, NIL_ID, format_id, from_guid_bytes, id_from_u128, id_to_u128, parse_id,
    to_guid_bytes,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
