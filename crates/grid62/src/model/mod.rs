//! Identifier types and byte-layout adapters.

pub mod id;

pub use id::{
    Id, MAX_ID, NIL_ID, format_id, from_guid_bytes, id_from_u128, id_to_u128, parse_id,
    to_guid_bytes,
};
