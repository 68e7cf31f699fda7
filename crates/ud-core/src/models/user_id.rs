//! Primary-key tokens.
//!
//! An id is 24 hexadecimal characters encoding 12 bytes: a 4-byte
//! big-endian unix timestamp followed by 8 random bytes. Callers may
//! supply their own id as long as it uses the same encoding.

use chrono::Utc;

/// Length of an id in hex characters
pub const USER_ID_LEN: usize = 24;

/// Mint a new id
pub fn generate() -> String {
    let seconds = Utc::now().timestamp() as u32;
    let salt: [u8; 8] = rand::random();

    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&seconds.to_be_bytes());
    bytes[4..].copy_from_slice(&salt);

    hex::encode(bytes)
}

/// Check that `id` is in the accepted encoding. Both hex cases are fine.
pub fn is_valid_format(id: &str) -> bool {
    id.len() == USER_ID_LEN && id.bytes().all(|b| b.is_ascii_hexdigit())
}
