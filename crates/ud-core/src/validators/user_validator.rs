//! Pre-flight request checks.
//!
//! Pure functions over the wire-facing types; nothing here touches the
//! database.

use crate::UserUpdate;
use crate::models::user_id;

pub struct UserValidator;

impl UserValidator {
    /// An id is acceptable only in the persistence layer's primary-key
    /// encoding.
    pub fn is_valid_id(id: &str) -> bool {
        user_id::is_valid_format(id)
    }

    /// An update is well-formed when the target id is valid and the body,
    /// if it names an id at all, names the same one. A body id that
    /// disagrees with the target would amount to re-keying the record.
    pub fn is_valid_update(id: &str, update: &UserUpdate) -> bool {
        if !Self::is_valid_id(id) {
            return false;
        }

        match &update.id {
            Some(body_id) => body_id == id,
            None => true,
        }
    }
}
