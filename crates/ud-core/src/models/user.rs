//! User entity - the single record this service persists.

use crate::models::user_id;

use serde::{Deserialize, Serialize};

/// A user is a flat record: an opaque primary key and a display name.
/// Ids are unique; names are not, so several users may share one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    /// Create a new user with a freshly minted id
    pub fn new(name: String) -> Self {
        Self {
            id: user_id::generate(),
            name,
        }
    }
}
