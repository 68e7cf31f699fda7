use serde::{Deserialize, Serialize};

/// Partial user for merge updates. Only fields that are present are
/// applied; an absent field leaves the stored value untouched.
///
/// The id is carried for agreement checks only - it is never written,
/// since a record's primary key is immutable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl UserUpdate {
    /// True when the update carries nothing that would change a record
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}
