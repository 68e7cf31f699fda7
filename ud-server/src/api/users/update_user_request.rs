use ud_core::UserUpdate;

use serde::Deserialize;

/// Request body for a merge update. Absent fields are left untouched.
/// The body may repeat the target id but may not change it.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            id: req.id,
            name: req.name,
        }
    }
}
