use serde::Deserialize;

/// Query parameters for listing users
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    /// When present, only users with exactly this name are returned
    #[serde(default)]
    pub name: Option<String>,
}
