use serde::Deserialize;

/// Request body for creating a user. The id is optional; when omitted the
/// server mints one.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}
