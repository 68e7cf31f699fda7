use ud_core::User;

use serde::Serialize;

/// Wire representation of a user
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}
