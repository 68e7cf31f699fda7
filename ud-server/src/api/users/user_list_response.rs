use crate::UserDto;

use serde::Serialize;

/// User collection response
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserDto>,
}
