use kernel::model::{id::UserId, role::Role, user::User};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            email,
            role,
        } = value;
        Self {
            user_id,
            user_name,
            email,
            role,
        }
    }
}
