use crate::model::{id::UserId, role::Role};
use uuid::Uuid;

/// Identity resolved from a bearer token. Session issuance itself lives
/// outside this service; the engine only needs who is calling and with
/// which capability.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_customer(&self) -> bool {
        self.role == Role::Customer
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessToken(pub Uuid);
