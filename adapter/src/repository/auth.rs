use crate::database::ConnectionPool;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::auth::{AccessToken, AuthenticatedUser};
use kernel::model::{id::UserId, role::Role};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};

#[derive(sqlx::FromRow)]
struct AuthRow {
    user_id: UserId,
    role: Role,
}

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn resolve_bearer(&self, token: AccessToken) -> AppResult<Option<AuthenticatedUser>> {
        let row = sqlx::query_as::<_, AuthRow>(
            r#"
                SELECT u.user_id, u.role
                FROM access_tokens AS t
                INNER JOIN users AS u ON t.user_id = u.user_id
                WHERE t.token = $1
            "#,
        )
        .bind(token.0)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(|r| AuthenticatedUser {
            user_id: r.user_id,
            role: r.role,
        }))
    }
}
