use crate::database::{model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::UserId, user::User};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_current_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT user_id, user_name, email, role
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::*;
    use kernel::model::role::Role;

    #[sqlx::test(migrations = "../migrations")]
    async fn returns_the_stored_profile(pool: sqlx::PgPool) {
        let users = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let user_id = insert_customer(&pool, "alice").await;

        let found = users.find_current_user(user_id).await.unwrap().unwrap();
        assert_eq!(found.user_name, "alice");
        assert_eq!(found.email, "alice@example.com");
        assert_eq!(found.role, Role::Customer);

        assert!(users
            .find_current_user(UserId::new())
            .await
            .unwrap()
            .is_none());
    }
}
