use crate::{
    abstract_trait::UserCommandRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::User as UserModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (username, email, password, is_admin, created_at, updated_at)
            VALUES ($1, $2, $3, false, current_timestamp, current_timestamp)
            RETURNING user_id, username, email, password, is_admin, created_at, updated_at
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create user {email}: {err:?}");
            RepositoryError::from_database(err, "email already registered")
        })?;

        info!("✅ Created user ID {} ({})", result.user_id, result.email);
        Ok(result)
    }
}
