use crate::{
    abstract_trait::CategoryQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::Category as CategoryModel,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct CategoryRepository {
    db: ConnectionPool,
}

impl CategoryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for CategoryRepository {
    async fn find_all(&self) -> Result<Vec<CategoryModel>, RepositoryError> {
        info!("🔍 Fetching all categories");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let categories = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT category_id, title, created_at, updated_at
            FROM categories
            ORDER BY title
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(categories)
    }
}
