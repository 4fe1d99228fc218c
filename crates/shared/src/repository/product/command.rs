use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product as ProductModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
        product_url: &str,
        image_url: &str,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products
                (name, brand, price, category_id, description, product_url, image_url,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, current_timestamp, current_timestamp)
            RETURNING product_id, name, brand, price, category_id, description,
                      product_url, image_url, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.brand)
        .bind(req.price)
        .bind(req.category_id)
        .bind(&req.description)
        .bind(product_url)
        .bind(image_url)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", req.name, err);
            RepositoryError::from_database(err, "product category")
        })?;

        info!(
            "✅ Created product ID {} ({})",
            result.product_id, result.name
        );
        Ok(result)
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
        product_url: &str,
        image_url: &str,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET name = $2,
                brand = $3,
                price = $4,
                category_id = $5,
                description = $6,
                product_url = $7,
                image_url = $8,
                updated_at = current_timestamp
            WHERE product_id = $1
            RETURNING product_id, name, brand, price, category_id, description,
                      product_url, image_url, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.brand)
        .bind(req.price)
        .bind(req.category_id)
        .bind(&req.description)
        .bind(product_url)
        .bind(image_url)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", id, err);
            RepositoryError::from_database(err, "product category")
        })?;

        if result.is_some() {
            info!("🔄 Updated product ID {}", id);
        }
        Ok(result)
    }

    async fn delete_product(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            DELETE FROM products
            WHERE product_id = $1
            RETURNING product_id, name, brand, price, category_id, description,
                      product_url, image_url, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        if result.is_some() {
            info!("✅ Product ID {} deleted", id);
        }
        Ok(result)
    }
}
