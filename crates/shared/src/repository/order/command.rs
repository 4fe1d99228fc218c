use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::OrderItemRequest,
    errors::RepositoryError,
    model::{Order as OrderModel, OrderStatus},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        customer_id: i32,
        status: OrderStatus,
        items: &[OrderItemRequest],
    ) -> Result<OrderModel, RepositoryError> {
        // the order row and its items land atomically
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (customer_id, status, created_at, updated_at)
            VALUES ($1, $2, current_timestamp, current_timestamp)
            RETURNING order_id, customer_id, status, created_at, updated_at
            "#,
        )
        .bind(customer_id)
        .bind(status)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create order for customer {customer_id}: {err:?}");
            RepositoryError::from_database(err, "order customer")
        })?;

        for item in items {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, product_id, quantity)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(order.order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to add item (product {}) to order {}: {err:?}",
                    item.product_id, order.order_id
                );
                RepositoryError::from_database(err, "order item product")
            })?;
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order ID {} with {} item(s)",
            order.order_id,
            items.len()
        );
        Ok(order)
    }

    async fn update_order(
        &self,
        id: i32,
        status: OrderStatus,
        items: Option<&[OrderItemRequest]>,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            UPDATE orders
            SET status = $2,
                updated_at = current_timestamp
            WHERE order_id = $1
            RETURNING order_id, customer_id, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to update order ID {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        let Some(order) = order else {
            tx.rollback().await.map_err(RepositoryError::from)?;
            return Ok(None);
        };

        if let Some(items) = items {
            sqlx::query("DELETE FROM order_items WHERE order_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(RepositoryError::from)?;

            for item in items {
                sqlx::query(
                    r#"
                    INSERT INTO order_items (order_id, product_id, quantity)
                    VALUES ($1, $2, $3)
                    "#,
                )
                .bind(id)
                .bind(item.product_id)
                .bind(item.quantity)
                .execute(&mut *tx)
                .await
                .map_err(|err| RepositoryError::from_database(err, "order item product"))?;
            }
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🔄 Updated order ID {id}");
        Ok(Some(order))
    }

    async fn delete_order(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // order_items go away via ON DELETE CASCADE
        let result = sqlx::query_as::<_, OrderModel>(
            r#"
            DELETE FROM orders
            WHERE order_id = $1
            RETURNING order_id, customer_id, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete order {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        if result.is_some() {
            info!("✅ Order ID {id} deleted");
        }
        Ok(result)
    }
}
