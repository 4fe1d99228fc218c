use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{OrderItemDetail, OrderWithCustomer},
};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn items_for_orders(
        &self,
        order_ids: &[i32],
    ) -> Result<Vec<OrderItemDetail>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, OrderItemDetail>(
            r#"
            SELECT
                i.order_id,
                i.product_id,
                i.quantity,
                p.name AS product_name,
                p.brand,
                p.price
            FROM order_items i
            JOIN products p ON p.product_id = i.product_id
            WHERE i.order_id = ANY($1)
            ORDER BY i.order_item_id
            "#,
        )
        .bind(order_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(items)
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(
        &self,
    ) -> Result<Vec<(OrderWithCustomer, Vec<OrderItemDetail>)>, RepositoryError> {
        info!("🔍 Fetching all orders");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let orders = sqlx::query_as::<_, OrderWithCustomer>(
            r#"
            SELECT
                o.order_id,
                o.customer_id,
                o.status,
                o.created_at,
                o.updated_at,
                u.username AS customer_username,
                u.email AS customer_email
            FROM orders o
            JOIN users u ON u.user_id = o.customer_id
            ORDER BY o.created_at DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {:?}", e);
            RepositoryError::from(e)
        })?;
        drop(conn);

        let order_ids: Vec<i32> = orders.iter().map(|o| o.order.order_id).collect();

        let mut grouped: HashMap<i32, Vec<OrderItemDetail>> = HashMap::new();
        for item in self.items_for_orders(&order_ids).await? {
            grouped.entry(item.order_id).or_default().push(item);
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let items = grouped.remove(&order.order.order_id).unwrap_or_default();
                (order, items)
            })
            .collect())
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<(OrderWithCustomer, Vec<OrderItemDetail>)>, RepositoryError> {
        info!("🆔 Fetching order by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, OrderWithCustomer>(
            r#"
            SELECT
                o.order_id,
                o.customer_id,
                o.status,
                o.created_at,
                o.updated_at,
                u.username AS customer_username,
                u.email AS customer_email
            FROM orders o
            JOIN users u ON u.user_id = o.customer_id
            WHERE o.order_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;
        drop(conn);

        match order {
            Some(order) => {
                let items = self.items_for_orders(&[id]).await?;
                Ok(Some((order, items)))
            }
            None => Ok(None),
        }
    }
}
