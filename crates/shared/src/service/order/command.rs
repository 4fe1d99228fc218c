use crate::{
    abstract_trait::{DynOrderCommandRepository, OrderCommandServiceTrait},
    domain::{
        requests::{AuthContext, CreateOrderRequest, UpdateOrderRequest},
        responses::{ApiResponse, OrderRecordResponse},
    },
    errors::ServiceError,
    model::OrderStatus,
    service::access::require_order_admin,
};
use async_trait::async_trait;
use tracing::{error, info};

/// Order mutations. Creation is open to any caller (the storefront checkout
/// posts without a session); update and delete are admin-only.
#[derive(Clone)]
pub struct OrderCommandService {
    command: DynOrderCommandRepository,
}

impl OrderCommandService {
    pub fn new(command: DynOrderCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderRecordResponse>, ServiceError> {
        info!(
            "🛒 Creating order for customer {} with {} item(s)",
            req.customer_id,
            req.products.len()
        );

        // any client-supplied status is ignored, new orders start active
        let order = self
            .command
            .create_order(req.customer_id, OrderStatus::Active, &req.products)
            .await
            .map_err(|err| {
                error!("❌ Failed to create order: {err:?}");
                ServiceError::Repo(err)
            })?;

        info!("✅ Order created: ID {}", order.order_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order created successfully".to_string(),
            data: OrderRecordResponse::from(order),
        })
    }

    async fn update_order(
        &self,
        identity: Option<&AuthContext>,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderRecordResponse>, ServiceError> {
        require_order_admin(identity)?;

        let id = req
            .id
            .ok_or_else(|| ServiceError::Custom("Order ID is required".to_string()))?;

        info!("✏️ Updating order {id} to status {}", req.status);

        let order = self
            .command
            .update_order(id, req.status, req.products.as_deref())
            .await
            .map_err(|err| {
                error!("❌ Failed to update order {id}: {err:?}");
                ServiceError::Repo(err)
            })?
            .ok_or_else(|| ServiceError::NotFound(format!("Order {id} not found")))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order updated successfully".to_string(),
            data: OrderRecordResponse::from(order),
        })
    }

    async fn delete_order(
        &self,
        identity: Option<&AuthContext>,
        id: i32,
    ) -> Result<ApiResponse<OrderRecordResponse>, ServiceError> {
        require_order_admin(identity)?;

        info!("🗑️ Deleting order with ID: {id}");

        let order = self
            .command
            .delete_order(id)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete order {id}: {err:?}");
                ServiceError::Repo(err)
            })?
            .ok_or_else(|| ServiceError::NotFound(format!("Order {id} not found")))?;

        info!("✅ Order deleted: ID {id}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order deleted successfully".to_string(),
            data: OrderRecordResponse::from(order),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::OrderCommandRepositoryTrait,
        domain::requests::OrderItemRequest,
        errors::RepositoryError,
        model::Order,
        service::access::{MSG_NOT_LOGGED_IN, MSG_OPERATION_DENIED},
    };
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct FakeOrderRepo {
        created_status: Mutex<Option<OrderStatus>>,
    }

    #[async_trait]
    impl OrderCommandRepositoryTrait for FakeOrderRepo {
        async fn create_order(
            &self,
            customer_id: i32,
            status: OrderStatus,
            _items: &[OrderItemRequest],
        ) -> Result<Order, RepositoryError> {
            *self.created_status.lock().unwrap() = Some(status);
            Ok(Order {
                order_id: 1,
                customer_id,
                status,
                created_at: None,
                updated_at: None,
            })
        }

        async fn update_order(
            &self,
            id: i32,
            status: OrderStatus,
            _items: Option<&[OrderItemRequest]>,
        ) -> Result<Option<Order>, RepositoryError> {
            Ok(Some(Order {
                order_id: id,
                customer_id: 1,
                status,
                created_at: None,
                updated_at: None,
            }))
        }

        async fn delete_order(&self, _id: i32) -> Result<Option<Order>, RepositoryError> {
            Ok(None)
        }
    }

    fn service() -> (OrderCommandService, Arc<FakeOrderRepo>) {
        let repo = Arc::new(FakeOrderRepo::default());
        (OrderCommandService::new(repo.clone()), repo)
    }

    fn admin() -> AuthContext {
        AuthContext {
            user_id: 1,
            is_admin: true,
        }
    }

    #[tokio::test]
    async fn create_forces_active_status() {
        let (svc, repo) = service();

        let req = CreateOrderRequest {
            customer_id: 7,
            products: vec![OrderItemRequest {
                product_id: 1,
                quantity: 2,
            }],
            status: Some(OrderStatus::Cancelled),
        };

        let response = svc.create_order(&req).await.unwrap();

        assert_eq!(response.data.status, OrderStatus::Active);
        assert_eq!(
            *repo.created_status.lock().unwrap(),
            Some(OrderStatus::Active)
        );
    }

    #[tokio::test]
    async fn update_requires_admin() {
        let (svc, _repo) = service();

        let req = UpdateOrderRequest {
            id: Some(1),
            status: OrderStatus::Fulfilled,
            products: None,
        };

        match svc.update_order(None, &req).await {
            Err(ServiceError::Unauthenticated(msg)) => assert_eq!(msg, MSG_NOT_LOGGED_IN),
            other => panic!("unexpected: {other:?}"),
        }

        let customer = AuthContext {
            user_id: 2,
            is_admin: false,
        };
        match svc.update_order(Some(&customer), &req).await {
            Err(ServiceError::Forbidden(msg)) => assert_eq!(msg, MSG_OPERATION_DENIED),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_returns_the_new_state() {
        let (svc, _repo) = service();

        let req = UpdateOrderRequest {
            id: Some(4),
            status: OrderStatus::Fulfilled,
            products: None,
        };

        let response = svc.update_order(Some(&admin()), &req).await.unwrap();

        assert_eq!(response.data.id, 4);
        assert_eq!(response.data.status, OrderStatus::Fulfilled);
    }

    #[tokio::test]
    async fn delete_missing_order_is_not_found() {
        let (svc, _repo) = service();

        assert!(matches!(
            svc.delete_order(Some(&admin()), 99).await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
