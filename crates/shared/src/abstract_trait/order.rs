use crate::{
    domain::{
        requests::{AuthContext, CreateOrderRequest, OrderItemRequest, UpdateOrderRequest},
        responses::{ApiResponse, OrderRecordResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order as OrderModel, OrderItemDetail, OrderStatus, OrderWithCustomer},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(
        &self,
    ) -> Result<Vec<(OrderWithCustomer, Vec<OrderItemDetail>)>, RepositoryError>;
    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<(OrderWithCustomer, Vec<OrderItemDetail>)>, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(
        &self,
        identity: Option<&AuthContext>,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        identity: Option<&AuthContext>,
        id: i32,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create_order(
        &self,
        customer_id: i32,
        status: OrderStatus,
        items: &[OrderItemRequest],
    ) -> Result<OrderModel, RepositoryError>;
    async fn update_order(
        &self,
        id: i32,
        status: OrderStatus,
        items: Option<&[OrderItemRequest]>,
    ) -> Result<Option<OrderModel>, RepositoryError>;
    async fn delete_order(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderRecordResponse>, ServiceError>;
    async fn update_order(
        &self,
        identity: Option<&AuthContext>,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderRecordResponse>, ServiceError>;
    async fn delete_order(
        &self,
        identity: Option<&AuthContext>,
        id: i32,
    ) -> Result<ApiResponse<OrderRecordResponse>, ServiceError>;
}
