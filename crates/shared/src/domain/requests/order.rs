use crate::model::OrderStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItemRequest {
    #[validate(range(min = 1, message = "Product ID is required"))]
    #[schema(example = 1)]
    pub product_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 2)]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(range(min = 1, message = "Customer is required"))]
    #[schema(example = 1)]
    pub customer_id: i32,

    #[validate(length(min = 1, message = "Order needs at least one item"))]
    #[validate(nested)]
    pub products: Vec<OrderItemRequest>,

    /// Accepted for wire compatibility but ignored: a new order is always
    /// persisted as `active`.
    #[serde(default)]
    #[schema(write_only = true)]
    pub status: Option<OrderStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderRequest {
    #[schema(read_only = true)]
    pub id: Option<i32>,

    pub status: OrderStatus,

    #[validate(nested)]
    pub products: Option<Vec<OrderItemRequest>>,
}
