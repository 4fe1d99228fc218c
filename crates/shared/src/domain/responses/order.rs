use crate::model::{Order, OrderItemDetail, OrderStatus, OrderWithCustomer};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderCustomerResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderLineResponse {
    pub product_id: i32,
    pub quantity: i32,
    /// Present when the listing populates product fields.
    pub product_name: Option<String>,
    pub brand: Option<String>,
    pub price: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    pub customer: OrderCustomerResponse,
    pub status: OrderStatus,
    pub products: Vec<OrderLineResponse>,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

impl From<OrderItemDetail> for OrderLineResponse {
    fn from(value: OrderItemDetail) -> Self {
        OrderLineResponse {
            product_id: value.product_id,
            quantity: value.quantity,
            product_name: Some(value.product_name),
            brand: Some(value.brand),
            price: Some(value.price),
        }
    }
}

// joined row + items to response
pub fn to_order_response(order: OrderWithCustomer, items: Vec<OrderItemDetail>) -> OrderResponse {
    OrderResponse {
        id: order.order.order_id,
        customer: OrderCustomerResponse {
            id: order.order.customer_id,
            username: order.customer_username,
            email: order.customer_email,
        },
        status: order.order.status,
        products: items.into_iter().map(OrderLineResponse::from).collect(),
        created_at: order.order.created_at.map(|dt| dt.to_string()),
        updated_at: order.order.updated_at.map(|dt| dt.to_string()),
    }
}

/// Plain record response for create/update/delete, where no join ran.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderRecordResponse {
    pub id: i32,
    pub customer_id: i32,
    pub status: OrderStatus,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

impl From<Order> for OrderRecordResponse {
    fn from(value: Order) -> Self {
        OrderRecordResponse {
            id: value.order_id,
            customer_id: value.customer_id,
            status: value.status,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
