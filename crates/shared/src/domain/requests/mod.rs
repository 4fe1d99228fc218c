mod auth;
mod order;
mod product;

pub use self::auth::{AuthContext, LoginRequest, RegisterRequest};
pub use self::order::{CreateOrderRequest, OrderItemRequest, UpdateOrderRequest};
pub use self::product::{CreateProductRequest, ImageUpload, UpdateProductRequest};
