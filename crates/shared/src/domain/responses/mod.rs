mod api;
mod category;
mod order;
mod product;
mod token;
mod user;

pub use self::api::ApiResponse;
pub use self::category::CategoryResponse;
pub use self::order::{
    OrderCustomerResponse, OrderLineResponse, OrderRecordResponse, OrderResponse,
    to_order_response,
};
pub use self::product::ProductResponse;
pub use self::token::TokenResponse;
pub use self::user::UserResponse;
