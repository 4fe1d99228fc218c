mod access;
mod auth;
mod category;
mod order;
mod product;

pub use self::access::{
    MSG_NOT_ADMIN, MSG_NOT_LOGGED_IN, MSG_OPERATION_DENIED, require_catalog_admin,
    require_order_admin,
};
pub use self::auth::AuthService;
pub use self::category::CategoryQueryService;
pub use self::order::{OrderCommandService, OrderQueryService};
pub use self::product::{ProductCommandService, ProductQueryService};
