mod category;
mod order;
mod product;
mod user;

pub use self::category::Category;
pub use self::order::{Order, OrderItem, OrderItemDetail, OrderStatus, OrderWithCustomer};
pub use self::product::{Product, ProductWithCategory};
pub use self::user::User;
