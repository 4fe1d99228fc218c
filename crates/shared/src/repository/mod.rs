mod category;
mod order;
mod product;
mod user;

pub use self::category::CategoryRepository;
pub use self::order::OrderRepository;
pub use self::product::ProductRepository;
pub use self::user::UserRepository;
