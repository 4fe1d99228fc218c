mod auth;
mod category;
mod hashing;
mod jwt;
mod order;
mod product;
mod storage;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::category::{
    CategoryQueryRepositoryTrait, CategoryQueryServiceTrait, DynCategoryQueryRepository,
    DynCategoryQueryService,
};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::storage::{DynFileStorage, FileStorageTrait, StoredImage};
pub use self::user::{
    DynUserCommandRepository, DynUserQueryRepository, UserCommandRepositoryTrait,
    UserQueryRepositoryTrait,
};
