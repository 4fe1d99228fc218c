use crate::{
    abstract_trait::{
        DynAuthService, DynCategoryQueryRepository, DynCategoryQueryService, DynFileStorage,
        DynHashing, DynJwtService, DynOrderCommandService, DynOrderQueryService,
        DynProductCommandService, DynProductQueryService,
    },
    config::ConnectionPool,
    repository::{CategoryRepository, OrderRepository, ProductRepository, UserRepository},
    service::{
        AuthService, CategoryQueryService, OrderCommandService, OrderQueryService,
        ProductCommandService, ProductQueryService,
    },
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query_service: DynProductQueryService,
    pub product_command_service: DynProductCommandService,
    pub order_query_service: DynOrderQueryService,
    pub order_command_service: DynOrderCommandService,
    pub category_query_service: DynCategoryQueryService,
    pub auth_service: DynAuthService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query_service", &"ProductQueryService")
            .field("product_command_service", &"ProductCommandService")
            .field("order_query_service", &"OrderQueryService")
            .field("order_command_service", &"OrderCommandService")
            .field("category_query_service", &"CategoryQueryService")
            .field("auth_service", &"AuthService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
    pub storage: DynFileStorage,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            pool,
            hash,
            jwt_config,
            storage,
        } = deps;

        let products = ProductRepository::new(pool.clone());
        let orders = OrderRepository::new(pool.clone());
        let categories: DynCategoryQueryRepository =
            Arc::new(CategoryRepository::new(pool.clone()));
        let users = UserRepository::new(pool);

        let product_query_service: DynProductQueryService =
            Arc::new(ProductQueryService::new(products.query.clone()));
        let product_command_service: DynProductCommandService = Arc::new(
            ProductCommandService::new(products.query, products.command, storage),
        );

        let order_query_service: DynOrderQueryService =
            Arc::new(OrderQueryService::new(orders.query));
        let order_command_service: DynOrderCommandService =
            Arc::new(OrderCommandService::new(orders.command));

        let category_query_service: DynCategoryQueryService =
            Arc::new(CategoryQueryService::new(categories));

        let auth_service: DynAuthService = Arc::new(AuthService::new(
            users.query,
            users.command,
            hash,
            jwt_config,
        ));

        Self {
            product_query_service,
            product_command_service,
            order_query_service,
            order_command_service,
            category_query_service,
            auth_service,
        }
    }
}
