use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::{
        requests::AuthContext,
        responses::{ApiResponse, OrderResponse, to_order_response},
    },
    errors::ServiceError,
    service::access::require_order_admin,
};
use async_trait::async_trait;
use tracing::{error, info};

/// Admin-only order listings, joined with customer and product data.
#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        identity: Option<&AuthContext>,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        require_order_admin(identity)?;

        let orders = self.query.find_all().await.map_err(|err| {
            error!("❌ Failed to fetch orders: {err:?}");
            ServiceError::Repo(err)
        })?;

        let data: Vec<OrderResponse> = orders
            .into_iter()
            .map(|(order, items)| to_order_response(order, items))
            .collect();

        info!("✅ Listed {} order(s)", data.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Orders fetched successfully".to_string(),
            data,
        })
    }

    async fn find_by_id(
        &self,
        identity: Option<&AuthContext>,
        id: i32,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        require_order_admin(identity)?;

        let (order, items) = self
            .query
            .find_by_id(id)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or_else(|| ServiceError::NotFound(format!("Order {id} not found")))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order fetched successfully".to_string(),
            data: to_order_response(order, items),
        })
    }
}
