use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::responses::{ApiResponse, ProductResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

/// Public catalog reads; no access restriction by design.
#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = self.query.find_all().await.map_err(|err| {
            error!("❌ Failed to fetch products: {err:?}");
            ServiceError::Repo(err)
        })?;

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

        info!("✅ Listed {} product(s)", data.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Products fetched successfully".to_string(),
            data,
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .query
            .find_by_id(id)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or_else(|| ServiceError::NotFound(format!("Product {id} not found")))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product fetched successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn find_by_url(
        &self,
        product_url: &str,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .query
            .find_by_url(product_url)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or_else(|| ServiceError::NotFound(format!("Product '{product_url}' not found")))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product fetched successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }
}
