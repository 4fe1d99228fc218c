use crate::{
    abstract_trait::{CategoryQueryServiceTrait, DynCategoryQueryRepository},
    domain::responses::{ApiResponse, CategoryResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

/// Read-only category listing for the storefront navigation.
#[derive(Clone)]
pub struct CategoryQueryService {
    query: DynCategoryQueryRepository,
}

impl CategoryQueryService {
    pub fn new(query: DynCategoryQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CategoryQueryServiceTrait for CategoryQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CategoryResponse>>, ServiceError> {
        let categories = self.query.find_all().await.map_err(|err| {
            error!("❌ Failed to fetch categories: {err:?}");
            ServiceError::Repo(err)
        })?;

        let data: Vec<CategoryResponse> =
            categories.into_iter().map(CategoryResponse::from).collect();

        info!("✅ Listed {} categor(ies)", data.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Categories fetched successfully".to_string(),
            data,
        })
    }
}
