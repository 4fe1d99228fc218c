use crate::model::{Product, ProductWithCategory};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub price: i64,
    pub category_id: i32,
    /// Populated on catalog listings, absent on single-record lookups.
    pub category_title: Option<String>,
    pub description: String,
    pub product_url: String,
    pub image_url: String,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

// model to response
impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.product_id,
            name: value.name,
            brand: value.brand,
            price: value.price,
            category_id: value.category_id,
            category_title: None,
            description: value.description,
            product_url: value.product_url,
            image_url: value.image_url,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

// joined row to response
impl From<ProductWithCategory> for ProductResponse {
    fn from(value: ProductWithCategory) -> Self {
        let mut response = ProductResponse::from(value.product);
        response.category_title = Some(value.category_title);
        response
    }
}
