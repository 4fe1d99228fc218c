use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Product name is required"))]
    #[schema(example = "Görögdinnye")]
    pub name: String,

    #[schema(example = "Bio Farm")]
    pub brand: String,

    #[validate(range(min = 0, message = "Price must not be negative"))]
    #[schema(example = 1200)]
    pub price: i64,

    #[validate(range(min = 1, message = "Category is required"))]
    #[schema(example = 1)]
    pub category_id: i32,

    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[schema(read_only = true)]
    pub id: Option<i32>,

    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,

    pub brand: String,

    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i64,

    #[validate(range(min = 1, message = "Category is required"))]
    pub category_id: i32,

    pub description: String,
}

/// An uploaded image as received from the multipart form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
