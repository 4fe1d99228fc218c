use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub brand: String,
    pub price: i64,
    pub category_id: i32,
    pub description: String,
    /// Derived slug; re-computed from `name` on every write, never set
    /// directly by callers.
    pub product_url: String,
    /// Public URL of the uploaded image, empty when the product has none.
    pub image_url: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Product row joined with its category title for catalog listings.
#[derive(Debug, Clone, FromRow)]
pub struct ProductWithCategory {
    #[sqlx(flatten)]
    pub product: Product,
    pub category_title: String,
}
