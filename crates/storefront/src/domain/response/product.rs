use serde::{Deserialize, Serialize};
use shared::model::ProductRow;
use utoipa::ToSchema;

pub const DEFAULT_PRODUCT_NAME: &str = "Unnamed Product";
pub const DEFAULT_RATING: f64 = 4.2;
pub const DEFAULT_CATEGORY: &str = "other";
pub const DEFAULT_BRAND: &str = "Generic";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300?text=No+Image";

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub rating: f64,
    pub reviews: i64,
    pub category: String,
    pub brand: String,
    pub in_stock: bool,
    pub image: String,
    pub discount_percent: Option<i64>,
}

impl ProductResponse {
    /// Whole-percent discount, only when the original price is above the
    /// current one.
    pub fn discount(price: f64, original_price: Option<f64>) -> Option<i64> {
        match original_price {
            Some(original) if original > 0.0 && original > price => {
                Some((((original - price) / original) * 100.0).round() as i64)
            }
            _ => None,
        }
    }
}

// missing backend columns are defaulted here, never in the backend itself
impl From<ProductRow> for ProductResponse {
    fn from(value: ProductRow) -> Self {
        let id = value.id_string();
        let in_stock = value.has_stock();
        let reviews = value.review_count();
        let price = value.price.unwrap_or(0.0);

        let image = match value.image {
            Some(url) if !url.is_empty() && url != "null" => url,
            _ => PLACEHOLDER_IMAGE.to_string(),
        };

        ProductResponse {
            id,
            name: value
                .name
                .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string()),
            price,
            original_price: value.original_price,
            rating: value.rating.unwrap_or(DEFAULT_RATING),
            reviews,
            category: value
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
                .to_lowercase()
                .trim()
                .to_string(),
            brand: value.brand.unwrap_or_else(|| DEFAULT_BRAND.to_string()),
            in_stock,
            image,
            discount_percent: Self::discount(price, value.original_price),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CatalogResponse {
    pub products: Vec<ProductResponse>,
    pub total_found: usize,
    pub search: String,
    pub category: String,
    pub sort: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct CategoryResponse {
    pub value: String,
    pub label: String,
}
