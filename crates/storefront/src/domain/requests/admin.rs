use serde::{Deserialize, Serialize};
use shared::model::NewProductRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct AdminSearch {
    #[serde(default)]
    pub search: String,
}

/// Text fields of the add-product form; the image travels as a separate
/// multipart part.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Engine Oil 5W-30")]
    pub name: String,

    #[validate(length(min = 1, message = "Category is required"))]
    #[schema(example = "oils")]
    pub category: String,

    #[validate(length(min = 1, message = "Brand is required"))]
    #[schema(example = "Mobil")]
    pub brand: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    #[schema(example = 18500)]
    pub price: f64,

    #[validate(range(min = 0.0, message = "Original price cannot be negative"))]
    pub original_price: Option<f64>,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 25)]
    pub stock: i64,

    pub description: Option<String>,
    pub sku: Option<String>,
    pub supplier: Option<String>,
}

impl CreateProductRequest {
    pub fn into_row(self, image: String) -> NewProductRow {
        NewProductRow {
            name: self.name,
            category: self.category.trim().to_lowercase(),
            brand: self.brand,
            price: self.price,
            original_price: self.original_price,
            stock: self.stock,
            description: self.description,
            sku: self.sku,
            supplier: self.supplier,
            image,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}
