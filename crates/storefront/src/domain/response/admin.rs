use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AdminProductResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub stock: i64,
    pub price: f64,
    pub status: StockStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminProductsResponse {
    pub products: Vec<AdminProductResponse>,
    pub total: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AdminUserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
    pub join_date: String,
    pub total_bookings: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminUsersResponse {
    pub users: Vec<AdminUserResponse>,
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub blocked: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AdminBookingResponse {
    pub id: i32,
    pub customer_name: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub price: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminBookingsResponse {
    pub bookings: Vec<AdminBookingResponse>,
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub scheduled: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminProfileResponse {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
}
