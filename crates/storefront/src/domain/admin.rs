use crate::domain::{
    catalog::contains_ignore_case,
    response::{
        AdminBookingResponse, AdminBookingsResponse, AdminProductResponse, AdminProductsResponse,
        AdminUserResponse, AdminUsersResponse, DEFAULT_CATEGORY, DEFAULT_PRODUCT_NAME,
        StockStatus,
    },
};
use shared::model::ProductRow;

pub const LOW_STOCK_THRESHOLD: i64 = 10;

impl StockStatus {
    pub fn from_stock(stock: i64) -> Self {
        if stock <= 0 {
            StockStatus::OutOfStock
        } else if stock <= LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

impl From<ProductRow> for AdminProductResponse {
    fn from(value: ProductRow) -> Self {
        let stock = value.stock_count();

        Self {
            id: value.id_string(),
            name: value
                .name
                .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string()),
            category: value
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            stock,
            price: value.price.unwrap_or(0.0),
            status: StockStatus::from_stock(stock),
        }
    }
}

/// Counts cover the whole inventory, not just the search hits.
pub fn inventory(rows: Vec<ProductRow>, search: &str) -> AdminProductsResponse {
    let all: Vec<AdminProductResponse> = rows.into_iter().map(Into::into).collect();

    let low_stock = all
        .iter()
        .filter(|p| p.status == StockStatus::LowStock)
        .count();
    let out_of_stock = all
        .iter()
        .filter(|p| p.status == StockStatus::OutOfStock)
        .count();
    let total = all.len();

    let products = all
        .into_iter()
        .filter(|p| {
            contains_ignore_case(&p.name, search) || contains_ignore_case(&p.category, search)
        })
        .collect();

    AdminProductsResponse {
        products,
        total,
        low_stock,
        out_of_stock,
    }
}

pub fn users_overview(users: Vec<AdminUserResponse>, search: &str) -> AdminUsersResponse {
    let count = |status: &str| users.iter().filter(|u| u.status == status).count();
    let (active, inactive, blocked) = (count("Active"), count("Inactive"), count("Blocked"));
    let total = users.len();

    let users = users
        .into_iter()
        .filter(|u| {
            contains_ignore_case(&u.name, search) || contains_ignore_case(&u.email, search)
        })
        .collect();

    AdminUsersResponse {
        users,
        total,
        active,
        inactive,
        blocked,
    }
}

pub fn bookings_overview(
    bookings: Vec<AdminBookingResponse>,
    search: &str,
) -> AdminBookingsResponse {
    let count = |status: &str| bookings.iter().filter(|b| b.status == status).count();
    let completed = count("Completed");
    let pending = count("Pending");
    let in_progress = count("In Progress");
    let scheduled = count("Scheduled");
    let total = bookings.len();

    let bookings = bookings
        .into_iter()
        .filter(|b| {
            contains_ignore_case(&b.customer_name, search) || contains_ignore_case(&b.service, search)
        })
        .collect();

    AdminBookingsResponse {
        bookings,
        total,
        completed,
        pending,
        in_progress,
        scheduled,
    }
}
