mod admin;
mod auth;
mod booking;
mod cart;
mod catalog;
mod dashboard;

pub use self::admin::AdminService;
pub use self::auth::AuthService;
pub use self::booking::BookingService;
pub use self::cart::CartService;
pub use self::catalog::CatalogService;
pub use self::dashboard::DashboardService;
