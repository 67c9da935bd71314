mod admin;
mod api;
mod auth;
mod booking;
mod cart;
mod dashboard;
mod product;

pub use self::admin::{
    AdminBookingResponse, AdminBookingsResponse, AdminProductResponse, AdminProductsResponse,
    AdminProfileResponse, AdminUserResponse, AdminUsersResponse, StockStatus,
};
pub use self::api::ApiResponse;
pub use self::auth::{LoginResponse, UserResponse};
pub use self::booking::{
    BookingConfirmationResponse, BookingOptionsResponse, BookingQuoteResponse, ServiceResponse,
};
pub use self::cart::{CartResponse, CheckoutResponse};
pub use self::dashboard::{
    FeatureResponse, FeaturedServiceResponse, HomeResponse, TestimonialResponse,
    UserBookingResponse, UserOrderResponse,
};
pub use self::product::{
    CatalogResponse, CategoryResponse, DEFAULT_BRAND, DEFAULT_CATEGORY, DEFAULT_PRODUCT_NAME,
    DEFAULT_RATING, PLACEHOLDER_IMAGE, ProductResponse,
};
