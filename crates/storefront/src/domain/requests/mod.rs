mod admin;
mod auth;
mod booking;
mod cart;
mod catalog;

pub use self::admin::{AdminSearch, CreateProductRequest, ImageUpload};
pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::booking::{BookingQuoteRequest, CreateBookingRequest, ToggleServiceRequest};
pub use self::cart::{
    AddToCartRequest, AdjustCartItemRequest, CartQuery, CheckoutRequest, UpdateCartItemRequest,
};
pub use self::catalog::FindProducts;
