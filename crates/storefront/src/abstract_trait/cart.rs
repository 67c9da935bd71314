use crate::domain::{
    cart::{Cart, DeliveryOption},
    requests::{AddToCartRequest, CheckoutRequest},
    response::{ApiResponse, CartResponse, CheckoutResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SharedCart = Arc<Mutex<Cart>>;

pub type DynCartStore = Arc<dyn CartStoreTrait + Send + Sync>;

#[async_trait]
pub trait CartStoreTrait {
    /// Registers an empty cart and returns its id.
    async fn create(&self) -> String;
    async fn find(&self, cart_id: &str) -> Option<SharedCart>;
    async fn remove(&self, cart_id: &str) -> bool;
}

pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartServiceTrait {
    async fn create_cart(&self) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn get_cart(
        &self,
        cart_id: &str,
        delivery: DeliveryOption,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn add_item(
        &self,
        cart_id: &str,
        req: &AddToCartRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn update_item(
        &self,
        cart_id: &str,
        item_id: &str,
        quantity: u32,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn adjust_item(
        &self,
        cart_id: &str,
        item_id: &str,
        delta: i64,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn remove_item(
        &self,
        cart_id: &str,
        item_id: &str,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn checkout(
        &self,
        cart_id: &str,
        req: &CheckoutRequest,
    ) -> Result<ApiResponse<CheckoutResponse>, ServiceError>;
    async fn delete_cart(&self, cart_id: &str) -> Result<ApiResponse<()>, ServiceError>;
}
