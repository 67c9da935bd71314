use crate::domain::cart::{
    Cart, CartItem, DeliveryOption, PaymentMethod, Receipt, format_naira,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartResponse {
    pub cart_id: String,
    pub items: Vec<CartItem>,
    pub item_count: u64,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub delivery: DeliveryOption,
}

impl CartResponse {
    pub fn from_cart(cart_id: &str, cart: &Cart, delivery: DeliveryOption) -> Self {
        Self {
            cart_id: cart_id.to_string(),
            items: cart.items().to_vec(),
            item_count: cart.item_count(),
            subtotal: cart.subtotal(),
            delivery_fee: delivery.fee(),
            total: cart.total(delivery),
            delivery,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckoutResponse {
    pub cart_id: String,
    pub items: Vec<CartItem>,
    pub item_count: u64,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub delivery: DeliveryOption,
    pub payment: PaymentMethod,
    pub payment_label: String,
    pub message: String,
}

impl CheckoutResponse {
    pub fn from_receipt(cart_id: &str, receipt: Receipt) -> Self {
        let message = format!(
            "Your order of {} has been placed successfully. We'll contact you shortly.",
            format_naira(receipt.total)
        );

        Self {
            cart_id: cart_id.to_string(),
            items: receipt.items,
            item_count: receipt.item_count,
            subtotal: receipt.subtotal,
            delivery_fee: receipt.delivery_fee,
            total: receipt.total,
            delivery: receipt.delivery,
            payment: receipt.payment,
            payment_label: receipt.payment.label().to_string(),
            message,
        }
    }
}
