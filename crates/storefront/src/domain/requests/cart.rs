use crate::domain::cart::{CheckoutDetails, DeliveryOption, MAX_ITEM_QUANTITY, PaymentMethod};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddToCartRequest {
    #[validate(length(min = 1, message = "Product id is required"))]
    pub product_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCartItemRequest {
    /// Zero removes the item.
    #[validate(range(max = MAX_ITEM_QUANTITY, message = "Quantity cannot exceed 999"))]
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AdjustCartItemRequest {
    #[validate(range(min = -1000, max = 1000, message = "Adjustment out of range"))]
    pub delta: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct CartQuery {
    #[serde(default)]
    pub delivery: DeliveryOption,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub delivery: DeliveryOption,

    #[serde(default)]
    pub payment: PaymentMethod,
}

impl From<CheckoutRequest> for CheckoutDetails {
    fn from(value: CheckoutRequest) -> Self {
        Self {
            name: value.name,
            phone: value.phone,
            address: value.address,
            delivery: value.delivery,
            payment: value.payment,
        }
    }
}
