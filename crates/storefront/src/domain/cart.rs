use crate::domain::response::ProductResponse;
use serde::{Deserialize, Serialize};
use shared::errors::ServiceError;
use thiserror::Error;
use utoipa::ToSchema;

pub const DELIVERY_FEE: f64 = 2000.0;
pub const MAX_ITEM_QUANTITY: u32 = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    #[default]
    Delivery,
    Pickup,
}

impl DeliveryOption {
    pub fn fee(&self) -> f64 {
        match self {
            DeliveryOption::Delivery => DELIVERY_FEE,
            DeliveryOption::Pickup => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cod,
    Transfer,
    Card,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "Cash on Delivery",
            PaymentMethod::Transfer => "Bank Transfer",
            PaymentMethod::Card => "Card Payment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub brand: String,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("This item is currently out of stock.")]
    OutOfStock,

    #[error("Item {0} is not in the cart")]
    ItemNotFound(String),

    #[error("You can add at most {} of an item.", MAX_ITEM_QUANTITY)]
    QuantityLimit,

    #[error("Please add items to your cart before checking out.")]
    Empty,

    #[error("Please fill in your name and phone number.")]
    MissingContact,

    #[error("Please provide your delivery address.")]
    MissingAddress,
}

impl From<CartError> for ServiceError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::OutOfStock => ServiceError::OutOfStock,
            CartError::ItemNotFound(_) => ServiceError::NotFound(err.to_string()),
            CartError::QuantityLimit
            | CartError::Empty
            | CartError::MissingContact
            | CartError::MissingAddress => ServiceError::Validation(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckoutDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub delivery: DeliveryOption,
    pub payment: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub items: Vec<CartItem>,
    pub item_count: u64,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub delivery: DeliveryOption,
    pub payment: PaymentMethod,
}

/// Items keep insertion order; a product id appears at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self, product: &ProductResponse) -> Result<(), CartError> {
        if !product.in_stock {
            return Err(CartError::OutOfStock);
        }

        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(item) if item.quantity >= MAX_ITEM_QUANTITY => {
                return Err(CartError::QuantityLimit);
            }
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem {
                id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                brand: product.brand.clone(),
                image: product.image.clone(),
                quantity: 1,
            }),
        }

        Ok(())
    }

    /// A quantity of zero drops the item.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> Result<(), CartError> {
        if quantity > MAX_ITEM_QUANTITY {
            return Err(CartError::QuantityLimit);
        }

        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| CartError::ItemNotFound(id.to_string()))?;

        if quantity == 0 {
            self.items.remove(position);
        } else {
            self.items[position].quantity = quantity;
        }

        Ok(())
    }

    /// Relative change, clamped to `0..=MAX_ITEM_QUANTITY`.
    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> Result<(), CartError> {
        let current = self
            .items
            .iter()
            .find(|item| item.id == id)
            .map(|item| i64::from(item.quantity))
            .ok_or_else(|| CartError::ItemNotFound(id.to_string()))?;

        let next = current
            .saturating_add(delta)
            .clamp(0, i64::from(MAX_ITEM_QUANTITY)) as u32;
        self.update_quantity(id, next)
    }

    pub fn remove(&mut self, id: &str) -> Result<CartItem, CartError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| CartError::ItemNotFound(id.to_string()))?;

        Ok(self.items.remove(position))
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn total(&self, delivery: DeliveryOption) -> f64 {
        self.subtotal() + delivery.fee()
    }

    pub fn validate_checkout(&self, details: &CheckoutDetails) -> Result<(), CartError> {
        if self.items.is_empty() {
            return Err(CartError::Empty);
        }

        if details.name.trim().is_empty() || details.phone.trim().is_empty() {
            return Err(CartError::MissingContact);
        }

        if details.delivery == DeliveryOption::Delivery && details.address.trim().is_empty() {
            return Err(CartError::MissingAddress);
        }

        Ok(())
    }

    /// Empties the cart once the details pass validation.
    pub fn checkout(&mut self, details: &CheckoutDetails) -> Result<Receipt, CartError> {
        self.validate_checkout(details)?;

        let receipt = Receipt {
            item_count: self.item_count(),
            subtotal: self.subtotal(),
            delivery_fee: details.delivery.fee(),
            total: self.total(details.delivery),
            delivery: details.delivery,
            payment: details.payment,
            items: std::mem::take(&mut self.items),
        };

        Ok(receipt)
    }
}

/// Naira amount with thousands separators, e.g. `₦4,500`.
pub fn format_naira(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}₦{grouped}")
}
