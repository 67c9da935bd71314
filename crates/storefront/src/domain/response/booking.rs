use crate::domain::booking::{BookingConfirmation, ServiceOption};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ServiceResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub duration: String,
}

impl From<&ServiceOption> for ServiceResponse {
    fn from(value: &ServiceOption) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            price: value.price,
            duration: value.duration.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingOptionsResponse {
    pub services: Vec<ServiceResponse>,
    pub time_slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingQuoteResponse {
    pub services: Vec<String>,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingConfirmationResponse {
    pub date: NaiveDate,
    pub date_label: String,
    pub time_slot: Option<String>,
    pub services: Vec<ServiceResponse>,
    pub total: f64,
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub car_model: Option<String>,
    pub message: String,
}

impl BookingConfirmationResponse {
    pub fn new(
        confirmation: BookingConfirmation,
        name: String,
        phone: String,
        address: Option<String>,
        car_model: Option<String>,
    ) -> Self {
        Self {
            date: confirmation.date,
            date_label: confirmation.date_label,
            time_slot: confirmation.time_slot,
            services: confirmation
                .services
                .iter()
                .map(ServiceResponse::from)
                .collect(),
            total: confirmation.total,
            name,
            phone,
            address,
            car_model,
            message: confirmation.message,
        }
    }
}
