use crate::domain::booking::BookingForm;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct BookingQuoteRequest {
    #[serde(default)]
    pub services: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ToggleServiceRequest {
    #[serde(default)]
    pub selected: Vec<String>,

    #[validate(length(min = 1, message = "Service id is required"))]
    pub service_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    #[schema(value_type = Option<String>, format = Date, example = "2025-07-04")]
    pub date: Option<NaiveDate>,

    #[schema(example = "10:00 AM")]
    pub time_slot: Option<String>,

    #[serde(default)]
    pub services: Vec<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub phone: String,

    pub address: Option<String>,

    pub car_model: Option<String>,
}

impl From<&CreateBookingRequest> for BookingForm {
    fn from(value: &CreateBookingRequest) -> Self {
        Self {
            date: value.date,
            time_slot: value.time_slot.clone(),
            services: value.services.clone(),
            name: value.name.clone(),
            phone: value.phone.clone(),
            address: value.address.clone(),
            car_model: value.car_model.clone(),
        }
    }
}
