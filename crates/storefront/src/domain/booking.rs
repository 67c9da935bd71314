use chrono::{Datelike, NaiveDate};
use shared::errors::ServiceError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceOption {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub duration: &'static str,
}

pub const SERVICES: [ServiceOption; 6] = [
    ServiceOption {
        id: "oil-change",
        name: "Oil Change",
        price: 15000.0,
        duration: "30 mins",
    },
    ServiceOption {
        id: "car-wash",
        name: "Car Wash & Detailing",
        price: 5000.0,
        duration: "45 mins",
    },
    ServiceOption {
        id: "brake-service",
        name: "Brake Service",
        price: 25000.0,
        duration: "2 hours",
    },
    ServiceOption {
        id: "tire-change",
        name: "Tire Change",
        price: 8000.0,
        duration: "20 mins",
    },
    ServiceOption {
        id: "battery-check",
        name: "Battery Check & Replace",
        price: 12000.0,
        duration: "30 mins",
    },
    ServiceOption {
        id: "ac-service",
        name: "AC Service",
        price: 18000.0,
        duration: "1 hour",
    },
];

pub const TIME_SLOTS: [&str; 8] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "01:00 PM", "02:00 PM", "03:00 PM", "04:00 PM",
];

pub fn find_service(id: &str) -> Option<&'static ServiceOption> {
    SERVICES.iter().find(|service| service.id == id)
}

/// Unknown ids contribute nothing.
pub fn total_price(selected: &[String]) -> f64 {
    selected
        .iter()
        .filter_map(|id| find_service(id))
        .map(|service| service.price)
        .sum()
}

pub fn toggle_service(selected: &mut Vec<String>, id: &str) {
    match selected.iter().position(|s| s == id) {
        Some(position) => {
            selected.remove(position);
        }
        None => selected.push(id.to_string()),
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Please fill in all required fields and select at least one service.")]
    MissingInformation,

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Unavailable time slot: {0}")]
    InvalidTimeSlot(String),
}

impl From<BookingError> for ServiceError {
    fn from(err: BookingError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub date: Option<NaiveDate>,
    pub time_slot: Option<String>,
    pub services: Vec<String>,
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub car_model: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfirmation {
    pub date: NaiveDate,
    pub date_label: String,
    pub time_slot: Option<String>,
    pub services: Vec<ServiceOption>,
    pub total: f64,
    pub message: String,
}

impl BookingForm {
    pub fn confirm(&self) -> Result<BookingConfirmation, BookingError> {
        let date = match self.date {
            Some(date)
                if !self.services.is_empty()
                    && !self.name.trim().is_empty()
                    && !self.phone.trim().is_empty() =>
            {
                date
            }
            _ => return Err(BookingError::MissingInformation),
        };

        let mut ids: Vec<String> = Vec::with_capacity(self.services.len());
        for id in &self.services {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }

        let services = ids
            .iter()
            .map(|id| {
                find_service(id)
                    .copied()
                    .ok_or_else(|| BookingError::UnknownService(id.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let time_slot = match self.time_slot.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(slot) if TIME_SLOTS.contains(&slot) => Some(slot.to_string()),
            Some(slot) => return Err(BookingError::InvalidTimeSlot(slot.to_string())),
        };

        let date_label = long_date(date);
        let message = format!(
            "Your service has been booked for {date_label}. We'll call you shortly to confirm."
        );

        Ok(BookingConfirmation {
            date,
            date_label,
            time_slot,
            total: total_price(&ids),
            services,
            message,
        })
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// `July 4th, 2025`
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}
