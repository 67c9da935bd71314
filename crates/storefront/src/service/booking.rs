use crate::{
    abstract_trait::booking::BookingServiceTrait,
    domain::{
        booking::{self, BookingForm, SERVICES, TIME_SLOTS},
        requests::{BookingQuoteRequest, CreateBookingRequest, ToggleServiceRequest},
        response::{
            ApiResponse, BookingConfirmationResponse, BookingOptionsResponse,
            BookingQuoteResponse, ServiceResponse,
        },
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, OperationTracer},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Clone)]
pub struct BookingService {
    tracer: OperationTracer,
}

impl BookingService {
    pub fn new(metrics: Arc<Mutex<Metrics>>) -> Self {
        let tracer = OperationTracer::new("booking_service", "booking-service", metrics);

        Self { tracer }
    }
}

#[async_trait]
impl BookingServiceTrait for BookingService {
    fn options(&self) -> ApiResponse<BookingOptionsResponse> {
        ApiResponse::success(
            "Booking options fetched successfully",
            BookingOptionsResponse {
                services: SERVICES.iter().map(ServiceResponse::from).collect(),
                time_slots: TIME_SLOTS.iter().map(|slot| slot.to_string()).collect(),
            },
        )
    }

    fn quote(&self, req: &BookingQuoteRequest) -> ApiResponse<BookingQuoteResponse> {
        ApiResponse::success(
            "Booking total calculated",
            BookingQuoteResponse {
                total: booking::total_price(&req.services),
                services: req.services.clone(),
            },
        )
    }

    fn toggle(&self, req: &ToggleServiceRequest) -> ApiResponse<BookingQuoteResponse> {
        let mut selected = req.selected.clone();
        booking::toggle_service(&mut selected, &req.service_id);

        ApiResponse::success(
            "Service selection updated",
            BookingQuoteResponse {
                total: booking::total_price(&selected),
                services: selected,
            },
        )
    }

    async fn confirm(
        &self,
        req: &CreateBookingRequest,
    ) -> Result<ApiResponse<BookingConfirmationResponse>, ServiceError> {
        info!("Confirming booking for {} services", req.services.len());

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "ConfirmBooking",
            vec![
                KeyValue::new("component", "booking"),
                KeyValue::new("operation", "confirm"),
                KeyValue::new("services", req.services.join(",")),
            ],
        );

        let confirmation = match BookingForm::from(req).confirm() {
            Ok(confirmation) => confirmation,
            Err(err) => {
                warn!("Booking rejected: {err}");
                self.tracer
                    .error(&tracing_ctx, method, &err.to_string())
                    .await;
                return Err(err.into());
            }
        };

        self.tracer
            .success(&tracing_ctx, method, "Booking confirmed")
            .await;

        Ok(ApiResponse::success(
            "Booking Confirmed!",
            BookingConfirmationResponse::new(
                confirmation,
                req.name.clone(),
                req.phone.clone(),
                req.address.clone(),
                req.car_model.clone(),
            ),
        ))
    }
}
