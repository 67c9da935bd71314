use crate::domain::{
    requests::{BookingQuoteRequest, CreateBookingRequest, ToggleServiceRequest},
    response::{
        ApiResponse, BookingConfirmationResponse, BookingOptionsResponse, BookingQuoteResponse,
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynBookingService = Arc<dyn BookingServiceTrait + Send + Sync>;

#[async_trait]
pub trait BookingServiceTrait {
    fn options(&self) -> ApiResponse<BookingOptionsResponse>;
    fn quote(&self, req: &BookingQuoteRequest) -> ApiResponse<BookingQuoteResponse>;
    fn toggle(&self, req: &ToggleServiceRequest) -> ApiResponse<BookingQuoteResponse>;
    async fn confirm(
        &self,
        req: &CreateBookingRequest,
    ) -> Result<ApiResponse<BookingConfirmationResponse>, ServiceError>;
}
