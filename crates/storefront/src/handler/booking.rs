use crate::{
    abstract_trait::booking::DynBookingService,
    domain::{
        requests::{BookingQuoteRequest, CreateBookingRequest, ToggleServiceRequest},
        response::{
            ApiResponse, BookingConfirmationResponse, BookingOptionsResponse,
            BookingQuoteResponse,
        },
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Extension, Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/bookings/options",
    tag = "Booking",
    responses(
        (status = 200, description = "Bookable services and time slots", body = ApiResponse<BookingOptionsResponse>)
    )
)]
pub async fn get_booking_options(
    Extension(service): Extension<DynBookingService>,
) -> Result<impl IntoResponse, HttpError> {
    Ok((StatusCode::OK, Json(service.options())))
}

#[utoipa::path(
    post,
    path = "/api/bookings/quote",
    tag = "Booking",
    request_body = BookingQuoteRequest,
    responses(
        (status = 200, description = "Total for the selected services", body = ApiResponse<BookingQuoteResponse>)
    )
)]
pub async fn quote_booking(
    Extension(service): Extension<DynBookingService>,
    SimpleValidatedJson(body): SimpleValidatedJson<BookingQuoteRequest>,
) -> Result<impl IntoResponse, HttpError> {
    Ok((StatusCode::OK, Json(service.quote(&body))))
}

#[utoipa::path(
    post,
    path = "/api/bookings/toggle",
    tag = "Booking",
    request_body = ToggleServiceRequest,
    responses(
        (status = 200, description = "Selection with the service toggled", body = ApiResponse<BookingQuoteResponse>)
    )
)]
pub async fn toggle_service(
    Extension(service): Extension<DynBookingService>,
    SimpleValidatedJson(body): SimpleValidatedJson<ToggleServiceRequest>,
) -> Result<impl IntoResponse, HttpError> {
    Ok((StatusCode::OK, Json(service.toggle(&body))))
}

#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Booking",
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking confirmed", body = ApiResponse<BookingConfirmationResponse>),
        (status = 400, description = "Missing information")
    )
)]
pub async fn create_booking(
    Extension(service): Extension<DynBookingService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateBookingRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.confirm(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn booking_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/bookings/options", get(get_booking_options))
        .route("/api/bookings/quote", post(quote_booking))
        .route("/api/bookings/toggle", post(toggle_service))
        .route("/api/bookings", post(create_booking))
        .layer(Extension(app_state.di_container.booking_service.clone()))
}
