use crate::{
    abstract_trait::{auth::DynAuthService, dashboard::DynDashboardService},
    domain::response::{ApiResponse, HomeResponse, UserBookingResponse, UserOrderResponse},
    middleware::auth::auth_middleware,
    state::AppState,
};
use axum::{
    Extension, Json, http::StatusCode, middleware, response::IntoResponse, routing::get,
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/home",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Featured services, features and testimonials", body = ApiResponse<HomeResponse>)
    )
)]
pub async fn get_home(
    Extension(service): Extension<DynDashboardService>,
) -> Result<impl IntoResponse, HttpError> {
    Ok((StatusCode::OK, Json(service.home())))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/bookings",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Bookings of the signed-in user", body = ApiResponse<Vec<UserBookingResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_my_bookings(
    Extension(service): Extension<DynDashboardService>,
) -> Result<impl IntoResponse, HttpError> {
    Ok((StatusCode::OK, Json(service.my_bookings())))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/orders",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Orders of the signed-in user", body = ApiResponse<Vec<UserOrderResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_my_orders(
    Extension(service): Extension<DynDashboardService>,
) -> Result<impl IntoResponse, HttpError> {
    Ok((StatusCode::OK, Json(service.my_orders())))
}

pub fn dashboard_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let auth: DynAuthService = app_state.di_container.auth_service.clone();

    let public_routes = OpenApiRouter::new()
        .route("/api/home", get(get_home))
        .layer(Extension(app_state.di_container.dashboard_service.clone()));

    let private_routes = OpenApiRouter::new()
        .route("/api/dashboard/bookings", get(get_my_bookings))
        .route("/api/dashboard/orders", get(get_my_orders))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.dashboard_service.clone()))
        .layer(Extension(auth));

    public_routes.merge(private_routes)
}
