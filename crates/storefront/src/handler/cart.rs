use crate::{
    abstract_trait::cart::DynCartService,
    domain::{
        requests::{
            AddToCartRequest, AdjustCartItemRequest, CartQuery, CheckoutRequest,
            UpdateCartItemRequest,
        },
        response::{ApiResponse, CartResponse, CheckoutResponse},
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/carts",
    tag = "Cart",
    responses(
        (status = 201, description = "Empty cart created", body = ApiResponse<CartResponse>)
    )
)]
pub async fn create_cart(
    Extension(service): Extension<DynCartService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_cart().await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/carts/{cart_id}",
    tag = "Cart",
    params(("cart_id" = String, Path, description = "Cart ID"), CartQuery),
    responses(
        (status = 200, description = "Cart contents and totals", body = ApiResponse<CartResponse>),
        (status = 404, description = "Cart not found")
    )
)]
pub async fn get_cart(
    Extension(service): Extension<DynCartService>,
    Path(cart_id): Path<String>,
    Query(params): Query<CartQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_cart(&cart_id, params.delivery).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/carts/{cart_id}",
    tag = "Cart",
    params(("cart_id" = String, Path, description = "Cart ID")),
    responses(
        (status = 200, description = "Cart discarded"),
        (status = 404, description = "Cart not found")
    )
)]
pub async fn delete_cart(
    Extension(service): Extension<DynCartService>,
    Path(cart_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_cart(&cart_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/carts/{cart_id}/items",
    tag = "Cart",
    params(("cart_id" = String, Path, description = "Cart ID")),
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Item added", body = ApiResponse<CartResponse>),
        (status = 404, description = "Cart or product not found"),
        (status = 409, description = "Product out of stock")
    )
)]
pub async fn add_item(
    Extension(service): Extension<DynCartService>,
    Path(cart_id): Path<String>,
    SimpleValidatedJson(body): SimpleValidatedJson<AddToCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.add_item(&cart_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/carts/{cart_id}/items/{item_id}",
    tag = "Cart",
    params(
        ("cart_id" = String, Path, description = "Cart ID"),
        ("item_id" = String, Path, description = "Product ID of the cart item")
    ),
    request_body = UpdateCartItemRequest,
    responses(
        (status = 200, description = "Quantity set", body = ApiResponse<CartResponse>),
        (status = 404, description = "Cart or item not found")
    )
)]
pub async fn update_item(
    Extension(service): Extension<DynCartService>,
    Path((cart_id, item_id)): Path<(String, String)>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCartItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .update_item(&cart_id, &item_id, body.quantity)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/carts/{cart_id}/items/{item_id}",
    tag = "Cart",
    params(
        ("cart_id" = String, Path, description = "Cart ID"),
        ("item_id" = String, Path, description = "Product ID of the cart item")
    ),
    request_body = AdjustCartItemRequest,
    responses(
        (status = 200, description = "Quantity adjusted", body = ApiResponse<CartResponse>),
        (status = 404, description = "Cart or item not found")
    )
)]
pub async fn adjust_item(
    Extension(service): Extension<DynCartService>,
    Path((cart_id, item_id)): Path<(String, String)>,
    SimpleValidatedJson(body): SimpleValidatedJson<AdjustCartItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .adjust_item(&cart_id, &item_id, body.delta)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/carts/{cart_id}/items/{item_id}",
    tag = "Cart",
    params(
        ("cart_id" = String, Path, description = "Cart ID"),
        ("item_id" = String, Path, description = "Product ID of the cart item")
    ),
    responses(
        (status = 200, description = "Item removed", body = ApiResponse<CartResponse>),
        (status = 404, description = "Cart or item not found")
    )
)]
pub async fn remove_item(
    Extension(service): Extension<DynCartService>,
    Path((cart_id, item_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.remove_item(&cart_id, &item_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/carts/{cart_id}/checkout",
    tag = "Cart",
    params(("cart_id" = String, Path, description = "Cart ID")),
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Order placed", body = ApiResponse<CheckoutResponse>),
        (status = 400, description = "Empty cart or missing details"),
        (status = 404, description = "Cart not found")
    )
)]
pub async fn checkout(
    Extension(service): Extension<DynCartService>,
    Path(cart_id): Path<String>,
    SimpleValidatedJson(body): SimpleValidatedJson<CheckoutRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.checkout(&cart_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/carts", post(create_cart))
        .route("/api/carts/{cart_id}", get(get_cart).delete(delete_cart))
        .route("/api/carts/{cart_id}/items", post(add_item))
        .route(
            "/api/carts/{cart_id}/items/{item_id}",
            put(update_item).patch(adjust_item).delete(remove_item),
        )
        .route("/api/carts/{cart_id}/checkout", post(checkout))
        .layer(Extension(app_state.di_container.cart_service.clone()))
}
