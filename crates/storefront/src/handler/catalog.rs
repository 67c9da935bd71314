use crate::{
    abstract_trait::catalog::DynCatalogService,
    domain::{
        requests::FindProducts,
        response::{ApiResponse, CatalogResponse, CategoryResponse, ProductResponse},
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Catalog",
    params(FindProducts),
    responses(
        (status = 200, description = "Filtered and sorted products", body = ApiResponse<CatalogResponse>),
        (status = 503, description = "Backend unavailable")
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynCatalogService>,
    Query(params): Query<FindProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Catalog",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynCatalogService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(&id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Catalog",
    responses(
        (status = 200, description = "Product categories", body = ApiResponse<Vec<CategoryResponse>>)
    )
)]
pub async fn get_categories(
    Extension(service): Extension<DynCatalogService>,
) -> Result<impl IntoResponse, HttpError> {
    Ok((StatusCode::OK, Json(service.categories())))
}

pub fn catalog_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products/{id}", get(get_product))
        .route("/api/categories", get(get_categories))
        .layer(Extension(app_state.di_container.catalog_service.clone()))
}
