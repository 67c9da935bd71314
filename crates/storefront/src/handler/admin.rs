use crate::{
    abstract_trait::{admin::DynAdminService, auth::DynAuthService},
    domain::{
        requests::{AdminSearch, CreateProductRequest, ImageUpload},
        response::{
            AdminBookingsResponse, AdminProductsResponse, AdminProfileResponse,
            AdminUsersResponse, ApiResponse, ProductResponse,
        },
    },
    middleware::{
        auth::{admin_middleware, auth_middleware},
        validate::format_validation_errors,
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Multipart, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::{errors::HttpError, model::AuthUser};
use std::{str::FromStr, sync::Arc};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use validator::Validate;

/// Multipart body of the add-product form.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct CreateProductForm {
    name: String,
    category: String,
    brand: String,
    price: f64,
    original_price: Option<f64>,
    stock: i64,
    description: Option<String>,
    sku: Option<String>,
    supplier: Option<String>,
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
}

#[utoipa::path(
    get,
    path = "/api/admin/products",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(AdminSearch),
    responses(
        (status = 200, description = "Inventory with stock status", body = ApiResponse<AdminProductsResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn get_admin_products(
    Extension(service): Extension<DynAdminService>,
    Query(params): Query<AdminSearch>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.products(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    tag = "Admin",
    security(("bearer_auth" = [])),
    request_body(content = CreateProductForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Product added", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid form"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn create_admin_product(
    Extension(service): Extension<DynAdminService>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let (body, image) = read_product_form(multipart).await?;

    body.validate()
        .map_err(|errors| HttpError::BadRequest(format_validation_errors(&errors)))?;

    let response = service.create_product(body, image).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(AdminSearch),
    responses(
        (status = 200, description = "Customer accounts", body = ApiResponse<AdminUsersResponse>),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn get_admin_users(
    Extension(service): Extension<DynAdminService>,
    Query(params): Query<AdminSearch>,
) -> Result<impl IntoResponse, HttpError> {
    Ok((StatusCode::OK, Json(service.users(&params))))
}

#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = "Admin",
    security(("bearer_auth" = [])),
    params(AdminSearch),
    responses(
        (status = 200, description = "Service bookings", body = ApiResponse<AdminBookingsResponse>),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn get_admin_bookings(
    Extension(service): Extension<DynAdminService>,
    Query(params): Query<AdminSearch>,
) -> Result<impl IntoResponse, HttpError> {
    Ok((StatusCode::OK, Json(service.bookings(&params))))
}

#[utoipa::path(
    get,
    path = "/api/admin/profile",
    tag = "Admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Signed-in admin", body = ApiResponse<AdminProfileResponse>),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn get_admin_profile(
    Extension(service): Extension<DynAdminService>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    Ok((StatusCode::OK, Json(service.profile(&user))))
}

fn parse_field<T: FromStr>(field: &str, value: &str) -> Result<T, HttpError> {
    value
        .trim()
        .parse()
        .map_err(|_| HttpError::BadRequest(format!("{field}: Invalid number")))
}

fn parse_amount(field: &str, value: &str) -> Result<f64, HttpError> {
    let amount: f64 = parse_field(field, value)?;
    if !amount.is_finite() {
        return Err(HttpError::BadRequest(format!("{field}: Invalid number")));
    }
    Ok(amount)
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn required<T>(field: &str, label: &str, value: Option<T>) -> Result<T, HttpError> {
    value.ok_or_else(|| HttpError::BadRequest(format!("{field}: {label} is required")))
}

async fn read_product_form(
    mut multipart: Multipart,
) -> Result<(CreateProductRequest, ImageUpload), HttpError> {
    let mut name = None;
    let mut category = None;
    let mut brand = None;
    let mut price = None;
    let mut original_price = None;
    let mut stock = None;
    let mut description = None;
    let mut sku = None;
    let mut supplier = None;
    let mut image: Option<ImageUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HttpError::BadRequest(e.body_text()))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        if field_name == "image" {
            let file_name = field.file_name().unwrap_or("image").to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| HttpError::BadRequest(e.body_text()))?;

            if !bytes.is_empty() {
                image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| HttpError::BadRequest(e.body_text()))?;

        match field_name.as_str() {
            "name" => name = optional(value),
            "category" => category = optional(value),
            "brand" => brand = optional(value),
            "price" => {
                price = match optional(value) {
                    Some(v) => Some(parse_amount("price", &v)?),
                    None => None,
                }
            }
            "original_price" | "originalPrice" => {
                original_price = match optional(value) {
                    Some(v) => Some(parse_amount("original_price", &v)?),
                    None => None,
                }
            }
            "stock" => {
                stock = match optional(value) {
                    Some(v) => Some(parse_field("stock", &v)?),
                    None => None,
                }
            }
            "description" => description = optional(value),
            "sku" => sku = optional(value),
            "supplier" => supplier = optional(value),
            _ => {}
        }
    }

    let body = CreateProductRequest {
        name: required("name", "Name", name)?,
        category: required("category", "Category", category)?,
        brand: required("brand", "Brand", brand)?,
        price: required("price", "Price", price)?,
        original_price,
        stock: required("stock", "Stock", stock)?,
        description,
        sku,
        supplier,
    };

    let image = image.ok_or_else(|| HttpError::BadRequest("image: Image is required".into()))?;

    Ok((body, image))
}

pub fn admin_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let auth: DynAuthService = app_state.di_container.auth_service.clone();

    OpenApiRouter::new()
        .route(
            "/api/admin/products",
            get(get_admin_products).post(create_admin_product),
        )
        .route("/api/admin/users", get(get_admin_users))
        .route("/api/admin/bookings", get(get_admin_bookings))
        .route("/api/admin/profile", get(get_admin_profile))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.admin_service.clone()))
        .layer(Extension(auth))
}
