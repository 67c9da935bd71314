use crate::{
    abstract_trait::admin::AdminServiceTrait,
    domain::{
        admin, sample,
        requests::{AdminSearch, CreateProductRequest, ImageUpload},
        response::{
            AdminBookingsResponse, AdminProductsResponse, AdminProfileResponse,
            AdminUsersResponse, ApiResponse, ProductResponse,
        },
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use shared::{
    abstract_trait::{DynMediaUpload, DynProductTable},
    errors::ServiceError,
    model::AuthUser,
    utils::{Method, Metrics, OperationTracer},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

pub const DEFAULT_ADMIN_NAME: &str = "Admin";

#[derive(Clone)]
pub struct AdminService {
    products: DynProductTable,
    media: DynMediaUpload,
    tracer: OperationTracer,
}

impl AdminService {
    pub fn new(
        products: DynProductTable,
        media: DynMediaUpload,
        metrics: Arc<Mutex<Metrics>>,
    ) -> Self {
        let tracer = OperationTracer::new("admin_service", "admin-service", metrics);

        Self {
            products,
            media,
            tracer,
        }
    }
}

#[async_trait]
impl AdminServiceTrait for AdminService {
    async fn products(
        &self,
        req: &AdminSearch,
    ) -> Result<ApiResponse<AdminProductsResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "AdminListProducts",
            vec![
                KeyValue::new("component", "admin"),
                KeyValue::new("operation", "products"),
                KeyValue::new("search", req.search.clone()),
            ],
        );

        let rows = match self.products.select_all().await {
            Ok(rows) => rows,
            Err(err) => {
                error!("Failed to load inventory: {err}");
                self.tracer
                    .error(&tracing_ctx, method, &err.to_string())
                    .await;
                return Err(err.into());
            }
        };

        let overview = admin::inventory(rows, &req.search);

        self.tracer
            .success(&tracing_ctx, method, "Inventory fetched")
            .await;

        Ok(ApiResponse::success("Products fetched successfully", overview))
    }

    fn users(&self, req: &AdminSearch) -> ApiResponse<AdminUsersResponse> {
        ApiResponse::success(
            "Users fetched successfully",
            admin::users_overview(sample::admin_users(), &req.search),
        )
    }

    fn bookings(&self, req: &AdminSearch) -> ApiResponse<AdminBookingsResponse> {
        ApiResponse::success(
            "Bookings fetched successfully",
            admin::bookings_overview(sample::admin_bookings(), &req.search),
        )
    }

    async fn create_product(
        &self,
        req: CreateProductRequest,
        image: ImageUpload,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("Adding product {} ({} bytes image)", req.name, image.bytes.len());

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "AdminCreateProduct",
            vec![
                KeyValue::new("component", "admin"),
                KeyValue::new("operation", "create_product"),
                KeyValue::new("product.name", req.name.clone()),
                KeyValue::new("image.name", image.file_name.clone()),
            ],
        );

        let image_url = match self
            .media
            .upload_image(&image.file_name, image.content_type.as_deref(), image.bytes)
            .await
        {
            Ok(url) => url,
            Err(err) => {
                error!("Image upload failed: {err}");
                self.tracer
                    .error(&tracing_ctx, method, &err.to_string())
                    .await;
                return Err(err.into());
            }
        };

        let row = match self.products.insert(&req.into_row(image_url)).await {
            Ok(row) => row,
            Err(err) => {
                error!("Product insert failed: {err}");
                self.tracer
                    .error(&tracing_ctx, method, &err.to_string())
                    .await;
                return Err(err.into());
            }
        };

        self.tracer
            .success(&tracing_ctx, method, "Product added")
            .await;

        Ok(ApiResponse::success(
            "Product added successfully!",
            ProductResponse::from(row),
        ))
    }

    fn profile(&self, user: &AuthUser) -> ApiResponse<AdminProfileResponse> {
        let name = user
            .user_metadata
            .name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADMIN_NAME.to_string());

        ApiResponse::success(
            "Profile fetched successfully",
            AdminProfileResponse {
                id: user.id.clone(),
                name,
                email: user.email.clone(),
            },
        )
    }
}
