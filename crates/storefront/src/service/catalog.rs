use crate::{
    abstract_trait::catalog::CatalogServiceTrait,
    domain::{
        catalog::{self, SortBy},
        requests::FindProducts,
        response::{ApiResponse, CatalogResponse, CategoryResponse, ProductResponse},
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use shared::{
    abstract_trait::DynProductTable,
    errors::ServiceError,
    utils::{Method, Metrics, OperationTracer},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

#[derive(Clone)]
pub struct CatalogService {
    products: DynProductTable,
    tracer: OperationTracer,
}

impl CatalogService {
    pub fn new(products: DynProductTable, metrics: Arc<Mutex<Metrics>>) -> Self {
        let tracer = OperationTracer::new("catalog_service", "catalog-service", metrics);

        Self { products, tracer }
    }
}

#[async_trait]
impl CatalogServiceTrait for CatalogService {
    async fn find_all(
        &self,
        req: &FindProducts,
    ) -> Result<ApiResponse<CatalogResponse>, ServiceError> {
        info!(
            "Browsing products (search: {}, category: {}, sort: {})",
            req.search, req.category, req.sort
        );

        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "FindAllProducts",
            vec![
                KeyValue::new("component", "catalog"),
                KeyValue::new("operation", "find_all"),
                KeyValue::new("search", req.search.clone()),
                KeyValue::new("category", req.category.clone()),
                KeyValue::new("sort", req.sort.clone()),
            ],
        );

        let rows = match self.products.select_all().await {
            Ok(rows) => rows,
            Err(err) => {
                error!("Failed to fetch products: {err}");
                self.tracer
                    .error(&tracing_ctx, method, &err.to_string())
                    .await;
                return Err(err.into());
            }
        };

        let sort = SortBy::parse(&req.sort);
        let products = catalog::browse(
            rows.into_iter().map(ProductResponse::from).collect(),
            &req.search,
            &req.category,
            sort,
        );
        let total_found = products.len();

        self.tracer
            .success(&tracing_ctx, method, "Successfully fetched products")
            .await;

        info!("Found {total_found} products");

        Ok(ApiResponse::success(
            format!("{total_found} products found"),
            CatalogResponse {
                products,
                total_found,
                search: req.search.clone(),
                category: req.category.clone(),
                sort: sort.as_str().to_string(),
            },
        ))
    }

    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("Fetching product {id}");

        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "FindProductById",
            vec![
                KeyValue::new("component", "catalog"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        let row = match self.products.select_by_id(id).await {
            Ok(Some(row)) => row,
            Ok(None) => {
                self.tracer
                    .error(&tracing_ctx, method, "Product not found")
                    .await;
                return Err(ServiceError::NotFound(format!("Product {id} not found")));
            }
            Err(err) => {
                error!("Failed to fetch product {id}: {err}");
                self.tracer
                    .error(&tracing_ctx, method, &err.to_string())
                    .await;
                return Err(err.into());
            }
        };

        self.tracer
            .success(&tracing_ctx, method, "Successfully fetched product")
            .await;

        Ok(ApiResponse::success(
            "Product fetched successfully",
            ProductResponse::from(row),
        ))
    }

    fn categories(&self) -> ApiResponse<Vec<CategoryResponse>> {
        ApiResponse::success("Categories fetched successfully", catalog::categories())
    }
}
