use crate::domain::{
    requests::FindProducts,
    response::{ApiResponse, CatalogResponse, CategoryResponse, ProductResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCatalogService = Arc<dyn CatalogServiceTrait + Send + Sync>;

#[async_trait]
pub trait CatalogServiceTrait {
    async fn find_all(
        &self,
        req: &FindProducts,
    ) -> Result<ApiResponse<CatalogResponse>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    fn categories(&self) -> ApiResponse<Vec<CategoryResponse>>;
}
