use crate::domain::{
    requests::{AdminSearch, CreateProductRequest, ImageUpload},
    response::{
        AdminBookingsResponse, AdminProductsResponse, AdminProfileResponse, AdminUsersResponse,
        ApiResponse, ProductResponse,
    },
};
use async_trait::async_trait;
use shared::{errors::ServiceError, model::AuthUser};
use std::sync::Arc;

pub type DynAdminService = Arc<dyn AdminServiceTrait + Send + Sync>;

#[async_trait]
pub trait AdminServiceTrait {
    async fn products(
        &self,
        req: &AdminSearch,
    ) -> Result<ApiResponse<AdminProductsResponse>, ServiceError>;
    fn users(&self, req: &AdminSearch) -> ApiResponse<AdminUsersResponse>;
    fn bookings(&self, req: &AdminSearch) -> ApiResponse<AdminBookingsResponse>;
    async fn create_product(
        &self,
        req: CreateProductRequest,
        image: ImageUpload,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    fn profile(&self, user: &AuthUser) -> ApiResponse<AdminProfileResponse>;
}
