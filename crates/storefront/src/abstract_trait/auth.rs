use crate::domain::{
    requests::{LoginRequest, RegisterRequest},
    response::{ApiResponse, LoginResponse, UserResponse},
};
use async_trait::async_trait;
use shared::{errors::ServiceError, model::AuthUser};
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<LoginResponse>, ServiceError>;
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn resolve_user(&self, access_token: &str) -> Result<AuthUser, ServiceError>;
}
