use crate::{
    errors::BackendError,
    model::{AuthSession, AuthUser, UserMetadata},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAuthBackend = Arc<dyn AuthBackendTrait + Send + Sync>;

#[async_trait]
pub trait AuthBackendTrait {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, BackendError>;
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &UserMetadata,
    ) -> Result<AuthUser, BackendError>;
    async fn get_user(&self, access_token: &str) -> Result<AuthUser, BackendError>;
}
