use crate::domain::view::View;
use serde::{Deserialize, Serialize};
use shared::model::AuthUser;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: String,
}

impl From<AuthUser> for UserResponse {
    fn from(value: AuthUser) -> Self {
        let role = if value.is_admin() { "admin" } else { "user" };

        Self {
            id: value.id,
            email: value.email,
            name: value.user_metadata.name,
            phone: value.user_metadata.phone,
            role: role.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
    pub user: UserResponse,
    pub view: View,
}
