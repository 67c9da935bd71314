use serde::{Deserialize, Serialize};
use shared::model::AuthUser;
use utoipa::ToSchema;

/// Top-level screen a client should land on after signing in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Home,
    Admin,
}

impl View {
    pub fn for_user(user: &AuthUser) -> Self {
        if user.is_admin() {
            View::Admin
        } else {
            View::Home
        }
    }
}
