use crate::{
    abstract_trait::AuthBackendTrait,
    backend::BackendClient,
    errors::BackendError,
    model::{AuthSession, AuthUser, UserMetadata},
};
use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, Clone)]
pub struct SupabaseAuth {
    client: BackendClient,
}

impl SupabaseAuth {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: &'a UserMetadata,
}

/// Sign-up answers with a bare user while email confirmation is pending and
/// with a full session otherwise.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(AuthSession),
    User(AuthUser),
}

#[async_trait]
impl AuthBackendTrait for SupabaseAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, BackendError> {
        info!("Signing in {email}");

        let response = self
            .client
            .anon_request(Method::POST, "/auth/v1/token?grant_type=password")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        BackendClient::read_json(response).await
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &UserMetadata,
    ) -> Result<AuthUser, BackendError> {
        info!("Signing up {email}");

        let response = self
            .client
            .anon_request(Method::POST, "/auth/v1/signup")
            .json(&SignUpBody {
                email,
                password,
                data: metadata,
            })
            .send()
            .await?;

        let user = match BackendClient::read_json::<SignUpResponse>(response).await? {
            SignUpResponse::Session(session) => session.user,
            SignUpResponse::User(user) => user,
        };

        Ok(user)
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser, BackendError> {
        let response = self
            .client
            .request(Method::GET, "/auth/v1/user")
            .bearer_auth(access_token)
            .send()
            .await?;

        BackendClient::read_json(response).await
    }
}
