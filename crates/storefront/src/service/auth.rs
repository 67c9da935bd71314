use crate::{
    abstract_trait::auth::AuthServiceTrait,
    domain::{
        requests::{LoginRequest, RegisterRequest},
        response::{ApiResponse, LoginResponse, UserResponse},
        view::View,
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use shared::{
    abstract_trait::DynAuthBackend,
    errors::{BackendError, ServiceError},
    model::{AuthUser, UserMetadata},
    utils::{Method, Metrics, OperationTracer},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

pub const USER_ROLE: &str = "user";

#[derive(Clone)]
pub struct AuthService {
    backend: DynAuthBackend,
    tracer: OperationTracer,
}

impl AuthService {
    pub fn new(backend: DynAuthBackend, metrics: Arc<Mutex<Metrics>>) -> Self {
        let tracer = OperationTracer::new("auth_service", "auth-service", metrics);

        Self { backend, tracer }
    }
}

/// Backend rejections keep their message; transport failures pass through
/// untouched.
fn prefixed(err: BackendError, prefix: &str, wrap: fn(String) -> ServiceError) -> ServiceError {
    match err {
        BackendError::Api { message, .. } => wrap(format!("{prefix}: {message}")),
        other => ServiceError::Backend(other),
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<LoginResponse>, ServiceError> {
        info!("Login attempt for {}", req.email);

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "Login",
            vec![
                KeyValue::new("component", "auth"),
                KeyValue::new("operation", "login"),
                KeyValue::new("user.email", req.email.clone()),
            ],
        );

        let session = match self.backend.sign_in(&req.email, &req.password).await {
            Ok(session) => session,
            Err(err) => {
                error!("Login failed for {}: {err}", req.email);
                self.tracer
                    .error(&tracing_ctx, method, &err.to_string())
                    .await;
                return Err(prefixed(err, "Login failed", ServiceError::Unauthorized));
            }
        };

        let view = View::for_user(&session.user);

        self.tracer
            .success(&tracing_ctx, method, "Login successful")
            .await;

        Ok(ApiResponse::success(
            "Login successful",
            LoginResponse {
                access_token: session.access_token,
                refresh_token: session.refresh_token,
                expires_in: session.expires_in,
                user: session.user.into(),
                view,
            },
        ))
    }

    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("Registering {}", req.email);

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "Register",
            vec![
                KeyValue::new("component", "auth"),
                KeyValue::new("operation", "register"),
                KeyValue::new("user.email", req.email.clone()),
            ],
        );

        if req.password != req.confirm_password {
            self.tracer
                .error(&tracing_ctx, method, "Passwords do not match")
                .await;
            return Err(ServiceError::Validation("Passwords do not match".into()));
        }

        let metadata = UserMetadata {
            name: Some(req.name.clone()),
            phone: Some(req.phone.clone()),
            role: Some(USER_ROLE.to_string()),
        };

        let user = match self
            .backend
            .sign_up(&req.email, &req.password, &metadata)
            .await
        {
            Ok(user) => user,
            Err(err) => {
                error!("Signup failed for {}: {err}", req.email);
                self.tracer
                    .error(&tracing_ctx, method, &err.to_string())
                    .await;
                return Err(prefixed(err, "Signup failed", ServiceError::Validation));
            }
        };

        self.tracer
            .success(&tracing_ctx, method, "Signup successful")
            .await;

        Ok(ApiResponse::success(
            "Signup successful! Please check your email to confirm.",
            user.into(),
        ))
    }

    async fn resolve_user(&self, access_token: &str) -> Result<AuthUser, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "ResolveUser",
            vec![
                KeyValue::new("component", "auth"),
                KeyValue::new("operation", "resolve_user"),
            ],
        );

        match self.backend.get_user(access_token).await {
            Ok(user) => {
                self.tracer
                    .success(&tracing_ctx, method, "Token resolved")
                    .await;
                Ok(user)
            }
            Err(err) => {
                self.tracer
                    .error(&tracing_ctx, method, &err.to_string())
                    .await;
                Err(match err {
                    BackendError::Api { .. } | BackendError::NotFound => {
                        ServiceError::Unauthorized("Invalid token".into())
                    }
                    other => ServiceError::Backend(other),
                })
            }
        }
    }
}
