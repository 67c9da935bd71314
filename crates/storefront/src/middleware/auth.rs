use crate::abstract_trait::auth::DynAuthService;
use axum::{
    Extension,
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{errors::HttpError, model::AuthUser};

pub const TOKEN_COOKIE: &str = "token";

/// Reads the access token from `Authorization: Bearer`, falling back to the
/// `token` cookie.
pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(auth): Extension<DynAuthService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        .or_else(|| {
            cookie_jar
                .get(TOKEN_COOKIE)
                .map(|cookie| cookie.value().to_string())
        })
        .ok_or_else(|| {
            HttpError::Unauthorized("You are not logged in, please provide token".to_string())
        })?;

    let user = auth.resolve_user(&token).await?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Must run after `auth_middleware`.
pub async fn admin_middleware(
    Extension(user): Extension<AuthUser>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    if !user.is_admin() {
        return Err(HttpError::Forbidden(
            "Access denied. Required role: admin".to_string(),
        ));
    }

    Ok(next.run(req).await)
}
