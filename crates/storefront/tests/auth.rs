mod common;

use common::{ADMIN_EMAIL, PASSWORD, USER_EMAIL, spawn_app, token_for};
use serde_json::{Value, json};

#[tokio::test]
async fn admin_login_routes_to_admin_view_and_sets_cookie() {
    let app = spawn_app().await;

    let res = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&json!({ "email": ADMIN_EMAIL, "password": PASSWORD }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let cookie = res
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.starts_with(&format!("token={}", token_for(ADMIN_EMAIL))));

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["view"], "admin");
    assert_eq!(body["data"]["user"]["role"], "admin");
}

#[tokio::test]
async fn regular_login_routes_home() {
    let app = spawn_app().await;

    let body: Value = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&json!({ "email": USER_EMAIL, "password": PASSWORD }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["data"]["view"], "home");
}

#[tokio::test]
async fn wrong_password_reports_backend_message() {
    let app = spawn_app().await;

    let res = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&json!({ "email": USER_EMAIL, "password": "nope" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 401);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Login failed: Invalid login credentials");
}

#[tokio::test]
async fn invalid_email_fails_validation() {
    let app = spawn_app().await;

    let res = app
        .client
        .post(app.url("/api/auth/login"))
        .json(&json!({ "email": "not-an-email", "password": PASSWORD }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "email: Invalid email format");
}

#[tokio::test]
async fn signup_requires_matching_passwords() {
    let app = spawn_app().await;

    let res = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&json!({
            "name": "Tunde",
            "phone": "08030000000",
            "email": "tunde@autocare.ng",
            "password": "secret123",
            "confirm_password": "secret124"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Passwords do not match");
    assert!(app.auth.account("tunde@autocare.ng").await.is_none());
}

#[tokio::test]
async fn signup_stores_user_metadata() {
    let app = spawn_app().await;

    let res = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&json!({
            "name": "Tunde",
            "phone": "08030000000",
            "email": "tunde@autocare.ng",
            "password": "secret123",
            "confirm_password": "secret123"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 201);

    let user = app.auth.account("tunde@autocare.ng").await.unwrap();
    assert_eq!(user.user_metadata.name.as_deref(), Some("Tunde"));
    assert_eq!(user.user_metadata.phone.as_deref(), Some("08030000000"));
    assert_eq!(user.user_metadata.role.as_deref(), Some("user"));
}

#[tokio::test]
async fn duplicate_signup_is_prefixed() {
    let app = spawn_app().await;

    let res = app
        .client
        .post(app.url("/api/auth/register"))
        .json(&json!({
            "name": "Ada",
            "phone": "0803",
            "email": USER_EMAIL,
            "password": PASSWORD,
            "confirm_password": PASSWORD
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Signup failed: User already registered");
}

#[tokio::test]
async fn me_accepts_bearer_or_cookie() {
    let app = spawn_app().await;

    let res = app
        .client
        .get(app.url("/api/auth/me"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 401);

    let body: Value = app
        .client
        .get(app.url("/api/auth/me"))
        .bearer_auth(token_for(USER_EMAIL))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["email"], USER_EMAIL);

    let body: Value = app
        .client
        .get(app.url("/api/auth/me"))
        .header("cookie", format!("token={}", token_for(ADMIN_EMAIL)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["role"], "admin");
}

#[tokio::test]
async fn bogus_token_is_rejected() {
    let app = spawn_app().await;

    let res = app
        .client
        .get(app.url("/api/auth/me"))
        .bearer_auth("garbage")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 401);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn bearer_header_wins_over_stale_cookie() {
    let app = spawn_app().await;

    let res = app
        .client
        .get(app.url("/api/auth/me"))
        .header("cookie", "token=expired-session")
        .bearer_auth(token_for(USER_EMAIL))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["email"], USER_EMAIL);
}
