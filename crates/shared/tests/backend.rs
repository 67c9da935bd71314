use axum::{
    Json, Router,
    extract::{Multipart, Query},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use shared::{
    abstract_trait::{AuthBackendTrait, MediaUploadTrait, ProductTableTrait},
    backend::{BackendClient, MediaUploader, SupabaseAuth, SupabaseProductTable},
    config::{BackendConfig, HttpClientFactory, MediaConfig},
    errors::BackendError,
    model::{NewProductRow, UserMetadata},
};
use std::{collections::HashMap, time::Duration};
use tokio::net::TcpListener;

const ANON_KEY: &str = "anon-key";

fn has_key(headers: &HeaderMap) -> bool {
    headers.get("apikey").and_then(|v| v.to_str().ok()) == Some(ANON_KEY)
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn user_json(email: &str, role: &str) -> Value {
    json!({
        "id": "5f0c",
        "email": email,
        "user_metadata": { "name": "Chidi", "role": role },
        "created_at": "2025-06-01T10:00:00Z"
    })
}

async fn token(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if !has_key(&headers) || params.get("grant_type").map(String::as_str) != Some("password") {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "No API key found" })));
    }

    if body["password"] != "secret123" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_grant", "error_description": "Invalid login credentials" })),
        );
    }

    let email = body["email"].as_str().unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!({
            "access_token": "jwt-abc",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r1",
            "user": user_json(email, "admin")
        })),
    )
}

async fn signup(Json(body): Json<Value>) -> impl IntoResponse {
    if body["email"] == "taken@autocare.ng" {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "code": 422, "msg": "User already registered" })),
        );
    }

    let mut user = user_json(body["email"].as_str().unwrap_or_default(), "user");
    user["user_metadata"] = body["data"].clone();
    (StatusCode::OK, Json(user))
}

async fn current_user(headers: HeaderMap) -> impl IntoResponse {
    match bearer(&headers).as_deref() {
        Some("jwt-abc") if has_key(&headers) => {
            (StatusCode::OK, Json(user_json("admin@autocare.ng", "admin")))
        }
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "code": 401, "msg": "invalid JWT" })),
        ),
    }
}

async fn list_products(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let rows = vec![
        json!({ "id": 2, "name": "Brake Pads", "price": 12000, "stock": 8 }),
        json!({ "id": 1, "name": "Engine Oil", "price": 15000, "originalPrice": 20000, "stock": true }),
    ];

    let rows: Vec<Value> = match params.get("id") {
        Some(filter) => rows
            .into_iter()
            .filter(|row| format!("eq.{}", row["id"]) == *filter)
            .collect(),
        None => {
            assert_eq!(params.get("order").map(String::as_str), Some("created_at.desc"));
            rows
        }
    };

    Json(rows)
}

async fn insert_product(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    if headers.get("prefer").and_then(|v| v.to_str().ok()) != Some("return=representation") {
        return (StatusCode::CREATED, Json(json!([])));
    }

    let mut row = body[0].clone();
    row["id"] = json!(77);
    (StatusCode::CREATED, Json(json!([row])))
}

async fn upload(mut multipart: Multipart) -> impl IntoResponse {
    let mut preset = None;
    let mut file = None;

    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("upload_preset") => preset = Some(field.text().await.unwrap()),
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await.unwrap();
                file = Some((file_name, bytes.len()));
            }
            _ => {}
        }
    }

    match (preset.as_deref(), file) {
        (Some("storefront"), Some((Some(name), len))) if len > 0 => (
            StatusCode::OK,
            Json(json!({ "secure_url": format!("https://cdn.test/{name}") })),
        ),
        (Some("legacy"), Some(_)) => (
            StatusCode::OK,
            Json(json!({ "url": "http://cdn.test/legacy.png" })),
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "message": "Upload preset not found" } })),
        ),
    }
}

async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/auth/v1/token", post(token))
        .route("/auth/v1/signup", post(signup))
        .route("/auth/v1/user", get(current_user))
        .route("/rest/v1/products", get(list_products).post(insert_product))
        .route("/upload", post(upload));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn client(base_url: &str) -> BackendClient {
    let config = BackendConfig::new(format!("{base_url}/"), ANON_KEY, Duration::from_secs(5));
    let http = HttpClientFactory::build(config.timeout).unwrap();
    BackendClient::new(http, &config)
}

#[tokio::test]
async fn sign_in_returns_session() {
    let base = spawn_stub().await;
    let auth = SupabaseAuth::new(client(&base).await);

    let session = auth.sign_in("admin@autocare.ng", "secret123").await.unwrap();

    assert_eq!(session.access_token, "jwt-abc");
    assert!(session.user.is_admin());
}

#[tokio::test]
async fn sign_in_failure_keeps_backend_message() {
    let base = spawn_stub().await;
    let auth = SupabaseAuth::new(client(&base).await);

    let err = auth.sign_in("admin@autocare.ng", "wrong").await.unwrap_err();

    match err {
        BackendError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid login credentials");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn sign_up_sends_metadata() {
    let base = spawn_stub().await;
    let auth = SupabaseAuth::new(client(&base).await);
    let metadata = UserMetadata {
        name: Some("Ada".into()),
        phone: Some("0803".into()),
        role: Some("user".into()),
    };

    let user = auth
        .sign_up("ada@autocare.ng", "secret123", &metadata)
        .await
        .unwrap();

    assert_eq!(user.user_metadata, metadata);
    assert!(!user.is_admin());

    let err = auth
        .sign_up("taken@autocare.ng", "secret123", &metadata)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "User already registered");
}

#[tokio::test]
async fn get_user_uses_access_token() {
    let base = spawn_stub().await;
    let auth = SupabaseAuth::new(client(&base).await);

    let user = auth.get_user("jwt-abc").await.unwrap();
    assert_eq!(user.email.as_deref(), Some("admin@autocare.ng"));

    assert!(auth.get_user("expired").await.is_err());
}

#[tokio::test]
async fn product_table_selects_and_inserts() {
    let base = spawn_stub().await;
    let table = SupabaseProductTable::new(client(&base).await);

    let rows = table.select_all().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name.as_deref(), Some("Brake Pads"));
    assert_eq!(rows[1].original_price, Some(20000.0));
    assert!(rows[1].has_stock());

    let one = table.select_by_id("1").await.unwrap().unwrap();
    assert_eq!(one.id_string(), "1");
    assert!(table.select_by_id("9").await.unwrap().is_none());

    let inserted = table
        .insert(&NewProductRow {
            name: "Wiper Blades".into(),
            category: "maintenance".into(),
            brand: "Bosch".into(),
            price: 6500.0,
            original_price: None,
            stock: 12,
            description: None,
            sku: Some("WB-22".into()),
            supplier: None,
            image: "https://cdn.test/wiper.png".into(),
        })
        .await
        .unwrap();
    assert_eq!(inserted.id_string(), "77");
    assert_eq!(inserted.stock_count(), 12);
}

#[tokio::test]
async fn media_upload_prefers_secure_url() {
    let base = spawn_stub().await;
    let http = HttpClientFactory::build(Duration::from_secs(5)).unwrap();

    let uploader = MediaUploader::new(
        http.clone(),
        MediaConfig::new(format!("{base}/upload"), "storefront"),
    );
    let url = uploader
        .upload_image("oil.png", Some("image/png"), vec![1, 2, 3])
        .await
        .unwrap();
    assert_eq!(url, "https://cdn.test/oil.png");

    let legacy = MediaUploader::new(
        http.clone(),
        MediaConfig::new(format!("{base}/upload"), "legacy"),
    );
    assert_eq!(
        legacy.upload_image("x.png", None, vec![9]).await.unwrap(),
        "http://cdn.test/legacy.png"
    );

    let wrong = MediaUploader::new(http, MediaConfig::new(format!("{base}/upload"), "nope"));
    let err = wrong.upload_image("x.png", None, vec![9]).await.unwrap_err();
    assert_eq!(err.to_string(), "Upload preset not found");
}
