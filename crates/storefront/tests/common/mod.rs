#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use shared::{
    abstract_trait::{AuthBackendTrait, MediaUploadTrait, ProductTableTrait},
    errors::BackendError,
    model::{AuthSession, AuthUser, NewProductRow, ProductRow, UserMetadata},
};
use std::{collections::HashMap, sync::Arc};
use storefront::{cache::cart::CartStore, di::Backends, handler::AppRouter, state::AppState};
use tokio::{net::TcpListener, sync::Mutex};

pub const ADMIN_EMAIL: &str = "admin@autocare.ng";
pub const USER_EMAIL: &str = "ada@autocare.ng";
pub const PASSWORD: &str = "secret123";

#[derive(Default)]
pub struct MemoryAuth {
    accounts: Mutex<HashMap<String, (String, AuthUser)>>,
}

impl MemoryAuth {
    pub async fn with_account(self, email: &str, password: &str, metadata: UserMetadata) -> Self {
        let user = AuthUser {
            id: format!("user-{}", email.len()),
            email: Some(email.to_string()),
            user_metadata: metadata,
            created_at: None,
        };
        self.accounts
            .lock()
            .await
            .insert(email.to_string(), (password.to_string(), user));
        self
    }

    pub async fn account(&self, email: &str) -> Option<AuthUser> {
        self.accounts
            .lock()
            .await
            .get(email)
            .map(|(_, user)| user.clone())
    }
}

pub fn token_for(email: &str) -> String {
    format!("token:{email}")
}

fn rejected(status: u16, message: &str) -> BackendError {
    BackendError::Api {
        status,
        message: message.to_string(),
    }
}

#[async_trait]
impl AuthBackendTrait for MemoryAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, BackendError> {
        let accounts = self.accounts.lock().await;
        match accounts.get(email) {
            Some((stored, user)) if stored == password => Ok(AuthSession {
                access_token: token_for(email),
                refresh_token: Some("refresh".into()),
                expires_in: Some(3600),
                token_type: Some("bearer".into()),
                user: user.clone(),
            }),
            _ => Err(rejected(400, "Invalid login credentials")),
        }
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &UserMetadata,
    ) -> Result<AuthUser, BackendError> {
        let mut accounts = self.accounts.lock().await;
        if accounts.contains_key(email) {
            return Err(rejected(422, "User already registered"));
        }

        let user = AuthUser {
            id: format!("user-{}", accounts.len() + 1),
            email: Some(email.to_string()),
            user_metadata: metadata.clone(),
            created_at: None,
        };
        accounts.insert(email.to_string(), (password.to_string(), user.clone()));
        Ok(user)
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser, BackendError> {
        let email = access_token
            .strip_prefix("token:")
            .ok_or_else(|| rejected(401, "invalid JWT"))?;

        self.account(email)
            .await
            .ok_or_else(|| rejected(401, "invalid JWT"))
    }
}

#[derive(Default)]
pub struct MemoryProducts {
    rows: Mutex<Vec<ProductRow>>,
    pub fail: bool,
}

impl MemoryProducts {
    pub fn with_rows(rows: Vec<Value>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| serde_json::from_value(row).expect("valid product row"))
            .collect();

        Self {
            rows: Mutex::new(rows),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub async fn rows(&self) -> Vec<ProductRow> {
        self.rows.lock().await.clone()
    }
}

#[async_trait]
impl ProductTableTrait for MemoryProducts {
    async fn select_all(&self) -> Result<Vec<ProductRow>, BackendError> {
        if self.fail {
            return Err(rejected(500, "database is down"));
        }
        Ok(self.rows.lock().await.clone())
    }

    async fn select_by_id(&self, id: &str) -> Result<Option<ProductRow>, BackendError> {
        Ok(self
            .rows
            .lock()
            .await
            .iter()
            .find(|row| row.id_string() == id)
            .cloned())
    }

    async fn insert(&self, row: &NewProductRow) -> Result<ProductRow, BackendError> {
        let mut rows = self.rows.lock().await;
        let mut stored: ProductRow =
            serde_json::from_value(serde_json::to_value(row).map_err(|e| BackendError::Decode(e.to_string()))?)
                .map_err(|e| BackendError::Decode(e.to_string()))?;
        stored.id = json!(rows.len() + 100);
        rows.insert(0, stored.clone());
        Ok(stored)
    }
}

#[derive(Default)]
pub struct MemoryMedia {
    pub uploads: Mutex<Vec<(String, usize)>>,
}

#[async_trait]
impl MediaUploadTrait for MemoryMedia {
    async fn upload_image(
        &self,
        file_name: &str,
        _content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<String, BackendError> {
        self.uploads
            .lock()
            .await
            .push((file_name.to_string(), bytes.len()));
        Ok(format!("https://media.test/{file_name}"))
    }
}

pub fn sample_rows() -> Vec<Value> {
    vec![
        json!({"id": 1, "name": "Engine Oil 5W-30", "price": 15000, "originalPrice": 20000,
               "rating": 4.8, "reviews": 120, "category": "Oils", "brand": "Mobil",
               "stock": 25, "image": "https://img.test/oil.png"}),
        json!({"id": 2, "name": "Brake Pads", "price": 12000, "rating": 4.5,
               "category": "brakes", "brand": "Bosch", "stock": 8}),
        json!({"id": 3, "name": "Air Filter", "price": 4500, "category": "filters",
               "brand": "Mann", "stock": 0}),
        json!({"id": 4, "name": "Car Battery", "price": 65000, "rating": 4.1,
               "category": "electrical", "brand": "Exide", "stock": 5}),
    ]
}

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub auth: Arc<MemoryAuth>,
    pub products: Arc<MemoryProducts>,
    pub media: Arc<MemoryMedia>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

pub async fn default_auth() -> MemoryAuth {
    MemoryAuth::default()
        .with_account(
            ADMIN_EMAIL,
            PASSWORD,
            UserMetadata {
                name: Some("Chidi".into()),
                phone: None,
                role: Some("admin".into()),
            },
        )
        .await
        .with_account(
            USER_EMAIL,
            PASSWORD,
            UserMetadata {
                name: Some("Ada".into()),
                phone: Some("08031234567".into()),
                role: Some("user".into()),
            },
        )
        .await
}

pub async fn spawn_app() -> TestApp {
    spawn_with(MemoryProducts::with_rows(sample_rows())).await
}

pub async fn spawn_with(products: MemoryProducts) -> TestApp {
    let auth = Arc::new(default_auth().await);
    let products = Arc::new(products);
    let media = Arc::new(MemoryMedia::default());

    let backends = Backends {
        auth: auth.clone(),
        products: products.clone(),
        media: media.clone(),
        carts: Arc::new(CartStore::new()),
    };

    let state = AppState::with_backends(backends).await;
    let app = AppRouter::build(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    TestApp {
        base_url: format!("http://{addr}"),
        client: reqwest::Client::new(),
        auth,
        products,
        media,
    }
}
