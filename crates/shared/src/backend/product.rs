use crate::{
    abstract_trait::ProductTableTrait,
    backend::BackendClient,
    errors::BackendError,
    model::{NewProductRow, ProductRow},
};
use async_trait::async_trait;
use reqwest::Method;
use tracing::info;

const PRODUCTS_PATH: &str = "/rest/v1/products";

#[derive(Debug, Clone)]
pub struct SupabaseProductTable {
    client: BackendClient,
}

impl SupabaseProductTable {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductTableTrait for SupabaseProductTable {
    async fn select_all(&self) -> Result<Vec<ProductRow>, BackendError> {
        let response = self
            .client
            .anon_request(Method::GET, PRODUCTS_PATH)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;

        let rows: Vec<ProductRow> = BackendClient::read_json(response).await?;
        info!("Fetched {} product rows", rows.len());

        Ok(rows)
    }

    async fn select_by_id(&self, id: &str) -> Result<Option<ProductRow>, BackendError> {
        let filter = format!("eq.{id}");

        let response = self
            .client
            .anon_request(Method::GET, PRODUCTS_PATH)
            .query(&[("select", "*"), ("id", filter.as_str())])
            .send()
            .await?;

        let rows: Vec<ProductRow> = BackendClient::read_json(response).await?;

        Ok(rows.into_iter().next())
    }

    async fn insert(&self, row: &NewProductRow) -> Result<ProductRow, BackendError> {
        info!("Inserting product {}", row.name);

        let response = self
            .client
            .anon_request(Method::POST, PRODUCTS_PATH)
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await?;

        let rows: Vec<ProductRow> = BackendClient::read_json(response).await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| BackendError::Decode("insert returned no rows".into()))
    }
}
