use crate::{
    errors::BackendError,
    model::{NewProductRow, ProductRow},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductTable = Arc<dyn ProductTableTrait + Send + Sync>;

#[async_trait]
pub trait ProductTableTrait {
    /// All rows, newest first.
    async fn select_all(&self) -> Result<Vec<ProductRow>, BackendError>;
    async fn select_by_id(&self, id: &str) -> Result<Option<ProductRow>, BackendError>;
    async fn insert(&self, row: &NewProductRow) -> Result<ProductRow, BackendError>;
}
