use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A row of the `products` table as the backend returns it. Every column
/// except `id` may be missing or null.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductRow {
    pub id: Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, rename = "originalPrice", alias = "original_price")]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<Value>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub stock: Option<Value>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ProductRow {
    pub fn id_string(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    /// Stock column truthiness: numbers count when non-zero, strings when
    /// non-empty, booleans as-is.
    pub fn has_stock(&self) -> bool {
        match &self.stock {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
            Some(Value::Null) | None => false,
        }
    }

    pub fn stock_count(&self) -> i64 {
        match &self.stock {
            Some(Value::Bool(true)) => 1,
            other => whole_number(other.as_ref()),
        }
    }

    pub fn review_count(&self) -> i64 {
        whole_number(self.reviews.as_ref()).max(0)
    }
}

/// Numbers truncate and numeric strings parse; anything else counts as zero.
fn whole_number(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n.as_i64().unwrap_or_else(|| n.as_f64().unwrap_or(0.0) as i64),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductRow {
    pub name: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    #[serde(rename = "originalPrice", skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    pub image: String,
}
