use crate::domain::catalog::ALL_CATEGORIES;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct FindProducts {
    #[serde(default)]
    pub search: String,

    #[serde(default = "default_category")]
    pub category: String,

    /// `name`, `price-low`, `price-high` or `rating`
    #[serde(default = "default_sort")]
    pub sort: String,
}

impl Default for FindProducts {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: default_category(),
            sort: default_sort(),
        }
    }
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

fn default_sort() -> String {
    "name".to_string()
}
