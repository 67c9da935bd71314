use crate::domain::response::{CategoryResponse, ProductResponse};
use std::cmp::Ordering;

pub const ALL_CATEGORIES: &str = "all";

pub const CATEGORIES: [(&str, &str); 9] = [
    ("all", "All Categories"),
    ("oils", "Oils & Fluids"),
    ("engine", "Engine Parts"),
    ("tires", "Tires"),
    ("brakes", "Brake System"),
    ("electrical", "Electrical"),
    ("filters", "Filters"),
    ("maintenance", "Maintenance"),
    ("other", "Other"),
];

pub fn categories() -> Vec<CategoryResponse> {
    CATEGORIES
        .iter()
        .map(|(value, label)| CategoryResponse {
            value: value.to_string(),
            label: label.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortBy {
    /// Unrecognised values fall back to name ordering.
    pub fn parse(value: &str) -> Self {
        match value {
            "price-low" => SortBy::PriceLow,
            "price-high" => SortBy::PriceHigh,
            "rating" => SortBy::Rating,
            _ => SortBy::Name,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Name => "name",
            SortBy::PriceLow => "price-low",
            SortBy::PriceHigh => "price-high",
            SortBy::Rating => "rating",
        }
    }
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn matches(product: &ProductResponse, search: &str, category: &str) -> bool {
    let matches_search =
        contains_ignore_case(&product.name, search) || contains_ignore_case(&product.brand, search);

    let matches_category = category == ALL_CATEGORIES || product.category == category;

    matches_search && matches_category
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn sort_products(products: &mut [ProductResponse], sort: SortBy) {
    match sort {
        SortBy::PriceLow => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::PriceHigh => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::Name => products.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }
}

/// Filter then sort, leaving the input order as the tiebreaker.
pub fn browse(
    products: Vec<ProductResponse>,
    search: &str,
    category: &str,
    sort: SortBy,
) -> Vec<ProductResponse> {
    let mut found: Vec<ProductResponse> = products
        .into_iter()
        .filter(|product| matches(product, search, category))
        .collect();

    sort_products(&mut found, sort);
    found
}
