use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserBookingResponse {
    pub id: i32,
    pub service: String,
    pub status: String,
    pub date: String,
    pub can_cancel: bool,
    pub can_review: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserOrderResponse {
    pub id: i32,
    pub item: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FeaturedServiceResponse {
    pub name: String,
    pub price: String,
    pub duration: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FeatureResponse {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TestimonialResponse {
    pub name: String,
    pub rating: u8,
    pub comment: String,
    pub service: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomeResponse {
    pub services: Vec<FeaturedServiceResponse>,
    pub features: Vec<FeatureResponse>,
    pub testimonials: Vec<TestimonialResponse>,
}
