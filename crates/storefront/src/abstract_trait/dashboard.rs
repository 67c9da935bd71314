use crate::domain::response::{
    ApiResponse, HomeResponse, UserBookingResponse, UserOrderResponse,
};
use std::sync::Arc;

pub type DynDashboardService = Arc<dyn DashboardServiceTrait + Send + Sync>;

pub trait DashboardServiceTrait {
    fn home(&self) -> ApiResponse<HomeResponse>;
    fn my_bookings(&self) -> ApiResponse<Vec<UserBookingResponse>>;
    fn my_orders(&self) -> ApiResponse<Vec<UserOrderResponse>>;
}
