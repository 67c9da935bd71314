use crate::{
    abstract_trait::dashboard::DashboardServiceTrait,
    domain::{
        response::{ApiResponse, HomeResponse, UserBookingResponse, UserOrderResponse},
        sample,
    },
};

#[derive(Clone, Default)]
pub struct DashboardService;

impl DashboardServiceTrait for DashboardService {
    fn home(&self) -> ApiResponse<HomeResponse> {
        ApiResponse::success(
            "Home fetched successfully",
            HomeResponse {
                services: sample::featured_services(),
                features: sample::features(),
                testimonials: sample::testimonials(),
            },
        )
    }

    fn my_bookings(&self) -> ApiResponse<Vec<UserBookingResponse>> {
        ApiResponse::success("Bookings fetched successfully", sample::user_bookings())
    }

    fn my_orders(&self) -> ApiResponse<Vec<UserOrderResponse>> {
        ApiResponse::success("Orders fetched successfully", sample::user_orders())
    }
}
