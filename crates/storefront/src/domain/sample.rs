//! Fixed records behind the dashboards until bookings, users and orders
//! are stored in the backend.

use crate::domain::response::{
    AdminBookingResponse, AdminUserResponse, FeatureResponse, FeaturedServiceResponse,
    TestimonialResponse, UserBookingResponse, UserOrderResponse,
};

pub fn admin_users() -> Vec<AdminUserResponse> {
    [
        (1, "John Smith", "john@email.com", "+1234567890", "Active", "2024-01-15", 5),
        (2, "Sarah Johnson", "sarah@email.com", "+1234567891", "Active", "2024-02-10", 3),
        (3, "Mike Wilson", "mike@email.com", "+1234567892", "Inactive", "2024-01-20", 1),
        (4, "Emma Davis", "emma@email.com", "+1234567893", "Active", "2024-03-05", 8),
        (5, "David Brown", "david@email.com", "+1234567894", "Active", "2024-02-28", 2),
        (6, "Lisa Miller", "lisa@email.com", "+1234567895", "Blocked", "2024-01-10", 0),
    ]
    .into_iter()
    .map(
        |(id, name, email, phone, status, join_date, total_bookings)| AdminUserResponse {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            status: status.into(),
            join_date: join_date.into(),
            total_bookings,
        },
    )
    .collect()
}

pub fn admin_bookings() -> Vec<AdminBookingResponse> {
    [
        (1, "John Smith", "Oil Change", "2024-01-15", "10:00 AM", "Completed", "$89.99"),
        (2, "Sarah Johnson", "Brake Inspection", "2024-01-16", "2:00 PM", "Pending", "$149.99"),
        (3, "Mike Wilson", "Engine Diagnostic", "2024-01-17", "9:00 AM", "In Progress", "$199.99"),
        (4, "Emma Davis", "Tire Replacement", "2024-01-18", "11:00 AM", "Scheduled", "$359.99"),
        (5, "David Brown", "General Maintenance", "2024-01-19", "3:00 PM", "Completed", "$129.99"),
        (6, "Lisa Miller", "AC Repair", "2024-01-20", "1:00 PM", "Cancelled", "$249.99"),
    ]
    .into_iter()
    .map(
        |(id, customer_name, service, date, time, status, price)| AdminBookingResponse {
            id,
            customer_name: customer_name.into(),
            service: service.into(),
            date: date.into(),
            time: time.into(),
            status: status.into(),
            price: price.into(),
        },
    )
    .collect()
}

pub fn user_bookings() -> Vec<UserBookingResponse> {
    [
        (1, "Oil Change", "Pending", "2025-07-04"),
        (2, "Brake Service", "Approved", "2025-06-29"),
        (3, "Engine Diagnostic", "Completed", "2025-06-20"),
    ]
    .into_iter()
    .map(|(id, service, status, date)| UserBookingResponse {
        id,
        service: service.into(),
        status: status.into(),
        date: date.into(),
        can_cancel: status == "Pending",
        can_review: status == "Completed",
    })
    .collect()
}

pub fn user_orders() -> Vec<UserOrderResponse> {
    vec![
        UserOrderResponse {
            id: 1,
            item: "Brake Pads".into(),
            status: "Delivered".into(),
        },
        UserOrderResponse {
            id: 2,
            item: "Engine Oil".into(),
            status: "Processing".into(),
        },
    ]
}

pub fn featured_services() -> Vec<FeaturedServiceResponse> {
    [
        (
            "Oil Change",
            "From $49.99",
            "30 mins",
            "Complete oil and filter change with multi-point inspection",
        ),
        (
            "Brake Service",
            "From $199.99",
            "2 hours",
            "Brake pad replacement and brake system inspection",
        ),
        (
            "Engine Diagnostic",
            "From $129.99",
            "1 hour",
            "Comprehensive engine diagnostic and troubleshooting",
        ),
        (
            "Tire Service",
            "From $89.99",
            "45 mins",
            "Tire rotation, balancing, and pressure check",
        ),
    ]
    .into_iter()
    .map(|(name, price, duration, description)| FeaturedServiceResponse {
        name: name.into(),
        price: price.into(),
        duration: duration.into(),
        description: description.into(),
        image: "/placeholder.svg".into(),
    })
    .collect()
}

pub fn features() -> Vec<FeatureResponse> {
    [
        ("Quick Service", "Fast and efficient service to get you back on the road"),
        ("Expert Technicians", "Certified professionals with years of experience"),
        ("Quality Parts", "Only genuine and high-quality replacement parts"),
        ("24/7 Support", "Round-the-clock customer support for emergencies"),
    ]
    .into_iter()
    .map(|(title, description)| FeatureResponse {
        title: title.into(),
        description: description.into(),
    })
    .collect()
}

pub fn testimonials() -> Vec<TestimonialResponse> {
    [
        (
            "John Smith",
            5,
            "Excellent service! Quick and professional. Will definitely come back.",
            "Oil Change",
        ),
        (
            "Sarah Johnson",
            5,
            "Great experience. The staff was knowledgeable and friendly.",
            "Brake Service",
        ),
        (
            "Mike Wilson",
            4,
            "Good value for money. Service was completed on time.",
            "Engine Diagnostic",
        ),
    ]
    .into_iter()
    .map(|(name, rating, comment, service)| TestimonialResponse {
        name: name.into(),
        rating,
        comment: comment.into(),
        service: service.into(),
    })
    .collect()
}
