pub mod admin;
pub mod auth;
pub mod booking;
pub mod cart;
pub mod catalog;
pub mod dashboard;
