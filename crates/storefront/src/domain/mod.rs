pub mod admin;
pub mod booking;
pub mod cart;
pub mod catalog;
pub mod requests;
pub mod response;
pub mod sample;
pub mod view;
