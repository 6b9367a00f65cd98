//! Page components

pub mod auth;
pub mod chat;
pub mod insights;
pub mod landing;
pub mod studio;
