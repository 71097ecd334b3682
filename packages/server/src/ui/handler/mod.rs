//! Handler modules for the HTTP endpoints.

pub mod auth;
pub mod comment;
pub mod health;
pub mod memo;
pub mod place;
pub mod profile;
pub mod room;

pub use health::health_check;
