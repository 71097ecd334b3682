//! Daily Memo REST server.
//!
//! Layered as domain → usecase → infrastructure / ui. The HTTP DTOs in
//! [`infrastructure::dto::http`] are also used by the CLI client.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run as run_server;
