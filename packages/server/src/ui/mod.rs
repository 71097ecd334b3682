//! UI 層
//!
//! axum による HTTP インターフェース。リクエストを UseCase 層に渡し、結果を DTO に変換して返します。

mod error;
mod extractor;
mod handler;
mod router;
mod runner;
mod signal;
pub mod state;

pub use error::ApiError;
pub use router::create_router;
pub use runner::{run, serve};
pub use state::AppState;
