//! Infrastructure 層
//!
//! Domain 層で定義したトレイトの実装 (インメモリ Repository、JWT、外部 API クライアント) と DTO。

pub mod auth;
pub mod dto;
pub mod place;
pub mod repository;
