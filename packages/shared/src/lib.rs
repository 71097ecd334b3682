//! Shared utilities for the Daily Memo server and client.

pub mod logger;
pub mod time;
