//! Command-line client for the Daily Memo server.
//!
//! Stands in for the mobile app: a REST client, a local session store and
//! one subcommand per screen action.

pub mod api;
pub mod cli;
pub mod display;
pub mod error;
pub mod session;

pub use cli::{App, Cli};
pub use error::ClientError;
