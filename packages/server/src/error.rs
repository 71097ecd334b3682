//! Errors that stop the server from starting or running.

use thiserror::Error;

use crate::domain::PlaceSearchError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    #[error("failed to set up place search: {0}")]
    PlaceClient(#[from] PlaceSearchError),
}
