//! Token signing implementations.

mod jwt;

pub use jwt::{JwtConfig, JwtTokenService};
