//! Traits for services the domain relies on but does not implement:
//! token signing and the third-party place search.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{
    entity::Place,
    error::{PlaceSearchError, TokenError},
    value_object::{AccountId, Timestamp, UserId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// A freshly issued access/refresh token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub access_token_expires_at: Timestamp,
    pub refresh_token: String,
    pub refresh_token_expires_at: Timestamp,
}

/// Identity carried by a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthClaims {
    pub user_id: UserId,
    pub account_id: String,
}

#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    fn issue(&self, user_id: UserId, account_id: &AccountId) -> Result<TokenPair, TokenError>;

    /// Check signature, expiry and kind.
    fn verify(&self, token: &str, kind: TokenKind) -> Result<AuthClaims, TokenError>;
}

/// Centre of a place search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchCenter {
    pub longitude: f64,
    pub latitude: f64,
}

pub const DEFAULT_SEARCH_RADIUS: u32 = 2000;
pub const MAX_SEARCH_RADIUS: u32 = 20000;
pub const DEFAULT_PAGE_SIZE: u32 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordQuery {
    pub query: String,
    pub center: Option<SearchCenter>,
    /// Metres
    pub radius: u32,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryQuery {
    /// Kakao category group code, e.g. `FD6`
    pub category_code: String,
    pub center: SearchCenter,
    pub radius: u32,
    pub size: u32,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceSearchClient: Send + Sync {
    async fn search_by_keyword(&self, query: KeywordQuery) -> Result<Vec<Place>, PlaceSearchError>;

    async fn search_by_category(
        &self,
        query: CategoryQuery,
    ) -> Result<Vec<Place>, PlaceSearchError>;
}
