//! Shared application state.

use std::sync::Arc;

use crate::{
    config::ServerConfig,
    domain::{
        CommentRepository, MemoRepository, PlaceSearchClient, RoomRepository, TokenService,
        UserRepository,
    },
    error::ServerError,
    infrastructure::{
        auth::JwtTokenService,
        place::KakaoPlaceClient,
        repository::{
            InMemoryCommentRepository, InMemoryMemoRepository, InMemoryRoomRepository,
            InMemoryUserRepository,
        },
    },
};

/// Repositories and services handed to every handler
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub users: Arc<dyn UserRepository>,
    pub memos: Arc<dyn MemoRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub rooms: Arc<dyn RoomRepository>,
    pub tokens: Arc<dyn TokenService>,
    /// `None` when no place search API key is configured
    pub places: Option<Arc<dyn PlaceSearchClient>>,
    pub signup_auth_code: String,
}

impl AppState {
    /// Wire in-memory repositories, the JWT service and the Kakao client from configuration.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ServerError> {
        let places: Option<Arc<dyn PlaceSearchClient>> = match &config.kakao_rest_api_key {
            Some(key) if !key.trim().is_empty() => Some(Arc::new(KakaoPlaceClient::new(
                &config.kakao_base_url,
                key.clone(),
            )?)),
            _ => {
                tracing::warn!("KAKAO_REST_API_KEY is not set, place search is disabled");
                None
            }
        };

        Ok(Self {
            users: Arc::new(InMemoryUserRepository::new()),
            memos: Arc::new(InMemoryMemoRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
            rooms: Arc::new(InMemoryRoomRepository::new()),
            tokens: Arc::new(JwtTokenService::new(&config.jwt())),
            places,
            signup_auth_code: config.signup_auth_code.clone(),
        })
    }
}
