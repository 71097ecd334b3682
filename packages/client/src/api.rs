//! REST client for the Daily Memo server.
//!
//! Request and response bodies are the server's own DTOs.

use std::time::Duration;

use daily_memo_server::infrastructure::dto::http::{
    AuthResponse, CategorySearchQuery, CommentListResponse, CommentResponse,
    CreateCommentRequest, ErrorResponse, JoinRoomRequest, MapMarkerListResponse, MemoListQuery,
    MemoListResponse, MemoRequest, MemoResponse, PlaceListResponse, PlaceSearchQuery,
    ProfileResponse, RefreshTokenRequest, RoomDetailDto, SignInRequest, SignUpRequest,
    UpdateProfileRequest,
};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ClientError;

const API_PREFIX: &str = "/v0.1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("daily-memo-client/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| ClientError::Http {
                endpoint: base_url.to_string(),
                source,
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: None,
        })
    }

    pub fn with_access_token(mut self, access_token: String) -> Self {
        self.access_token = Some(access_token);
        self
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}{}", self.base_url, API_PREFIX, path);
        let request = self.client.request(method, url);
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send_raw(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await.map_err(|source| ClientError::Http {
            endpoint: endpoint.to_string(),
            source,
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                if text.is_empty() {
                    status.canonical_reason().unwrap_or("Unknown error").to_string()
                } else {
                    text
                }
            });
        tracing::debug!("{} -> {}: {}", endpoint, status, message);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<T, ClientError> {
        let response = self.send_raw(request, endpoint).await?;
        response.json().await.map_err(|e| ClientError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }

    async fn send_empty(&self, request: RequestBuilder, endpoint: &str) -> Result<(), ClientError> {
        self.send_raw(request, endpoint).await?;
        Ok(())
    }

    // -- auth --------------------------------------------------------------

    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthResponse, ClientError> {
        let endpoint = "/auth/signup";
        self.send(self.request(Method::POST, endpoint).json(request), endpoint)
            .await
    }

    pub async fn sign_in(&self, request: &SignInRequest) -> Result<AuthResponse, ClientError> {
        let endpoint = "/auth/signin";
        self.send(self.request(Method::POST, endpoint).json(request), endpoint)
            .await
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthResponse, ClientError> {
        let endpoint = "/auth/refresh";
        let body = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };
        self.send(self.request(Method::POST, endpoint).json(&body), endpoint)
            .await
    }

    // -- memos -------------------------------------------------------------

    pub async fn list_memos(&self, query: &MemoListQuery) -> Result<MemoListResponse, ClientError> {
        let endpoint = "/memo";
        self.send(self.request(Method::GET, endpoint).query(query), endpoint)
            .await
    }

    pub async fn map_markers(
        &self,
        query: &MemoListQuery,
    ) -> Result<MapMarkerListResponse, ClientError> {
        let endpoint = "/memo/map";
        self.send(self.request(Method::GET, endpoint).query(query), endpoint)
            .await
    }

    pub async fn get_memo(&self, id: u64) -> Result<MemoResponse, ClientError> {
        let endpoint = format!("/memo/{id}");
        self.send(self.request(Method::GET, &endpoint), &endpoint)
            .await
    }

    pub async fn create_memo(&self, request: &MemoRequest) -> Result<MemoResponse, ClientError> {
        let endpoint = "/memo";
        self.send(self.request(Method::POST, endpoint).json(request), endpoint)
            .await
    }

    pub async fn update_memo(
        &self,
        id: u64,
        request: &MemoRequest,
    ) -> Result<MemoResponse, ClientError> {
        let endpoint = format!("/memo/{id}");
        self.send(self.request(Method::PUT, &endpoint).json(request), &endpoint)
            .await
    }

    pub async fn delete_memo(&self, id: u64) -> Result<(), ClientError> {
        let endpoint = format!("/memo/{id}");
        self.send_empty(self.request(Method::DELETE, &endpoint), &endpoint)
            .await
    }

    // -- comments ----------------------------------------------------------

    pub async fn list_comments(&self, memo_id: u64) -> Result<CommentListResponse, ClientError> {
        let endpoint = format!("/memo/{memo_id}/comments");
        self.send(self.request(Method::GET, &endpoint), &endpoint)
            .await
    }

    pub async fn create_comment(
        &self,
        memo_id: u64,
        request: &CreateCommentRequest,
    ) -> Result<CommentResponse, ClientError> {
        let endpoint = format!("/memo/{memo_id}/comments");
        self.send(self.request(Method::POST, &endpoint).json(request), &endpoint)
            .await
    }

    pub async fn delete_comment(&self, comment_id: u64) -> Result<(), ClientError> {
        let endpoint = format!("/comments/{comment_id}");
        self.send_empty(self.request(Method::DELETE, &endpoint), &endpoint)
            .await
    }

    // -- profile -----------------------------------------------------------

    pub async fn get_profile(&self) -> Result<ProfileResponse, ClientError> {
        let endpoint = "/profile";
        self.send(self.request(Method::GET, endpoint), endpoint).await
    }

    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<ProfileResponse, ClientError> {
        let endpoint = "/profile";
        self.send(self.request(Method::PUT, endpoint).json(request), endpoint)
            .await
    }

    // -- rooms -------------------------------------------------------------

    pub async fn current_room(&self) -> Result<RoomDetailDto, ClientError> {
        let endpoint = "/rooms/current";
        self.send(self.request(Method::GET, endpoint), endpoint).await
    }

    pub async fn room_detail(&self, room_id: u64) -> Result<RoomDetailDto, ClientError> {
        let endpoint = format!("/rooms/{room_id}");
        self.send(self.request(Method::GET, &endpoint), &endpoint)
            .await
    }

    pub async fn join_room(&self, room_code: &str) -> Result<RoomDetailDto, ClientError> {
        let endpoint = "/rooms/join";
        let body = JoinRoomRequest {
            room_code: room_code.to_string(),
        };
        self.send(self.request(Method::POST, endpoint).json(&body), endpoint)
            .await
    }

    pub async fn leave_room(&self) -> Result<RoomDetailDto, ClientError> {
        let endpoint = "/rooms/leave";
        self.send(self.request(Method::POST, endpoint), endpoint).await
    }

    pub async fn kick_participant(
        &self,
        room_id: u64,
        user_id: u64,
    ) -> Result<RoomDetailDto, ClientError> {
        let endpoint = format!("/rooms/{room_id}/participants/{user_id}");
        self.send(self.request(Method::DELETE, &endpoint), &endpoint)
            .await
    }

    // -- places ------------------------------------------------------------

    pub async fn search_places(
        &self,
        query: &PlaceSearchQuery,
    ) -> Result<PlaceListResponse, ClientError> {
        let endpoint = "/places/search";
        self.send(self.request(Method::GET, endpoint).query(query), endpoint)
            .await
    }

    pub async fn search_places_by_category(
        &self,
        query: &CategorySearchQuery,
    ) -> Result<PlaceListResponse, ClientError> {
        let endpoint = "/places/category";
        self.send(self.request(Method::GET, endpoint).query(query), endpoint)
            .await
    }
}
