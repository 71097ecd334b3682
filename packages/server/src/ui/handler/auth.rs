//! Sign up, sign in and token refresh.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    infrastructure::dto::http::{AuthResponse, RefreshTokenRequest, SignInRequest, SignUpRequest},
    ui::{error::ApiError, extractor::ApiJson, state::AppState},
    usecase::{RefreshTokenUseCase, SignInUseCase, SignUpUseCase},
};

pub async fn sign_up(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<SignUpRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let usecase = SignUpUseCase::new(
        state.users.clone(),
        state.rooms.clone(),
        state.tokens.clone(),
        state.signup_auth_code.clone(),
    );
    let session = usecase.execute(request.into()).await?;
    Ok(Json(session.into()))
}

pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<SignInRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let usecase = SignInUseCase::new(state.users.clone(), state.tokens.clone());
    let session = usecase
        .execute(request.account_id, &request.password)
        .await?;
    Ok(Json(session.into()))
}

pub async fn refresh_token(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<RefreshTokenRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let usecase = RefreshTokenUseCase::new(state.users.clone(), state.tokens.clone());
    let session = usecase.execute(&request.refresh_token).await?;
    Ok(Json(session.into()))
}
