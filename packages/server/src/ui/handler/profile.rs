use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    infrastructure::dto::http::{ProfileResponse, UpdateProfileRequest},
    ui::{
        error::ApiError,
        extractor::{ApiJson, AuthUser},
        state::AppState,
    },
    usecase::{GetProfileUseCase, UpdateProfileUseCase},
};

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = GetProfileUseCase::new(state.users.clone())
        .execute(user_id)
        .await?;
    Ok(Json(user.into()))
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    ApiJson(request): ApiJson<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = UpdateProfileUseCase::new(state.users.clone())
        .execute(user_id, request.into())
        .await?;
    Ok(Json(user.into()))
}
