//! Room membership endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    domain::{RoomId, UserId},
    infrastructure::dto::http::{JoinRoomRequest, RoomDetailDto},
    ui::{
        error::ApiError,
        extractor::{ApiJson, ApiPath, AuthUser},
        state::AppState,
    },
    usecase::{GetRoomUseCase, JoinRoomUseCase, KickParticipantUseCase, LeaveRoomUseCase},
};

/// The caller's active room, or their default room
pub async fn current_room(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<RoomDetailDto>, ApiError> {
    let room = GetRoomUseCase::new(state.users.clone(), state.rooms.clone())
        .current(user_id)
        .await?;
    Ok(Json(room.into()))
}

pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    ApiPath(room_id): ApiPath<u64>,
) -> Result<Json<RoomDetailDto>, ApiError> {
    let room = GetRoomUseCase::new(state.users.clone(), state.rooms.clone())
        .detail(user_id, RoomId::new(room_id))
        .await?;
    Ok(Json(room.into()))
}

pub async fn join_room(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    ApiJson(request): ApiJson<JoinRoomRequest>,
) -> Result<Json<RoomDetailDto>, ApiError> {
    let room = JoinRoomUseCase::new(state.users.clone(), state.rooms.clone())
        .execute(user_id, &request.room_code)
        .await?;
    Ok(Json(room.into()))
}

/// Returns the room the caller lands in afterwards
pub async fn leave_room(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<RoomDetailDto>, ApiError> {
    let room = LeaveRoomUseCase::new(state.users.clone(), state.rooms.clone())
        .execute(user_id)
        .await?;
    Ok(Json(room.into()))
}

pub async fn kick_participant(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    ApiPath((room_id, target)): ApiPath<(u64, u64)>,
) -> Result<Json<RoomDetailDto>, ApiError> {
    let room = KickParticipantUseCase::new(state.users.clone(), state.rooms.clone())
        .execute(user_id, RoomId::new(room_id), UserId::new(target))
        .await?;
    Ok(Json(room.into()))
}
