//! Memo CRUD and map markers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    domain::MemoId,
    infrastructure::dto::http::{
        MapMarkerListResponse, MemoListQuery, MemoListResponse, MemoRequest, MemoResponse,
    },
    ui::{
        error::ApiError,
        extractor::{ApiJson, ApiPath, ApiQuery, AuthUser},
        state::AppState,
    },
    usecase::{
        CreateMemoUseCase, DeleteMemoUseCase, GetMemoUseCase, ListMemosUseCase, UpdateMemoUseCase,
    },
};

pub async fn create_memo(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    ApiJson(request): ApiJson<MemoRequest>,
) -> Result<(StatusCode, Json<MemoResponse>), ApiError> {
    let usecase = CreateMemoUseCase::new(
        state.users.clone(),
        state.memos.clone(),
        state.rooms.clone(),
    );
    let room_id = request.room_id();
    let memo = usecase
        .execute(user_id, room_id, request.into_draft())
        .await?;
    Ok((StatusCode::CREATED, Json(MemoResponse::from(&memo))))
}

pub async fn list_memos(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    ApiQuery(query): ApiQuery<MemoListQuery>,
) -> Result<Json<MemoListResponse>, ApiError> {
    let usecase = ListMemosUseCase::new(state.memos.clone(), state.rooms.clone());
    let memos = usecase.execute(user_id, query.into()).await?;
    Ok(Json(memos.into()))
}

pub async fn map_markers(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    ApiQuery(query): ApiQuery<MemoListQuery>,
) -> Result<Json<MapMarkerListResponse>, ApiError> {
    let usecase = ListMemosUseCase::new(state.memos.clone(), state.rooms.clone());
    let markers = usecase.map_markers(user_id, query.into()).await?;
    Ok(Json(markers.into()))
}

pub async fn get_memo(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    ApiPath(memo_id): ApiPath<u64>,
) -> Result<Json<MemoResponse>, ApiError> {
    let usecase = GetMemoUseCase::new(state.memos.clone(), state.rooms.clone());
    let memo = usecase.execute(user_id, MemoId::new(memo_id)).await?;
    Ok(Json(MemoResponse::from(&memo)))
}

pub async fn update_memo(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    ApiPath(memo_id): ApiPath<u64>,
    ApiJson(request): ApiJson<MemoRequest>,
) -> Result<Json<MemoResponse>, ApiError> {
    let usecase = UpdateMemoUseCase::new(state.memos.clone(), state.rooms.clone());
    let memo = usecase
        .execute(user_id, MemoId::new(memo_id), request.into_draft())
        .await?;
    Ok(Json(MemoResponse::from(&memo)))
}

pub async fn delete_memo(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    ApiPath(memo_id): ApiPath<u64>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteMemoUseCase::new(
        state.memos.clone(),
        state.comments.clone(),
        state.rooms.clone(),
    );
    usecase.execute(user_id, MemoId::new(memo_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
