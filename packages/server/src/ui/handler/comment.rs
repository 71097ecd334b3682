//! Comments on memos.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    domain::{CommentId, MemoId},
    infrastructure::dto::http::{CommentListResponse, CommentResponse, CreateCommentRequest},
    ui::{
        error::ApiError,
        extractor::{ApiJson, ApiPath, AuthUser},
        state::AppState,
    },
    usecase::{CreateCommentUseCase, DeleteCommentUseCase, GetCommentsUseCase},
};

pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    ApiPath(memo_id): ApiPath<u64>,
    ApiJson(request): ApiJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    let usecase = CreateCommentUseCase::new(
        state.users.clone(),
        state.memos.clone(),
        state.comments.clone(),
        state.rooms.clone(),
    );
    let view = usecase
        .execute(
            user_id,
            MemoId::new(memo_id),
            request.content,
            request.rating,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(view.into())))
}

pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    ApiPath(memo_id): ApiPath<u64>,
) -> Result<Json<CommentListResponse>, ApiError> {
    let usecase = GetCommentsUseCase::new(
        state.users.clone(),
        state.memos.clone(),
        state.comments.clone(),
        state.rooms.clone(),
    );
    let views = usecase.execute(user_id, MemoId::new(memo_id)).await?;
    Ok(Json(views.into()))
}

pub async fn delete_comment(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    ApiPath(comment_id): ApiPath<u64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let usecase = DeleteCommentUseCase::new(state.memos.clone(), state.comments.clone());
    usecase.execute(user_id, CommentId::new(comment_id)).await?;
    Ok(Json(
        serde_json::json!({"message": "comment deleted successfully"}),
    ))
}
