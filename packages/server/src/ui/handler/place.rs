//! Place search proxy.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    infrastructure::dto::http::{CategorySearchQuery, PlaceListResponse, PlaceSearchQuery},
    ui::{
        error::ApiError,
        extractor::{ApiQuery, AuthUser},
        state::AppState,
    },
    usecase::SearchPlacesUseCase,
};

fn usecase(state: &AppState) -> Result<SearchPlacesUseCase, ApiError> {
    state
        .places
        .clone()
        .map(SearchPlacesUseCase::new)
        .ok_or_else(|| ApiError::service_unavailable("place search is not configured"))
}

pub async fn search_places(
    State(state): State<Arc<AppState>>,
    AuthUser(_): AuthUser,
    ApiQuery(query): ApiQuery<PlaceSearchQuery>,
) -> Result<Json<PlaceListResponse>, ApiError> {
    let places = usecase(&state)?.by_keyword(query.into()).await?;
    Ok(Json(places.into()))
}

pub async fn search_places_by_category(
    State(state): State<Arc<AppState>>,
    AuthUser(_): AuthUser,
    ApiQuery(query): ApiQuery<CategorySearchQuery>,
) -> Result<Json<PlaceListResponse>, ApiError> {
    let places = usecase(&state)?.by_category(query.into()).await?;
    Ok(Json(places.into()))
}
