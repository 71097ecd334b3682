//! Route table and middleware stack.

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{
        HeaderValue, Method, StatusCode,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{delete, get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::{
    handler::{auth, comment, health_check, memo, place, profile, room},
    state::AppState,
};

const API_PREFIX: &str = "/v0.1";

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/signup", post(auth::sign_up))
        .route("/auth/signin", post(auth::sign_in))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/memo", get(memo::list_memos).post(memo::create_memo))
        .route("/memo/map", get(memo::map_markers))
        .route(
            "/memo/{id}",
            get(memo::get_memo)
                .put(memo::update_memo)
                .delete(memo::delete_memo),
        )
        .route(
            "/memo/{memo_id}/comments",
            get(comment::list_comments).post(comment::create_comment),
        )
        .route("/comments/{comment_id}", delete(comment::delete_comment))
        .route(
            "/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route("/rooms/current", get(room::current_room))
        .route("/rooms/join", post(room::join_room))
        .route("/rooms/leave", post(room::leave_room))
        .route("/rooms/{room_id}", get(room::get_room_detail))
        .route(
            "/rooms/{room_id}/participants/{user_id}",
            delete(room::kick_participant),
        )
        .route("/places/search", get(place::search_places))
        .route("/places/category", get(place::search_places_by_category))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}

/// Requests running longer than `request_timeout` are answered with 408.
fn timeout_layer(request_timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout)
}

pub fn create_router(
    state: Arc<AppState>,
    allowed_origins: &[String],
    request_timeout: Duration,
) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest(API_PREFIX, api_routes())
        .with_state(state)
        .layer(timeout_layer(request_timeout))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
