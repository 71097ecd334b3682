//! Translation of use-case errors into HTTP responses.
//!
//! Every error response has the body `{"error": "..."}`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    domain::{RepositoryError, RoomError, TokenError},
    infrastructure::dto::http::ErrorResponse,
    usecase::{AuthError, CommentError, MemoError, PlaceError, ProfileError, RoomAccessError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    /// Details go to the log, not to the client.
    fn internal(error: impl std::fmt::Display) -> Self {
        tracing::error!("Internal error: {}", error);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        Self::unauthorized(error.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        let message = error.to_string();
        match error {
            AuthError::Validation(_) | AuthError::InvalidAuthCode => Self::bad_request(message),
            AuthError::DuplicateAccountId(_) => Self::new(StatusCode::CONFLICT, message),
            AuthError::InvalidCredentials | AuthError::InvalidRefreshToken(_) => {
                Self::unauthorized(message)
            }
            AuthError::TokenIssue(_) | AuthError::Repository(_) => Self::internal(message),
        }
    }
}

impl From<MemoError> for ApiError {
    fn from(error: MemoError) -> Self {
        let message = error.to_string();
        match error {
            MemoError::Validation(_) | MemoError::NoCurrentRoom => Self::bad_request(message),
            MemoError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, message),
            MemoError::NotAuthor(_) | MemoError::RoomNotAccessible(_) => {
                Self::new(StatusCode::FORBIDDEN, message)
            }
            MemoError::Repository(_) => Self::internal(message),
        }
    }
}

impl From<CommentError> for ApiError {
    fn from(error: CommentError) -> Self {
        let message = error.to_string();
        match error {
            CommentError::Validation(_) => Self::bad_request(message),
            CommentError::MemoNotFound(_) => Self::new(StatusCode::NOT_FOUND, message),
            CommentError::NotFound(_) => Self::new(
                StatusCode::NOT_FOUND,
                "comment not found or not authorized",
            ),
            CommentError::Repository(_) => Self::internal(message),
        }
    }
}

impl From<ProfileError> for ApiError {
    fn from(error: ProfileError) -> Self {
        let message = error.to_string();
        match error {
            ProfileError::Validation(_)
            | ProfileError::CurrentPasswordRequired
            | ProfileError::IncorrectCurrentPassword => Self::bad_request(message),
            ProfileError::Repository(RepositoryError::UserNotFound(_)) => {
                Self::new(StatusCode::NOT_FOUND, "user not found")
            }
            ProfileError::Repository(_) => Self::internal(message),
        }
    }
}

impl From<RoomAccessError> for ApiError {
    fn from(error: RoomAccessError) -> Self {
        let message = error.to_string();
        match error {
            RoomAccessError::Validation(_)
            | RoomAccessError::RoomCodeRequired
            | RoomAccessError::NoCurrentRoom => Self::bad_request(message),
            RoomAccessError::RoomNotFound => Self::new(StatusCode::NOT_FOUND, message),
            RoomAccessError::NotParticipant(_) => Self::new(StatusCode::FORBIDDEN, message),
            RoomAccessError::Rule(rule) => match rule {
                RoomError::CapacityExceeded { .. } | RoomError::AlreadyParticipant(_) => {
                    Self::new(StatusCode::CONFLICT, message)
                }
                RoomError::ParticipantNotFound(_) => Self::new(StatusCode::NOT_FOUND, message),
                RoomError::OwnerCannotLeave | RoomError::NotOwner => {
                    Self::new(StatusCode::FORBIDDEN, message)
                }
                RoomError::OwnerCannotBeKicked => Self::bad_request(message),
            },
            RoomAccessError::Repository(_) => Self::internal(message),
        }
    }
}

impl From<PlaceError> for ApiError {
    fn from(error: PlaceError) -> Self {
        let message = error.to_string();
        match error {
            PlaceError::Upstream(_) => {
                tracing::error!("Place search failed: {}", message);
                Self::new(StatusCode::BAD_GATEWAY, message)
            }
            _ => Self::bad_request(message),
        }
    }
}
