//! UseCase 層のエラー定義
//!
//! 機能ごとに 1 つの列挙型を持ち、UI 層で HTTP ステータスに変換されます。

use thiserror::Error;

use crate::domain::{
    CommentId, MemoId, PlaceSearchError, RepositoryError, RoomError, RoomId, TokenError,
    ValueObjectError,
};

/// サインアップ・サインイン・トークン更新のエラー
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValueObjectError),

    #[error("account id already exists: {0}")]
    DuplicateAccountId(String),

    #[error("invalid auth code")]
    InvalidAuthCode,

    #[error("invalid account id or password")]
    InvalidCredentials,

    #[error("invalid refresh token: {0}")]
    InvalidRefreshToken(TokenError),

    #[error("failed to issue token: {0}")]
    TokenIssue(TokenError),

    #[error(transparent)]
    Repository(RepositoryError),
}

/// メモ操作のエラー
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MemoError {
    #[error(transparent)]
    Validation(#[from] ValueObjectError),

    /// 存在しない、または閲覧権限がない
    #[error("memo not found: {0}")]
    NotFound(MemoId),

    #[error("only the author can modify memo {0}")]
    NotAuthor(MemoId),

    #[error("room {0} is not accessible")]
    RoomNotAccessible(RoomId),

    #[error("user has no room to write memos in")]
    NoCurrentRoom,

    #[error(transparent)]
    Repository(RepositoryError),
}

/// コメント操作のエラー
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CommentError {
    #[error(transparent)]
    Validation(#[from] ValueObjectError),

    #[error("memo not found: {0}")]
    MemoNotFound(MemoId),

    /// 存在しない、または自分のコメントではない
    #[error("comment not found or not authorized: {0}")]
    NotFound(CommentId),

    #[error(transparent)]
    Repository(RepositoryError),
}

/// プロフィール操作のエラー
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProfileError {
    #[error(transparent)]
    Validation(#[from] ValueObjectError),

    #[error("current password is required")]
    CurrentPasswordRequired,

    #[error("incorrect current password")]
    IncorrectCurrentPassword,

    #[error(transparent)]
    Repository(RepositoryError),
}

/// ルーム操作のエラー
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RoomAccessError {
    #[error(transparent)]
    Validation(#[from] ValueObjectError),

    #[error("room code is required")]
    RoomCodeRequired,

    #[error("room not found")]
    RoomNotFound,

    #[error("not a participant of room {0}")]
    NotParticipant(RoomId),

    #[error("user has no current room")]
    NoCurrentRoom,

    #[error(transparent)]
    Rule(#[from] RoomError),

    #[error(transparent)]
    Repository(RepositoryError),
}

/// 場所検索のエラー
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlaceError {
    #[error("query cannot be empty")]
    EmptyQuery,

    #[error("radius must be between 0 and {max} (got {actual})")]
    RadiusOutOfRange { max: u32, actual: u32 },

    #[error("x and y must be given together")]
    IncompleteCenter,

    #[error("x and y are required for a category search")]
    MissingCenter,

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// カテゴリは存在するが、検索 API に対応するコードがない
    #[error("category {0} cannot be searched")]
    CategoryNotSearchable(String),

    #[error(transparent)]
    Upstream(#[from] PlaceSearchError),
}

impl From<RepositoryError> for AuthError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::DuplicateAccountId(id) => AuthError::DuplicateAccountId(id),
            other => AuthError::Repository(other),
        }
    }
}

impl From<RepositoryError> for MemoError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::MemoNotFound(id) => MemoError::NotFound(id),
            RepositoryError::RoomNotFound(id) => MemoError::RoomNotAccessible(id),
            other => MemoError::Repository(other),
        }
    }
}

impl From<RepositoryError> for CommentError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::MemoNotFound(id) => CommentError::MemoNotFound(id),
            RepositoryError::CommentNotFound(id) => CommentError::NotFound(id),
            other => CommentError::Repository(other),
        }
    }
}

impl From<RepositoryError> for ProfileError {
    fn from(error: RepositoryError) -> Self {
        ProfileError::Repository(error)
    }
}

impl From<RepositoryError> for RoomAccessError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::RoomNotFound(_) => RoomAccessError::RoomNotFound,
            RepositoryError::RoomRule(rule) => RoomAccessError::Rule(rule),
            other => RoomAccessError::Repository(other),
        }
    }
}
