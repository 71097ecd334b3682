//! Domain layer for the memo application.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod service;
pub mod value_object;

pub use entity::{
    BusinessInfo, Comment, MapMarker, MarkerPin, Memo, MemoDraft, MemoFields, NewComment, NewMemo,
    NewRoom, NewUser, Participant, Place, PlaceCategory, ProfileChange, Room, User,
};
pub use error::{PlaceSearchError, RepositoryError, RoomError, TokenError, ValueObjectError};
pub use factory::RoomCodeFactory;
pub use repository::{CommentRepository, MemoFilter, MemoRepository, RoomRepository, UserRepository};
pub use service::{
    AuthClaims, CategoryQuery, KeywordQuery, PlaceSearchClient, SearchCenter, TokenKind,
    TokenPair, TokenService,
};
pub use value_object::{
    AccountId, CommentContent, CommentId, Coordinates, ImageUrl, MemoContent, MemoId, MemoTitle,
    Nickname, Password, Rating, RoomCode, RoomId, RoomName, Timestamp, UserId,
};
