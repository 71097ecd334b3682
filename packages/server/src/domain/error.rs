//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::{CommentId, MemoId, RoomId, UserId};

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueObjectError {
    /// Required text field was empty or blank
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Text field too long
    #[error("{field} cannot exceed {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// Text field too short
    #[error("{field} must be at least {min} characters (got {actual})")]
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    /// Rating outside of 0..=5
    #[error("rating must be between 0 and {max} (got {actual})")]
    RatingOutOfRange { max: u8, actual: u8 },

    #[error("latitude must be between -90 and 90 (got {0})")]
    LatitudeOutOfRange(f64),

    #[error("longitude must be between -180 and 180 (got {0})")]
    LongitudeOutOfRange(f64),

    /// Only one half of a coordinate pair was supplied
    #[error("latitude and longitude must be given together")]
    IncompleteCoordinates,

    #[error(
        "business_phone format is invalid (expected format: 010-1234-5678 or +82-10-12345678, got: {0})"
    )]
    InvalidPhoneNumber(String),

    /// RoomCode is not a UUID
    #[error("room code must be a valid UUID format (got: {0})")]
    RoomCodeInvalidFormat(String),

    /// Unknown place category name
    #[error("unknown place category: {0}")]
    UnknownPlaceCategory(String),
}

/// Errors related to Room domain logic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// Room capacity exceeded error
    #[error("Room capacity exceeded: maximum {capacity} participants allowed (current: {current})")]
    CapacityExceeded { capacity: usize, current: usize },

    #[error("User {0} is already a participant of this room")]
    AlreadyParticipant(UserId),

    #[error("User {0} is not a participant of this room")]
    ParticipantNotFound(UserId),

    /// The owner tried to leave their own room
    #[error("The room owner cannot leave the room")]
    OwnerCannotLeave,

    #[error("The room owner cannot be kicked")]
    OwnerCannotBeKicked,

    /// A non-owner attempted an owner-only operation
    #[error("Only the room owner can do this")]
    NotOwner,
}

/// Errors returned by repository implementations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Account ID already exists: {0}")]
    DuplicateAccountId(String),

    #[error("Memo not found: {0}")]
    MemoNotFound(MemoId),

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    #[error("Room not found: {0}")]
    RoomNotFound(RoomId),

    #[error("Room code already exists: {0}")]
    DuplicateRoomCode(String),

    /// A participant change on a stored room broke a room rule
    #[error(transparent)]
    RoomRule(#[from] RoomError),
}

/// Errors from issuing or verifying auth tokens
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token is invalid")]
    Invalid,

    /// e.g. a refresh token presented where an access token is required
    #[error("unexpected token kind")]
    WrongKind,

    #[error("failed to encode token: {0}")]
    Encoding(String),
}

/// Errors from the third-party place search API
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaceSearchError {
    #[error("place search failed: {status} {message}")]
    Upstream { status: u16, message: String },

    #[error("place search request failed: {0}")]
    Transport(String),

    #[error("failed to decode place search response: {0}")]
    Decode(String),
}
