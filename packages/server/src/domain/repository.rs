//! Repository traits.
//!
//! The domain layer defines these traits and the infrastructure layer
//! implements them, so use cases never depend on a concrete storage.

use async_trait::async_trait;

use super::{
    entity::{
        Comment, Memo, MemoFields, NewComment, NewMemo, NewRoom, NewUser, Participant,
        ProfileChange, Room, User,
    },
    error::RepositoryError,
    value_object::{AccountId, CommentId, MemoId, RoomCode, RoomId, Timestamp, UserId},
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user. Fails with `DuplicateAccountId` if the account id is taken.
    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError>;

    async fn find_by_id(&self, id: UserId) -> Result<User, RepositoryError>;

    async fn find_by_account_id(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<User>, RepositoryError>;

    async fn set_default_room(&self, id: UserId, room_id: RoomId) -> Result<User, RepositoryError>;

    /// Make `room_id` the user's active room.
    async fn activate_room(&self, id: UserId, room_id: RoomId) -> Result<User, RepositoryError>;

    /// Clear the active room, but only while it is still `room_id`.
    async fn deactivate_room(
        &self,
        id: UserId,
        room_id: RoomId,
    ) -> Result<User, RepositoryError>;

    async fn update_profile(
        &self,
        id: UserId,
        change: ProfileChange,
        now: Timestamp,
    ) -> Result<User, RepositoryError>;
}

/// Which memos to list. Unset filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoFilter {
    pub author: Option<UserId>,
    pub room_id: Option<RoomId>,
    pub is_wishlist: Option<bool>,
}

impl MemoFilter {
    pub fn matches(&self, memo: &Memo) -> bool {
        self.author.is_none_or(|author| memo.user_id == author)
            && self.room_id.is_none_or(|room_id| memo.room_id == room_id)
            && self
                .is_wishlist
                .is_none_or(|wishlist| memo.fields.is_wishlist == wishlist)
    }
}

#[async_trait]
pub trait MemoRepository: Send + Sync {
    async fn create(&self, new_memo: NewMemo) -> Result<Memo, RepositoryError>;

    async fn find_by_id(&self, id: MemoId) -> Result<Memo, RepositoryError>;

    /// Pinned memos first, then newest first.
    async fn list(&self, filter: MemoFilter) -> Result<Vec<Memo>, RepositoryError>;

    /// Replace the author-editable fields.
    async fn update_fields(
        &self,
        id: MemoId,
        fields: MemoFields,
        now: Timestamp,
    ) -> Result<Memo, RepositoryError>;

    async fn set_average_rating(
        &self,
        id: MemoId,
        average_rating: Option<f64>,
    ) -> Result<Memo, RepositoryError>;

    async fn delete(&self, id: MemoId) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, RepositoryError>;

    async fn find_by_id(&self, id: CommentId) -> Result<Comment, RepositoryError>;

    /// Newest first.
    async fn list_by_memo(&self, memo_id: MemoId) -> Result<Vec<Comment>, RepositoryError>;

    async fn delete(&self, id: CommentId) -> Result<(), RepositoryError>;

    /// Delete every comment of a memo and return how many were removed.
    async fn delete_by_memo(&self, memo_id: MemoId) -> Result<usize, RepositoryError>;
}

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, new_room: NewRoom) -> Result<Room, RepositoryError>;

    async fn find_by_id(&self, id: RoomId) -> Result<Room, RepositoryError>;

    async fn find_by_code(&self, code: &RoomCode) -> Result<Option<Room>, RepositoryError>;

    /// Fails with `RoomRule` when the room is full or the user already joined.
    async fn add_participant(
        &self,
        id: RoomId,
        participant: Participant,
    ) -> Result<Room, RepositoryError>;

    async fn leave(
        &self,
        id: RoomId,
        user_id: UserId,
        now: Timestamp,
    ) -> Result<Room, RepositoryError>;

    async fn kick(
        &self,
        id: RoomId,
        actor: UserId,
        target: UserId,
        now: Timestamp,
    ) -> Result<Room, RepositoryError>;
}
