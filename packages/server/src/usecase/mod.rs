//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod create_comment;
pub mod create_memo;
pub mod delete_comment;
pub mod delete_memo;
pub mod error;
pub mod get_comments;
pub mod get_memo;
pub mod get_profile;
pub mod get_room;
pub mod join_room;
pub mod kick_participant;
pub mod leave_room;
pub mod list_memos;
mod memo_access;
pub mod refresh_token;
pub mod search_places;
pub mod sign_in;
pub mod sign_up;
#[cfg(test)]
mod test_support;
pub mod update_memo;
pub mod update_profile;

pub use create_comment::{CommentView, CreateCommentUseCase};
pub use create_memo::CreateMemoUseCase;
pub use delete_comment::DeleteCommentUseCase;
pub use delete_memo::DeleteMemoUseCase;
pub use error::{AuthError, CommentError, MemoError, PlaceError, ProfileError, RoomAccessError};
pub use get_comments::GetCommentsUseCase;
pub use get_memo::GetMemoUseCase;
pub use get_profile::GetProfileUseCase;
pub use get_room::GetRoomUseCase;
pub use join_room::JoinRoomUseCase;
pub use kick_participant::KickParticipantUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use list_memos::{ListMemosInput, ListMemosUseCase};
pub use refresh_token::RefreshTokenUseCase;
pub use search_places::{CategorySearchInput, KeywordSearchInput, SearchPlacesUseCase};
pub use sign_in::SignInUseCase;
pub use sign_up::{AuthSession, SignUpInput, SignUpUseCase};
pub use update_memo::UpdateMemoUseCase;
pub use update_profile::{UpdateProfileInput, UpdateProfileUseCase};
