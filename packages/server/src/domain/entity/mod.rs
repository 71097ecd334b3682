//! Core domain models for the memo application.

mod comment;
mod memo;
mod place;
mod room;
mod user;

pub use comment::{Comment, NewComment, average_rating};
pub use memo::{BusinessInfo, MapMarker, MarkerPin, Memo, MemoDraft, MemoFields, NewMemo};
pub use place::{Place, PlaceCategory};
pub use room::{DEFAULT_PARTICIPANT_CAPACITY, NewRoom, Participant, Room};
pub use user::{NewUser, ProfileChange, User};
