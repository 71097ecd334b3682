use crate::domain::value_object::{AccountId, Nickname, Password, RoomId, Timestamp, UserId};

/// A registered user
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub account_id: AccountId,
    pub password: Password,
    pub nickname: Nickname,
    pub profile_image_url: Option<String>,
    /// Room created for the user at sign up
    pub default_room_id: Option<RoomId>,
    /// Room the user joined most recently, if any
    pub active_room_id: Option<RoomId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A user that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub account_id: AccountId,
    pub password: Password,
    pub nickname: Nickname,
    pub created_at: Timestamp,
}

/// Profile fields to change. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChange {
    pub nickname: Option<Nickname>,
    pub password: Option<Password>,
    /// `Some(None)` removes the image
    pub profile_image_url: Option<Option<String>>,
}

impl User {
    /// Build a stored user from a repository-assigned id.
    pub fn new(id: UserId, new_user: NewUser) -> Self {
        Self {
            id,
            account_id: new_user.account_id,
            password: new_user.password,
            nickname: new_user.nickname,
            profile_image_url: None,
            default_room_id: None,
            active_room_id: None,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        }
    }

    /// Name shown next to the user's comments and in rooms.
    pub fn display_name(&self) -> &str {
        self.nickname.as_str()
    }

    /// The room the user is currently working in.
    pub fn current_room_id(&self) -> Option<RoomId> {
        self.active_room_id.or(self.default_room_id)
    }

    pub fn apply_profile_change(&mut self, change: ProfileChange, now: Timestamp) {
        if let Some(nickname) = change.nickname {
            self.nickname = nickname;
        }
        if let Some(password) = change.password {
            self.password = password;
        }
        if let Some(url) = change.profile_image_url {
            self.profile_image_url = url;
        }
        self.updated_at = now;
    }
}
