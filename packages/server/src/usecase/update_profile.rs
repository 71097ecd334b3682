//! UseCase: プロフィール更新
//!
//! 現在のパスワードの確認が必須です。指定された項目だけが変更されます。

use std::sync::Arc;

use crate::domain::{
    ImageUrl, Nickname, Password, ProfileChange, Timestamp, User, UserId, UserRepository,
};

use super::error::ProfileError;

/// プロフィール更新の入力
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub current_password: String,
    pub nickname: Option<String>,
    pub new_password: Option<String>,
    /// 空文字列を指定すると画像を解除する
    pub profile_image_url: Option<String>,
}

/// プロフィール更新のユースケース
pub struct UpdateProfileUseCase {
    users: Arc<dyn UserRepository>,
}

impl UpdateProfileUseCase {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        input: UpdateProfileInput,
    ) -> Result<User, ProfileError> {
        if input.current_password.trim().is_empty() {
            return Err(ProfileError::CurrentPasswordRequired);
        }
        let user = self.users.find_by_id(user_id).await?;
        if !user.password.matches(&input.current_password) {
            tracing::warn!("Profile update rejected for user {}: wrong password", user_id);
            return Err(ProfileError::IncorrectCurrentPassword);
        }

        let change = ProfileChange {
            nickname: input.nickname.map(Nickname::new).transpose()?,
            password: input.new_password.map(Password::new).transpose()?,
            profile_image_url: input
                .profile_image_url
                .map(|url| ImageUrl::parse(Some(url)))
                .transpose()?
                .map(|url| url.map(|u| u.as_str().to_string())),
        };
        let user = self
            .users
            .update_profile(user_id, change, Timestamp::now())
            .await?;
        tracing::info!("Profile updated for user {}", user_id);
        Ok(user)
    }
}
