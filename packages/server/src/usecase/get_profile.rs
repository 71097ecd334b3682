//! UseCase: プロフィール取得

use std::sync::Arc;

use crate::domain::{User, UserId, UserRepository};

use super::error::ProfileError;

/// プロフィール取得のユースケース
pub struct GetProfileUseCase {
    users: Arc<dyn UserRepository>,
}

impl GetProfileUseCase {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn execute(&self, user_id: UserId) -> Result<User, ProfileError> {
        Ok(self.users.find_by_id(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::RepositoryError, usecase::test_support::TestRepositories};

    #[tokio::test]
    async fn test_get_profile() {
        // テスト項目: 自分のプロフィールを取得できる
        // given (前提条件):
        let repos = TestRepositories::new();
        let alice = repos.sign_up("alice").await;
        let usecase = GetProfileUseCase::new(repos.users.clone());

        // when (操作):
        let profile = usecase.execute(alice.id).await;
        let missing = usecase.execute(UserId::new(9)).await;

        // then (期待する結果):
        assert_eq!(profile, Ok(alice));
        assert_eq!(
            missing,
            Err(ProfileError::Repository(RepositoryError::UserNotFound(
                UserId::new(9)
            )))
        );
    }
}
