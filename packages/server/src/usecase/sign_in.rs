//! UseCase: サインイン

use std::sync::Arc;

use crate::domain::{AccountId, TokenService, UserRepository};

use super::{error::AuthError, sign_up::AuthSession};

/// サインインのユースケース
///
/// 失敗理由（存在しないアカウントかパスワード誤りか）は区別せず、
/// すべて `AuthError::InvalidCredentials` として返します。
pub struct SignInUseCase {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenService>,
}

impl SignInUseCase {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<dyn TokenService>) -> Self {
        Self { users, tokens }
    }

    pub async fn execute(&self, account_id: String, password: &str) -> Result<AuthSession, AuthError> {
        let account_id = AccountId::new(account_id).map_err(|_| AuthError::InvalidCredentials)?;
        let user = self
            .users
            .find_by_account_id(&account_id)
            .await?
            .filter(|user| user.password.matches(password))
            .ok_or_else(|| {
                tracing::warn!("Sign in failed for account id: {}", account_id);
                AuthError::InvalidCredentials
            })?;

        let tokens = self
            .tokens
            .issue(user.id, &user.account_id)
            .map_err(AuthError::TokenIssue)?;

        tracing::info!("User signed in: {} (id: {})", user.account_id, user.id);
        Ok(AuthSession { user, tokens })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::test_support::{PASSWORD, TestRepositories, stub_token_service};

    #[tokio::test]
    async fn test_sign_in_success() {
        // テスト項目: 正しいアカウント ID とパスワードでサインインできる
        // given (前提条件):
        let repos = TestRepositories::new();
        let alice = repos.sign_up("alice").await;
        let usecase = SignInUseCase::new(repos.users.clone(), stub_token_service());

        // when (操作):
        let session = usecase.execute("alice".to_string(), PASSWORD).await.unwrap();

        // then (期待する結果):
        assert_eq!(session.user.id, alice.id);
        assert_eq!(session.tokens.refresh_token, format!("refresh-{}", alice.id));
    }

    #[tokio::test]
    async fn test_sign_in_failures_are_indistinguishable() {
        // テスト項目: パスワード誤り・存在しないアカウント・空の ID はすべて同じエラーになる
        // given (前提条件):
        let repos = TestRepositories::new();
        repos.sign_up("alice").await;
        let usecase = SignInUseCase::new(repos.users.clone(), stub_token_service());

        // when (操作):
        let wrong_password = usecase.execute("alice".to_string(), "wrong-password").await;
        let unknown = usecase.execute("bob".to_string(), PASSWORD).await;
        let blank = usecase.execute("  ".to_string(), PASSWORD).await;

        // then (期待する結果):
        assert_eq!(wrong_password, Err(AuthError::InvalidCredentials));
        assert_eq!(unknown, Err(AuthError::InvalidCredentials));
        assert_eq!(blank, Err(AuthError::InvalidCredentials));
    }
}
