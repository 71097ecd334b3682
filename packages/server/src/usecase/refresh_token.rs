//! UseCase: トークン更新

use std::sync::Arc;

use crate::domain::{RepositoryError, TokenError, TokenKind, TokenService, UserRepository};

use super::{error::AuthError, sign_up::AuthSession};

/// リフレッシュトークンから新しいトークンペアを発行するユースケース
pub struct RefreshTokenUseCase {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenService>,
}

impl RefreshTokenUseCase {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<dyn TokenService>) -> Self {
        Self { users, tokens }
    }

    pub async fn execute(&self, refresh_token: &str) -> Result<AuthSession, AuthError> {
        let claims = self
            .tokens
            .verify(refresh_token, TokenKind::Refresh)
            .map_err(AuthError::InvalidRefreshToken)?;

        // 削除済みユーザーのトークンは無効
        let user = match self.users.find_by_id(claims.user_id).await {
            Ok(user) => user,
            Err(RepositoryError::UserNotFound(_)) => {
                return Err(AuthError::InvalidRefreshToken(TokenError::Invalid));
            }
            Err(e) => return Err(e.into()),
        };

        let tokens = self
            .tokens
            .issue(user.id, &user.account_id)
            .map_err(AuthError::TokenIssue)?;

        tracing::debug!("Tokens refreshed for user {}", user.id);
        Ok(AuthSession { user, tokens })
    }
}
