//! UseCase: サインアップ
//!
//! ユーザーの作成と既定ルームの作成を 1 つの操作として行い、トークンを発行します。
//!
//! ### どのような状況を想定しているか
//! - 正常系：ユーザーと既定ルームが作成され、トークンが返る
//! - 異常系：アカウント ID の重複、認証コードの不一致、入力値の不正

use std::sync::Arc;

use crate::domain::{
    AccountId, NewRoom, NewUser, Nickname, Password, RoomCodeFactory, RoomName, RoomRepository,
    Timestamp, TokenPair, TokenService, User, UserRepository,
};

use super::error::AuthError;

/// サインアップの入力
#[derive(Debug, Clone)]
pub struct SignUpInput {
    pub account_id: String,
    pub password: String,
    pub nickname: String,
    pub auth_code: String,
}

/// 認証済みセッション（ユーザーと発行済みトークン）
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub user: User,
    pub tokens: TokenPair,
}

/// サインアップのユースケース
pub struct SignUpUseCase {
    users: Arc<dyn UserRepository>,
    rooms: Arc<dyn RoomRepository>,
    tokens: Arc<dyn TokenService>,
    /// サインアップに必要な認証コード
    auth_code: String,
}

impl SignUpUseCase {
    pub fn new(
        users: Arc<dyn UserRepository>,
        rooms: Arc<dyn RoomRepository>,
        tokens: Arc<dyn TokenService>,
        auth_code: String,
    ) -> Self {
        Self {
            users,
            rooms,
            tokens,
            auth_code,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> Result<AuthSession, AuthError> {
        // 1. 入力値の検証
        let account_id = AccountId::new(input.account_id)?;
        let password = Password::new(input.password)?;
        let nickname = Nickname::new(input.nickname)?;

        // 2. 重複チェック
        if self.users.find_by_account_id(&account_id).await?.is_some() {
            tracing::warn!("Sign up rejected, account id already exists: {}", account_id);
            return Err(AuthError::DuplicateAccountId(account_id.to_string()));
        }

        // 3. 認証コードの確認
        if input.auth_code.trim() != self.auth_code {
            tracing::warn!("Sign up rejected, invalid auth code for {}", account_id);
            return Err(AuthError::InvalidAuthCode);
        }

        // 4. ユーザーと既定ルームの作成
        let now = Timestamp::now();
        let user = self
            .users
            .create(NewUser {
                account_id,
                password,
                nickname: nickname.clone(),
                created_at: now,
            })
            .await?;
        let room = self
            .rooms
            .create(NewRoom {
                code: RoomCodeFactory::generate(),
                name: RoomName::default_for(&nickname),
                owner_id: user.id,
                owner_name: nickname.to_string(),
                created_at: now,
            })
            .await?;
        let user = self.users.set_default_room(user.id, room.id).await?;

        // 5. トークン発行
        let tokens = self
            .tokens
            .issue(user.id, &user.account_id)
            .map_err(AuthError::TokenIssue)?;

        tracing::info!(
            "User signed up: {} (id: {}, default room: {})",
            user.account_id,
            user.id,
            room.id
        );
        Ok(AuthSession { user, tokens })
    }
}
