//! UseCase テスト用の共通フィクスチャ

use std::sync::Arc;

use crate::{
    domain::{
        AccountId, AuthClaims, Memo, MemoDraft, MemoRepository, NewMemo, NewRoom, NewUser,
        Nickname, Participant, Password, Room, RoomCodeFactory, RoomId, RoomName, RoomRepository,
        Timestamp, TokenError, TokenKind, TokenPair, User, UserId, UserRepository,
        service::MockTokenService,
    },
    infrastructure::repository::{
        InMemoryCommentRepository, InMemoryMemoRepository, InMemoryRoomRepository,
        InMemoryUserRepository,
    },
};

pub const PASSWORD: &str = "password123";

/// インメモリ Repository 一式
pub struct TestRepositories {
    pub users: Arc<InMemoryUserRepository>,
    pub memos: Arc<InMemoryMemoRepository>,
    pub comments: Arc<InMemoryCommentRepository>,
    pub rooms: Arc<InMemoryRoomRepository>,
}

impl TestRepositories {
    pub fn new() -> Self {
        Self::with_room_capacity(crate::domain::entity::DEFAULT_PARTICIPANT_CAPACITY)
    }

    pub fn with_room_capacity(capacity: usize) -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            memos: Arc::new(InMemoryMemoRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
            rooms: Arc::new(InMemoryRoomRepository::with_capacity(capacity)),
        }
    }

    /// 既定ルーム付きのユーザーを作成する
    pub async fn sign_up(&self, account_id: &str) -> User {
        let nickname = Nickname::new(account_id.to_string()).unwrap();
        let user = self
            .users
            .create(NewUser {
                account_id: AccountId::new(account_id.to_string()).unwrap(),
                password: Password::new(PASSWORD.to_string()).unwrap(),
                nickname: nickname.clone(),
                created_at: Timestamp::new(1000),
            })
            .await
            .unwrap();
        let room = self
            .rooms
            .create(NewRoom {
                code: RoomCodeFactory::generate(),
                name: RoomName::default_for(&nickname),
                owner_id: user.id,
                owner_name: nickname.to_string(),
                created_at: Timestamp::new(1000),
            })
            .await
            .unwrap();
        self.users.set_default_room(user.id, room.id).await.unwrap()
    }

    /// ユーザーをルームに参加させ、アクティブなルームにする
    pub async fn join(&self, user: &User, room_id: RoomId) -> User {
        self.rooms
            .add_participant(
                room_id,
                Participant::new(
                    user.id,
                    user.nickname.to_string(),
                    false,
                    Timestamp::new(2000),
                ),
            )
            .await
            .unwrap();
        self.users.activate_room(user.id, room_id).await.unwrap()
    }

    /// ユーザーの既定ルームにメモを作成する
    pub async fn memo(&self, user: &User, title: &str) -> Memo {
        self.memos
            .create(NewMemo {
                user_id: user.id,
                room_id: user.default_room_id.unwrap(),
                fields: MemoDraft {
                    title: title.to_string(),
                    ..Default::default()
                }
                .validate()
                .unwrap(),
                created_at: Timestamp::now(),
            })
            .await
            .unwrap()
    }

    pub async fn room(&self, id: RoomId) -> Room {
        self.rooms.find_by_id(id).await.unwrap()
    }

    pub async fn user(&self, id: UserId) -> User {
        self.users.find_by_id(id).await.unwrap()
    }

    pub async fn user_by_account(&self, account_id: &str) -> Option<User> {
        self.users
            .find_by_account_id(&AccountId::new(account_id.to_string()).unwrap())
            .await
            .unwrap()
    }

    pub async fn stored_memo(&self, memo: &Memo) -> Option<Memo> {
        self.memos.find_by_id(memo.id).await.ok()
    }
}

/// `access-{id}` / `refresh-{id}` を発行し、`refresh-{id}` だけをリフレッシュトークンとして受け付ける
pub fn stub_token_service() -> Arc<MockTokenService> {
    let mut tokens = MockTokenService::new();
    tokens.expect_issue().returning(|user_id, _| {
        Ok(TokenPair {
            access_token: format!("access-{user_id}"),
            access_token_expires_at: Timestamp::new(10_000),
            refresh_token: format!("refresh-{user_id}"),
            refresh_token_expires_at: Timestamp::new(20_000),
        })
    });
    tokens.expect_verify().returning(|token, kind| {
        let prefix = match kind {
            TokenKind::Access => "access-",
            TokenKind::Refresh => "refresh-",
        };
        let id = token
            .strip_prefix(prefix)
            .and_then(|id| id.parse::<u64>().ok())
            .ok_or(TokenError::Invalid)?;
        Ok(AuthClaims {
            user_id: UserId::new(id),
            account_id: String::new(),
        })
    });
    Arc::new(tokens)
}
