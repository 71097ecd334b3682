//! UseCase: メモ作成
//!
//! ### どのような状況を想定しているか
//! - 正常系：ルーム未指定なら現在のルームに作成される
//! - 異常系：参加していないルームへの作成、入力値の不正

use std::sync::Arc;

use crate::domain::{
    Memo, MemoDraft, MemoRepository, NewMemo, RoomId, RoomRepository, Timestamp, UserId,
    UserRepository,
};

use super::error::MemoError;

/// メモ作成のユースケース
pub struct CreateMemoUseCase {
    users: Arc<dyn UserRepository>,
    memos: Arc<dyn MemoRepository>,
    rooms: Arc<dyn RoomRepository>,
}

impl CreateMemoUseCase {
    pub fn new(
        users: Arc<dyn UserRepository>,
        memos: Arc<dyn MemoRepository>,
        rooms: Arc<dyn RoomRepository>,
    ) -> Self {
        Self {
            users,
            memos,
            rooms,
        }
    }

    /// メモを作成する
    ///
    /// # Arguments
    ///
    /// * `user_id` - 作成者
    /// * `room_id` - 作成先のルーム。`None` なら作成者の現在のルーム
    /// * `draft` - 未検証の入力
    pub async fn execute(
        &self,
        user_id: UserId,
        room_id: Option<RoomId>,
        draft: MemoDraft,
    ) -> Result<Memo, MemoError> {
        let fields = draft.validate()?;

        let room_id = match room_id {
            Some(room_id) => room_id,
            None => self
                .users
                .find_by_id(user_id)
                .await?
                .current_room_id()
                .ok_or(MemoError::NoCurrentRoom)?,
        };
        let room = self.rooms.find_by_id(room_id).await?;
        if !room.is_participant(user_id) {
            tracing::warn!("User {} tried to write a memo in room {}", user_id, room_id);
            return Err(MemoError::RoomNotAccessible(room_id));
        }

        let memo = self
            .memos
            .create(NewMemo {
                user_id,
                room_id,
                fields,
                created_at: Timestamp::now(),
            })
            .await?;
        tracing::info!("Memo {} created by user {} in room {}", memo.id, user_id, room_id);
        Ok(memo)
    }
}
