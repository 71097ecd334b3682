//! UseCase: メモ一覧・地図マーカー

use std::sync::Arc;

use crate::domain::{
    MapMarker, Memo, MemoFilter, MemoRepository, RepositoryError, RoomId, RoomRepository, UserId,
};

use super::error::MemoError;

/// 一覧の絞り込み条件
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListMemosInput {
    /// 指定するとルーム内の全員のメモを返す（参加者のみ）
    pub room_id: Option<RoomId>,
    pub is_wishlist: Option<bool>,
}

/// メモ一覧のユースケース
pub struct ListMemosUseCase {
    memos: Arc<dyn MemoRepository>,
    rooms: Arc<dyn RoomRepository>,
}

impl ListMemosUseCase {
    pub fn new(memos: Arc<dyn MemoRepository>, rooms: Arc<dyn RoomRepository>) -> Self {
        Self { memos, rooms }
    }

    /// ピン留めが先頭、その後は新しい順
    pub async fn execute(
        &self,
        user_id: UserId,
        input: ListMemosInput,
    ) -> Result<Vec<Memo>, MemoError> {
        let filter = match input.room_id {
            Some(room_id) => {
                self.ensure_participant(user_id, room_id).await?;
                MemoFilter {
                    author: None,
                    room_id: Some(room_id),
                    is_wishlist: input.is_wishlist,
                }
            }
            None => MemoFilter {
                author: Some(user_id),
                room_id: None,
                is_wishlist: input.is_wishlist,
            },
        };
        Ok(self.memos.list(filter).await?)
    }

    /// 位置情報のあるメモだけを地図マーカーとして返す
    pub async fn map_markers(
        &self,
        user_id: UserId,
        input: ListMemosInput,
    ) -> Result<Vec<MapMarker>, MemoError> {
        let memos = self.execute(user_id, input).await?;
        Ok(memos.iter().filter_map(Memo::to_map_marker).collect())
    }

    async fn ensure_participant(&self, user_id: UserId, room_id: RoomId) -> Result<(), MemoError> {
        match self.rooms.find_by_id(room_id).await {
            Ok(room) if room.is_participant(user_id) => Ok(()),
            Ok(_) | Err(RepositoryError::RoomNotFound(_)) => {
                Err(MemoError::RoomNotAccessible(room_id))
            }
            Err(e) => Err(e.into()),
        }
    }
}
