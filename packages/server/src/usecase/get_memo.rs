//! UseCase: メモ取得

use std::sync::Arc;

use crate::domain::{Memo, MemoId, MemoRepository, RoomRepository, UserId};

use super::{error::MemoError, memo_access::load_visible_memo};

/// メモ取得のユースケース
pub struct GetMemoUseCase {
    memos: Arc<dyn MemoRepository>,
    rooms: Arc<dyn RoomRepository>,
}

impl GetMemoUseCase {
    pub fn new(memos: Arc<dyn MemoRepository>, rooms: Arc<dyn RoomRepository>) -> Self {
        Self { memos, rooms }
    }

    /// 閲覧できないメモは存在しないものとして扱う
    pub async fn execute(&self, user_id: UserId, memo_id: MemoId) -> Result<Memo, MemoError> {
        load_visible_memo(self.memos.as_ref(), self.rooms.as_ref(), user_id, memo_id)
            .await?
            .ok_or(MemoError::NotFound(memo_id))
    }
}
