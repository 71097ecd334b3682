//! UseCase: メモ更新

use std::sync::Arc;

use crate::domain::{Memo, MemoDraft, MemoId, MemoRepository, RoomRepository, Timestamp, UserId};

use super::{error::MemoError, memo_access::load_visible_memo};

/// メモ更新のユースケース（作成者のみ）
pub struct UpdateMemoUseCase {
    memos: Arc<dyn MemoRepository>,
    rooms: Arc<dyn RoomRepository>,
}

impl UpdateMemoUseCase {
    pub fn new(memos: Arc<dyn MemoRepository>, rooms: Arc<dyn RoomRepository>) -> Self {
        Self { memos, rooms }
    }

    /// 変更可能な項目をすべて置き換える
    pub async fn execute(
        &self,
        user_id: UserId,
        memo_id: MemoId,
        draft: MemoDraft,
    ) -> Result<Memo, MemoError> {
        let memo = load_visible_memo(self.memos.as_ref(), self.rooms.as_ref(), user_id, memo_id)
            .await?
            .ok_or(MemoError::NotFound(memo_id))?;
        if !memo.is_written_by(user_id) {
            return Err(MemoError::NotAuthor(memo_id));
        }

        let fields = draft.validate()?;
        let memo = self
            .memos
            .update_fields(memo_id, fields, Timestamp::now())
            .await?;
        tracing::info!("Memo {} updated by user {}", memo.id, user_id);
        Ok(memo)
    }
}
