//! UseCase: メモ削除
//!
//! メモを削除すると、そのメモのコメントもすべて削除されます。

use std::sync::Arc;

use crate::domain::{CommentRepository, MemoId, MemoRepository, RoomRepository, UserId};

use super::{error::MemoError, memo_access::load_visible_memo};

/// メモ削除のユースケース（作成者のみ）
pub struct DeleteMemoUseCase {
    memos: Arc<dyn MemoRepository>,
    comments: Arc<dyn CommentRepository>,
    rooms: Arc<dyn RoomRepository>,
}

impl DeleteMemoUseCase {
    pub fn new(
        memos: Arc<dyn MemoRepository>,
        comments: Arc<dyn CommentRepository>,
        rooms: Arc<dyn RoomRepository>,
    ) -> Self {
        Self {
            memos,
            comments,
            rooms,
        }
    }

    pub async fn execute(&self, user_id: UserId, memo_id: MemoId) -> Result<(), MemoError> {
        let memo = load_visible_memo(self.memos.as_ref(), self.rooms.as_ref(), user_id, memo_id)
            .await?
            .ok_or(MemoError::NotFound(memo_id))?;
        if !memo.is_written_by(user_id) {
            return Err(MemoError::NotAuthor(memo_id));
        }

        // the memo goes first so a comment stored after this point sees it missing
        self.memos.delete(memo_id).await?;
        let removed = self.comments.delete_by_memo(memo_id).await?;
        tracing::info!(
            "Memo {} deleted by user {} ({} comments removed)",
            memo_id,
            user_id,
            removed
        );
        Ok(())
    }
}
