//! UseCase: コメント削除
//!
//! 自分のコメントだけを削除できます。他人のコメントは存在しないものとして扱います。

use std::sync::Arc;

use crate::domain::{CommentId, CommentRepository, MemoRepository, UserId};

use super::{error::CommentError, memo_access::refresh_average_rating};

/// コメント削除のユースケース
pub struct DeleteCommentUseCase {
    memos: Arc<dyn MemoRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(memos: Arc<dyn MemoRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { memos, comments }
    }

    pub async fn execute(&self, user_id: UserId, comment_id: CommentId) -> Result<(), CommentError> {
        let comment = self.comments.find_by_id(comment_id).await?;
        if !comment.is_written_by(user_id) {
            tracing::warn!("User {} tried to delete comment {}", user_id, comment_id);
            return Err(CommentError::NotFound(comment_id));
        }

        self.comments.delete(comment_id).await?;
        // a memo deleted in the meantime has no average to keep
        refresh_average_rating(self.memos.as_ref(), self.comments.as_ref(), comment.memo_id)
            .await?;
        tracing::info!("Comment {} deleted by user {}", comment_id, user_id);
        Ok(())
    }
}
