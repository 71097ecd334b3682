//! UseCase: コメント作成
//!
//! コメントを追加した後、メモの平均評価を再計算します。

use std::sync::Arc;

use crate::domain::{
    Comment, CommentContent, CommentRepository, MemoId, MemoRepository, NewComment, Rating,
    RepositoryError, RoomRepository, Timestamp, UserId, UserRepository,
};

use super::{
    error::CommentError,
    memo_access::{load_visible_memo, refresh_average_rating},
};

/// Shown for comments whose author no longer exists
pub const UNKNOWN_USER_NAME: &str = "unknown";

/// コメントと作成者の表示名
#[derive(Debug, Clone, PartialEq)]
pub struct CommentView {
    pub comment: Comment,
    pub user_name: String,
}

/// コメント作成者の表示名を解決する
pub(crate) async fn resolve_user_name(
    users: &dyn UserRepository,
    user_id: UserId,
) -> Result<String, RepositoryError> {
    match users.find_by_id(user_id).await {
        Ok(user) => Ok(user.display_name().to_string()),
        Err(RepositoryError::UserNotFound(_)) => Ok(UNKNOWN_USER_NAME.to_string()),
        Err(e) => Err(e),
    }
}

/// コメント作成のユースケース
pub struct CreateCommentUseCase {
    users: Arc<dyn UserRepository>,
    memos: Arc<dyn MemoRepository>,
    comments: Arc<dyn CommentRepository>,
    rooms: Arc<dyn RoomRepository>,
}

impl CreateCommentUseCase {
    pub fn new(
        users: Arc<dyn UserRepository>,
        memos: Arc<dyn MemoRepository>,
        comments: Arc<dyn CommentRepository>,
        rooms: Arc<dyn RoomRepository>,
    ) -> Self {
        Self {
            users,
            memos,
            comments,
            rooms,
        }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        memo_id: MemoId,
        content: String,
        rating: Option<u8>,
    ) -> Result<CommentView, CommentError> {
        let content = CommentContent::new(content)?;
        let rating = Rating::new(rating.unwrap_or(0))?;

        load_visible_memo(self.memos.as_ref(), self.rooms.as_ref(), user_id, memo_id)
            .await?
            .ok_or(CommentError::MemoNotFound(memo_id))?;

        let comment = self
            .comments
            .create(NewComment {
                memo_id,
                user_id,
                content,
                rating,
                created_at: Timestamp::now(),
            })
            .await?;
        let memo_exists =
            refresh_average_rating(self.memos.as_ref(), self.comments.as_ref(), memo_id).await?;
        if !memo_exists {
            // the memo was deleted while the comment was being stored
            match self.comments.delete(comment.id).await {
                Ok(()) | Err(RepositoryError::CommentNotFound(_)) => {}
                Err(e) => return Err(e.into()),
            }
            return Err(CommentError::MemoNotFound(memo_id));
        }

        let user_name = resolve_user_name(self.users.as_ref(), user_id).await?;
        tracing::info!("Comment {} added to memo {} by user {}", comment.id, memo_id, user_id);
        Ok(CommentView { comment, user_name })
    }
}
