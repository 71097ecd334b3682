//! UseCase: コメント一覧

use std::sync::Arc;

use crate::domain::{CommentRepository, MemoId, MemoRepository, RoomRepository, UserId, UserRepository};

use super::{
    create_comment::{CommentView, resolve_user_name},
    error::CommentError,
    memo_access::load_visible_memo,
};

/// コメント一覧のユースケース
pub struct GetCommentsUseCase {
    users: Arc<dyn UserRepository>,
    memos: Arc<dyn MemoRepository>,
    comments: Arc<dyn CommentRepository>,
    rooms: Arc<dyn RoomRepository>,
}

impl GetCommentsUseCase {
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

    /// 新しい順
    pub async fn execute(
        &self,
        user_id: UserId,
        memo_id: MemoId,
    ) -> Result<Vec<CommentView>, CommentError> {
        load_visible_memo(self.memos.as_ref(), self.rooms.as_ref(), user_id, memo_id)
            .await?
            .ok_or(CommentError::MemoNotFound(memo_id))?;

        let comments = self.comments.list_by_memo(memo_id).await?;
        let mut views = Vec::with_capacity(comments.len());
        for comment in comments {
            let user_name = resolve_user_name(self.users.as_ref(), comment.user_id).await?;
            views.push(CommentView { comment, user_name });
        }
        Ok(views)
    }
}
