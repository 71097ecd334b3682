use std::{cmp::Reverse, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::Table;
use crate::domain::{Comment, CommentId, CommentRepository, MemoId, NewComment, RepositoryError};

/// インメモリ Comment Repository 実装
#[derive(Default, Clone)]
pub struct InMemoryCommentRepository {
    comments: Arc<Mutex<Table<Comment>>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, RepositoryError> {
        let mut comments = self.comments.lock().await;
        let id = comments.next_id();
        let comment = Comment::new(CommentId::new(id), new_comment);
        comments.rows.insert(id, comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: CommentId) -> Result<Comment, RepositoryError> {
        let comments = self.comments.lock().await;
        comments
            .rows
            .get(&id.value())
            .cloned()
            .ok_or(RepositoryError::CommentNotFound(id))
    }

    async fn list_by_memo(&self, memo_id: MemoId) -> Result<Vec<Comment>, RepositoryError> {
        let comments = self.comments.lock().await;
        let mut found: Vec<Comment> = comments
            .rows
            .values()
            .filter(|c| c.memo_id == memo_id)
            .cloned()
            .collect();
        found.sort_by_key(|c| (Reverse(c.created_at), Reverse(c.id)));
        Ok(found)
    }

    async fn delete(&self, id: CommentId) -> Result<(), RepositoryError> {
        let mut comments = self.comments.lock().await;
        comments
            .rows
            .remove(&id.value())
            .map(|_| ())
            .ok_or(RepositoryError::CommentNotFound(id))
    }

    async fn delete_by_memo(&self, memo_id: MemoId) -> Result<usize, RepositoryError> {
        let mut comments = self.comments.lock().await;
        let before = comments.rows.len();
        comments.rows.retain(|_, c| c.memo_id != memo_id);
        Ok(before - comments.rows.len())
    }
}
