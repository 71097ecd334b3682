use crate::domain::value_object::{CommentContent, CommentId, MemoId, Rating, Timestamp, UserId};

/// A comment on a memo, optionally carrying a star rating.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub memo_id: MemoId,
    pub user_id: UserId,
    pub content: CommentContent,
    pub rating: Rating,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub memo_id: MemoId,
    pub user_id: UserId,
    pub content: CommentContent,
    pub rating: Rating,
    pub created_at: Timestamp,
}

impl Comment {
    pub fn new(id: CommentId, new_comment: NewComment) -> Self {
        Self {
            id,
            memo_id: new_comment.memo_id,
            user_id: new_comment.user_id,
            content: new_comment.content,
            rating: new_comment.rating,
            created_at: new_comment.created_at,
            updated_at: new_comment.created_at,
        }
    }

    pub fn is_written_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Mean of the non-zero ratings, rounded to one decimal place.
///
/// Returns `None` when no comment carries a rating.
pub fn average_rating(comments: &[Comment]) -> Option<f64> {
    let rated: Vec<f64> = comments
        .iter()
        .filter(|c| c.rating.is_rated())
        .map(|c| f64::from(c.rating.value()))
        .collect();
    if rated.is_empty() {
        return None;
    }
    let mean = rated.iter().sum::<f64>() / rated.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}
