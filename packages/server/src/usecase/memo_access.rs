//! メモの閲覧権限チェックと平均評価の再計算
//!
//! メモは作成者と、メモが属するルームの参加者だけが閲覧できます。

use crate::domain::{
    CommentRepository, Memo, MemoId, MemoRepository, RepositoryError, RoomRepository, UserId,
    entity::average_rating,
};

/// Load a memo the user may see. `Ok(None)` when it is missing or hidden from them.
pub(crate) async fn load_visible_memo(
    memos: &dyn MemoRepository,
    rooms: &dyn RoomRepository,
    user_id: UserId,
    memo_id: MemoId,
) -> Result<Option<Memo>, RepositoryError> {
    let memo = match memos.find_by_id(memo_id).await {
        Ok(memo) => memo,
        Err(RepositoryError::MemoNotFound(_)) => return Ok(None),
        Err(e) => return Err(e),
    };
    if memo.is_written_by(user_id) {
        return Ok(Some(memo));
    }
    match rooms.find_by_id(memo.room_id).await {
        Ok(room) if room.is_participant(user_id) => Ok(Some(memo)),
        Ok(_) | Err(RepositoryError::RoomNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Recompute a memo's comment average after its comments changed.
///
/// Another request may store an average computed from an older comment list,
/// so the comments are read again after each write until the stored value
/// matches them. Returns `false` when the memo no longer exists.
pub(crate) async fn refresh_average_rating(
    memos: &dyn MemoRepository,
    comments: &dyn CommentRepository,
    memo_id: MemoId,
) -> Result<bool, RepositoryError> {
    let mut average = average_rating(&comments.list_by_memo(memo_id).await?);
    loop {
        match memos.set_average_rating(memo_id, average).await {
            Ok(_) => {}
            Err(RepositoryError::MemoNotFound(_)) => return Ok(false),
            Err(e) => return Err(e),
        }
        let latest = average_rating(&comments.list_by_memo(memo_id).await?);
        if latest == average {
            return Ok(true);
        }
        average = latest;
    }
}
