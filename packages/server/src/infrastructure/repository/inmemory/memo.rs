use std::{cmp::Reverse, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::Table;
use crate::domain::{
    Memo, MemoFields, MemoFilter, MemoId, MemoRepository, NewMemo, RepositoryError, Timestamp,
};

/// インメモリ Memo Repository 実装
#[derive(Default, Clone)]
pub struct InMemoryMemoRepository {
    memos: Arc<Mutex<Table<Memo>>>,
}

impl InMemoryMemoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemoRepository for InMemoryMemoRepository {
    async fn create(&self, new_memo: NewMemo) -> Result<Memo, RepositoryError> {
        let mut memos = self.memos.lock().await;
        let id = memos.next_id();
        let memo = Memo::new(MemoId::new(id), new_memo);
        memos.rows.insert(id, memo.clone());
        Ok(memo)
    }

    async fn find_by_id(&self, id: MemoId) -> Result<Memo, RepositoryError> {
        let memos = self.memos.lock().await;
        memos
            .rows
            .get(&id.value())
            .cloned()
            .ok_or(RepositoryError::MemoNotFound(id))
    }

    async fn list(&self, filter: MemoFilter) -> Result<Vec<Memo>, RepositoryError> {
        let memos = self.memos.lock().await;
        let mut found: Vec<Memo> = memos
            .rows
            .values()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect();
        // ties on created_at fall back to the id so the order is stable
        found.sort_by_key(|m| (Reverse(m.fields.is_pinned), Reverse(m.created_at), Reverse(m.id)));
        Ok(found)
    }

    async fn update_fields(
        &self,
        id: MemoId,
        fields: MemoFields,
        now: Timestamp,
    ) -> Result<Memo, RepositoryError> {
        let mut memos = self.memos.lock().await;
        memos.modify(
            id.value(),
            || RepositoryError::MemoNotFound(id),
            |memo| {
                memo.update(fields, now);
                Ok(())
            },
        )
    }

    async fn set_average_rating(
        &self,
        id: MemoId,
        average_rating: Option<f64>,
    ) -> Result<Memo, RepositoryError> {
        let mut memos = self.memos.lock().await;
        memos.modify(
            id.value(),
            || RepositoryError::MemoNotFound(id),
            |memo| {
                memo.average_rating = average_rating;
                Ok(())
            },
        )
    }

    async fn delete(&self, id: MemoId) -> Result<(), RepositoryError> {
        let mut memos = self.memos.lock().await;
        memos
            .rows
            .remove(&id.value())
            .map(|_| ())
            .ok_or(RepositoryError::MemoNotFound(id))
    }
}
