//! InMemory Repository 実装
//!
//! HashMap をインメモリ DB として使用します。ID はリポジトリごとの連番で、1 から採番されます。
//!
//! ## 技術的負債
//!
//! ドメインモデルを直接ストレージとして使用しています。
//! PostgreSQL などの DBMS を実装する際は、DB Row → DTO → ドメインモデルの変換層が必要になります。

mod comment;
mod memo;
mod room;
mod user;

pub use comment::InMemoryCommentRepository;
pub use memo::InMemoryMemoRepository;
pub use room::InMemoryRoomRepository;
pub use user::InMemoryUserRepository;

use std::collections::HashMap;

/// Rows of one table plus its id sequence.
#[derive(Debug)]
struct Table<T> {
    rows: HashMap<u64, T>,
    last_id: u64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }
}

impl<T: Clone> Table<T> {
    /// Apply `change` to a copy of the row and store it only if the change succeeds.
    /// Callers hold the table lock, so the read and the write happen as one step.
    fn modify<E>(
        &mut self,
        id: u64,
        not_found: impl FnOnce() -> E,
        change: impl FnOnce(&mut T) -> Result<(), E>,
    ) -> Result<T, E> {
        let row = self.rows.get_mut(&id).ok_or_else(not_found)?;
        let mut updated = row.clone();
        change(&mut updated)?;
        *row = updated.clone();
        Ok(updated)
    }
}
