use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::Table;
use crate::domain::{
    AccountId, NewUser, ProfileChange, RepositoryError, RoomId, Timestamp, User, UserId,
    UserRepository,
};

/// インメモリ User Repository 実装
#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Table<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().await;
        if users
            .rows
            .values()
            .any(|u| u.account_id == new_user.account_id)
        {
            return Err(RepositoryError::DuplicateAccountId(
                new_user.account_id.to_string(),
            ));
        }
        let id = users.next_id();
        let user = User::new(UserId::new(id), new_user);
        users.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<User, RepositoryError> {
        let users = self.users.lock().await;
        users
            .rows
            .get(&id.value())
            .cloned()
            .ok_or(RepositoryError::UserNotFound(id))
    }

    async fn find_by_account_id(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().await;
        Ok(users
            .rows
            .values()
            .find(|u| &u.account_id == account_id)
            .cloned())
    }

    async fn set_default_room(&self, id: UserId, room_id: RoomId) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().await;
        users.modify(
            id.value(),
            || RepositoryError::UserNotFound(id),
            |user| {
                user.default_room_id = Some(room_id);
                Ok(())
            },
        )
    }

    async fn activate_room(&self, id: UserId, room_id: RoomId) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().await;
        users.modify(
            id.value(),
            || RepositoryError::UserNotFound(id),
            |user| {
                user.active_room_id = Some(room_id);
                Ok(())
            },
        )
    }

    async fn deactivate_room(
        &self,
        id: UserId,
        room_id: RoomId,
    ) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().await;
        users.modify(
            id.value(),
            || RepositoryError::UserNotFound(id),
            |user| {
                if user.active_room_id == Some(room_id) {
                    user.active_room_id = None;
                }
                Ok(())
            },
        )
    }

    async fn update_profile(
        &self,
        id: UserId,
        change: ProfileChange,
        now: Timestamp,
    ) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().await;
        users.modify(
            id.value(),
            || RepositoryError::UserNotFound(id),
            |user| {
                user.apply_profile_change(change, now);
                Ok(())
            },
        )
    }
}
