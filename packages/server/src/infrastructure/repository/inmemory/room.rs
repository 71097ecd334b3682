use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::Table;
use crate::domain::{
    NewRoom, Participant, RepositoryError, Room, RoomCode, RoomId, RoomRepository, Timestamp,
    UserId,
};

/// インメモリ Room Repository 実装
///
/// ドメイン層の RoomRepository trait を実装します（依存性の逆転）。
#[derive(Clone)]
pub struct InMemoryRoomRepository {
    rooms: Arc<Mutex<Table<Room>>>,
    /// Capacity given to newly created rooms
    participant_capacity: usize,
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::with_capacity(crate::domain::entity::DEFAULT_PARTICIPANT_CAPACITY)
    }
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository whose new rooms hold at most `participant_capacity` users
    pub fn with_capacity(participant_capacity: usize) -> Self {
        Self {
            rooms: Arc::new(Mutex::new(Table::default())),
            participant_capacity,
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn create(&self, new_room: NewRoom) -> Result<Room, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        if rooms.rows.values().any(|r| r.code == new_room.code) {
            return Err(RepositoryError::DuplicateRoomCode(
                new_room.code.to_string(),
            ));
        }
        let id = rooms.next_id();
        let room = Room::with_capacity(RoomId::new(id), new_room, self.participant_capacity);
        rooms.rows.insert(id, room.clone());
        Ok(room)
    }

    async fn find_by_id(&self, id: RoomId) -> Result<Room, RepositoryError> {
        let rooms = self.rooms.lock().await;
        rooms
            .rows
            .get(&id.value())
            .cloned()
            .ok_or(RepositoryError::RoomNotFound(id))
    }

    async fn find_by_code(&self, code: &RoomCode) -> Result<Option<Room>, RepositoryError> {
        let rooms = self.rooms.lock().await;
        Ok(rooms.rows.values().find(|r| &r.code == code).cloned())
    }

    async fn add_participant(
        &self,
        id: RoomId,
        participant: Participant,
    ) -> Result<Room, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        rooms.modify(
            id.value(),
            || RepositoryError::RoomNotFound(id),
            |room| Ok(room.add_participant(participant)?),
        )
    }

    async fn leave(
        &self,
        id: RoomId,
        user_id: UserId,
        now: Timestamp,
    ) -> Result<Room, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        rooms.modify(
            id.value(),
            || RepositoryError::RoomNotFound(id),
            |room| Ok(room.leave(user_id, now)?),
        )
    }

    async fn kick(
        &self,
        id: RoomId,
        actor: UserId,
        target: UserId,
        now: Timestamp,
    ) -> Result<Room, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        rooms.modify(
            id.value(),
            || RepositoryError::RoomNotFound(id),
            |room| Ok(room.kick(actor, target, now)?),
        )
    }
}
