//! UseCase: ルーム取得（現在のルーム・ルーム詳細）

use std::sync::Arc;

use crate::domain::{Room, RoomId, RoomRepository, UserId, UserRepository};

use super::error::RoomAccessError;

/// ルーム取得のユースケース
pub struct GetRoomUseCase {
    users: Arc<dyn UserRepository>,
    rooms: Arc<dyn RoomRepository>,
}

impl GetRoomUseCase {
    pub fn new(users: Arc<dyn UserRepository>, rooms: Arc<dyn RoomRepository>) -> Self {
        Self { users, rooms }
    }

    /// 最後に参加したルーム。なければ既定ルーム
    pub async fn current(&self, user_id: UserId) -> Result<Room, RoomAccessError> {
        let user = self.users.find_by_id(user_id).await?;
        if let Some(active) = user.active_room_id {
            let room = self.rooms.find_by_id(active).await?;
            if room.is_participant(user_id) {
                return Ok(room);
            }
        }
        let default_room = user.default_room_id.ok_or(RoomAccessError::NoCurrentRoom)?;
        Ok(self.rooms.find_by_id(default_room).await?)
    }

    /// 参加者だけが詳細を取得できる
    pub async fn detail(&self, user_id: UserId, room_id: RoomId) -> Result<Room, RoomAccessError> {
        let room = self.rooms.find_by_id(room_id).await?;
        if !room.is_participant(user_id) {
            return Err(RoomAccessError::NotParticipant(room_id));
        }
        Ok(room)
    }
}
