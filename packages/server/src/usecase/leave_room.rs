//! UseCase: ルーム退出
//!
//! 現在のルームから退出し、既定ルームに戻ります。自分が作成したルームからは退出できません。

use std::sync::Arc;

use crate::domain::{Room, RoomRepository, Timestamp, UserId, UserRepository};

use super::error::RoomAccessError;

/// ルーム退出のユースケース
pub struct LeaveRoomUseCase {
    users: Arc<dyn UserRepository>,
    rooms: Arc<dyn RoomRepository>,
}

impl LeaveRoomUseCase {
    pub fn new(users: Arc<dyn UserRepository>, rooms: Arc<dyn RoomRepository>) -> Self {
        Self { users, rooms }
    }

    /// 退出後の現在のルーム（既定ルーム）を返す
    pub async fn execute(&self, user_id: UserId) -> Result<Room, RoomAccessError> {
        let user = self.users.find_by_id(user_id).await?;
        let current = user.current_room_id().ok_or(RoomAccessError::NoCurrentRoom)?;

        self.rooms.leave(current, user_id, Timestamp::now()).await?;
        let user = self.users.deactivate_room(user_id, current).await?;
        tracing::info!("User {} left room {}", user_id, current);

        let default_room = user.default_room_id.ok_or(RoomAccessError::NoCurrentRoom)?;
        Ok(self.rooms.find_by_id(default_room).await?)
    }
}
