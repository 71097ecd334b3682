//! UseCase: 参加者の強制退出
//!
//! オーナーだけが実行できます。退出させられたユーザーがそのルームを
//! 現在のルームにしていた場合は既定ルームに戻ります。

use std::sync::Arc;

use crate::domain::{
    RepositoryError, Room, RoomId, RoomRepository, Timestamp, UserId, UserRepository,
};

use super::error::RoomAccessError;

/// 参加者強制退出のユースケース
pub struct KickParticipantUseCase {
    users: Arc<dyn UserRepository>,
    rooms: Arc<dyn RoomRepository>,
}

impl KickParticipantUseCase {
    pub fn new(users: Arc<dyn UserRepository>, rooms: Arc<dyn RoomRepository>) -> Self {
        Self { users, rooms }
    }

    /// 更新後のルームを返す
    pub async fn execute(
        &self,
        actor: UserId,
        room_id: RoomId,
        target: UserId,
    ) -> Result<Room, RoomAccessError> {
        let room = self.rooms.find_by_id(room_id).await?;
        if !room.is_participant(actor) {
            return Err(RoomAccessError::NotParticipant(room_id));
        }
        let room = self
            .rooms
            .kick(room_id, actor, target, Timestamp::now())
            .await?;

        match self.users.deactivate_room(target, room_id).await {
            Ok(_) | Err(RepositoryError::UserNotFound(_)) => {}
            Err(e) => return Err(e.into()),
        }

        tracing::info!("User {} removed from room {} by {}", target, room_id, actor);
        Ok(room)
    }
}
