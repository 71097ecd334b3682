//! UseCase: ルーム参加
//!
//! ### どのような状況を想定しているか
//! - 正常系：招待コードでルームに参加し、そのルームが現在のルームになる
//! - 正常系：既に参加しているルームなら現在のルームに切り替えるだけ
//! - 異常系：空のコード、存在しないコード、定員超過

use std::sync::Arc;

use crate::domain::{
    Participant, RepositoryError, Room, RoomCode, RoomError, RoomRepository, Timestamp, UserId,
    UserRepository,
};

use super::error::RoomAccessError;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    users: Arc<dyn UserRepository>,
    rooms: Arc<dyn RoomRepository>,
}

impl JoinRoomUseCase {
    pub fn new(users: Arc<dyn UserRepository>, rooms: Arc<dyn RoomRepository>) -> Self {
        Self { users, rooms }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        room_code: &str,
    ) -> Result<Room, RoomAccessError> {
        if room_code.trim().is_empty() {
            return Err(RoomAccessError::RoomCodeRequired);
        }
        let code = RoomCode::new(room_code.to_string())?;
        let room = self
            .rooms
            .find_by_code(&code)
            .await?
            .ok_or(RoomAccessError::RoomNotFound)?;
        let user = self.users.find_by_id(user_id).await?;

        let participant = Participant::new(
            user_id,
            user.display_name().to_string(),
            false,
            Timestamp::now(),
        );
        let room = match self.rooms.add_participant(room.id, participant).await {
            Ok(room) => {
                tracing::info!("User {} joined room {}", user_id, room.id);
                room
            }
            Err(RepositoryError::RoomRule(RoomError::AlreadyParticipant(_))) => {
                self.rooms.find_by_id(room.id).await?
            }
            Err(e) => return Err(e.into()),
        };

        self.users.activate_room(user_id, room.id).await?;
        Ok(room)
    }
}
