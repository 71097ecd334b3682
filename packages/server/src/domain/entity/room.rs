use crate::domain::{
    error::RoomError,
    value_object::{RoomCode, RoomId, RoomName, Timestamp, UserId},
};

/// Default maximum number of participants allowed in a room
pub const DEFAULT_PARTICIPANT_CAPACITY: usize = 10;

/// A collaboration space whose participants share memos
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Room identifier
    pub id: RoomId,
    /// Invitation code other users join with
    pub code: RoomCode,
    pub name: RoomName,
    pub owner_id: UserId,
    /// Participants in join order, owner first
    pub participants: Vec<Participant>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Maximum number of participants allowed (default: 10)
    pub participant_capacity: usize,
}

/// A room that has not been stored yet. Its owner becomes the first participant.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoom {
    pub code: RoomCode,
    pub name: RoomName,
    pub owner_id: UserId,
    pub owner_name: String,
    pub created_at: Timestamp,
}

impl Room {
    /// Create a room with the owner as its only participant
    pub fn new(id: RoomId, new_room: NewRoom) -> Self {
        Self::with_capacity(id, new_room, DEFAULT_PARTICIPANT_CAPACITY)
    }

    /// Create a room with a custom capacity
    pub fn with_capacity(id: RoomId, new_room: NewRoom, participant_capacity: usize) -> Self {
        let owner = Participant::new(
            new_room.owner_id,
            new_room.owner_name,
            true,
            new_room.created_at,
        );
        Self {
            id,
            code: new_room.code,
            name: new_room.name,
            owner_id: new_room.owner_id,
            participants: vec![owner],
            created_at: new_room.created_at,
            updated_at: new_room.created_at,
            participant_capacity,
        }
    }

    /// Add a participant to the room
    ///
    /// # Errors
    ///
    /// Returns `RoomError::AlreadyParticipant` if the user is already in the room,
    /// or `RoomError::CapacityExceeded` if the room is at full capacity
    pub fn add_participant(&mut self, participant: Participant) -> Result<(), RoomError> {
        if self.is_participant(participant.user_id) {
            return Err(RoomError::AlreadyParticipant(participant.user_id));
        }
        if self.participants.len() >= self.participant_capacity {
            return Err(RoomError::CapacityExceeded {
                capacity: self.participant_capacity,
                current: self.participants.len(),
            });
        }
        self.updated_at = participant.joined_at;
        self.participants.push(participant);
        Ok(())
    }

    /// Remove a participant from the room by user ID
    pub fn remove_participant(&mut self, user_id: UserId) -> Result<Participant, RoomError> {
        let index = self
            .participants
            .iter()
            .position(|p| p.user_id == user_id)
            .ok_or(RoomError::ParticipantNotFound(user_id))?;
        Ok(self.participants.remove(index))
    }

    /// A participant leaves on their own.
    pub fn leave(&mut self, user_id: UserId, now: Timestamp) -> Result<(), RoomError> {
        if self.is_owner(user_id) {
            return Err(RoomError::OwnerCannotLeave);
        }
        self.remove_participant(user_id)?;
        self.updated_at = now;
        Ok(())
    }

    /// The owner removes another participant.
    pub fn kick(&mut self, actor: UserId, target: UserId, now: Timestamp) -> Result<(), RoomError> {
        if !self.is_owner(actor) {
            return Err(RoomError::NotOwner);
        }
        if self.is_owner(target) {
            return Err(RoomError::OwnerCannotBeKicked);
        }
        self.remove_participant(target)?;
        self.updated_at = now;
        Ok(())
    }

    pub fn is_participant(&self, user_id: UserId) -> bool {
        self.get_participant(user_id).is_some()
    }

    pub fn is_owner(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }

    /// Get a participant by user ID
    pub fn get_participant(&self, user_id: UserId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.user_id == user_id)
    }
}

/// Represents a participant in a room
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub user_id: UserId,
    /// Nickname at the time of joining
    pub name: String,
    pub is_owner: bool,
    pub joined_at: Timestamp,
}

impl Participant {
    /// Create a new participant
    pub fn new(user_id: UserId, name: String, is_owner: bool, joined_at: Timestamp) -> Self {
        Self {
            user_id,
            name,
            is_owner,
            joined_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::factory::RoomCodeFactory;

    const OWNER: UserId = UserId::new(1);

    fn create_room(capacity: usize) -> Room {
        Room::with_capacity(
            RoomId::new(1),
            NewRoom {
                code: RoomCodeFactory::generate(),
                name: RoomName::new("Alice's room".to_string()).unwrap(),
                owner_id: OWNER,
                owner_name: "Alice".to_string(),
                created_at: Timestamp::new(1000),
            },
            capacity,
        )
    }

    fn participant(id: u64, name: &str) -> Participant {
        Participant::new(UserId::new(id), name.to_string(), false, Timestamp::new(2000))
    }

    #[test]
    fn test_room_new_has_owner_as_participant() {
        // テスト項目: 新しい Room はオーナーだけが参加した状態で作成される
        // when (操作):
        let room = create_room(DEFAULT_PARTICIPANT_CAPACITY);

        // then (期待する結果):
        assert_eq!(room.participants.len(), 1);
        assert!(room.participants[0].is_owner);
        assert!(room.is_owner(OWNER));
        assert!(room.is_participant(OWNER));
        assert_eq!(room.created_at, Timestamp::new(1000));
    }

    #[test]
    fn test_room_add_participant() {
        // テスト項目: 参加者を追加できる
        // given (前提条件):
        let mut room = create_room(10);

        // when (操作):
        let result = room.add_participant(participant(2, "Bob"));

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(room.participants.len(), 2);
        assert_eq!(room.get_participant(UserId::new(2)).unwrap().name, "Bob");
        assert_eq!(room.updated_at, Timestamp::new(2000));
    }

    #[test]
    fn test_room_add_participant_twice_fails() {
        // テスト項目: 同じユーザーは二重に参加できない
        // given (前提条件):
        let mut room = create_room(10);
        room.add_participant(participant(2, "Bob")).unwrap();

        // when (操作):
        let result = room.add_participant(participant(2, "Bob"));

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::AlreadyParticipant(UserId::new(2))));
        assert_eq!(room.participants.len(), 2);
    }

    #[test]
    fn test_room_capacity_exceeded() {
        // テスト項目: 定員を超えて参加者を追加できない
        // given (前提条件): 定員 2 のルームにオーナーと Bob
        let mut room = create_room(2);
        room.add_participant(participant(2, "Bob")).unwrap();

        // when (操作):
        let result = room.add_participant(participant(3, "Carol"));

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RoomError::CapacityExceeded {
                capacity: 2,
                current: 2
            })
        );
    }

    #[test]
    fn test_room_leave() {
        // テスト項目: 参加者は退出でき、オーナーは退出できない
        // given (前提条件):
        let mut room = create_room(10);
        room.add_participant(participant(2, "Bob")).unwrap();

        // when (操作):
        let bob_leaves = room.leave(UserId::new(2), Timestamp::new(3000));
        let owner_leaves = room.leave(OWNER, Timestamp::new(3000));

        // then (期待する結果):
        assert!(bob_leaves.is_ok());
        assert_eq!(owner_leaves, Err(RoomError::OwnerCannotLeave));
        assert_eq!(room.participants.len(), 1);
        assert_eq!(room.updated_at, Timestamp::new(3000));
    }

    #[test]
    fn test_room_leave_non_participant_fails() {
        // テスト項目: 参加していないユーザーは退出できない
        let mut room = create_room(10);
        assert_eq!(
            room.leave(UserId::new(9), Timestamp::new(3000)),
            Err(RoomError::ParticipantNotFound(UserId::new(9)))
        );
    }

    #[test]
    fn test_room_kick_rules() {
        // テスト項目: オーナーだけが他の参加者を退出させられる
        // given (前提条件):
        let mut room = create_room(10);
        room.add_participant(participant(2, "Bob")).unwrap();
        room.add_participant(participant(3, "Carol")).unwrap();
        let now = Timestamp::new(4000);

        // when (操作) / then (期待する結果):
        assert_eq!(
            room.kick(UserId::new(2), UserId::new(3), now),
            Err(RoomError::NotOwner)
        );
        assert_eq!(room.kick(OWNER, OWNER, now), Err(RoomError::OwnerCannotBeKicked));
        assert_eq!(
            room.kick(OWNER, UserId::new(9), now),
            Err(RoomError::ParticipantNotFound(UserId::new(9)))
        );
        assert_eq!(room.kick(OWNER, UserId::new(3), now), Ok(()));
        assert!(!room.is_participant(UserId::new(3)));
        assert_eq!(room.participants.len(), 2);
    }
}
