//! Domain factories for creating domain entities and value objects.

use super::value_object::RoomCode;

/// Factory for generating RoomCode instances.
///
/// Keeps code generation apart from the validation done by `RoomCode::new`.
pub struct RoomCodeFactory;

impl RoomCodeFactory {
    /// Generate a new invitation code from a random UUID v4.
    pub fn generate() -> RoomCode {
        RoomCode::from_uuid(uuid::Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_code_factory_generate() {
        // テスト項目: RoomCodeFactory::generate() で UUID v4 形式のルームコードを生成できる
        // when (操作):
        let code = RoomCodeFactory::generate();

        // then (期待する結果): 検証を通り、UUID の標準長（ハイフン含む）
        assert_eq!(code.as_str().len(), 36);
        assert_eq!(RoomCode::new(code.as_str().to_string()), Ok(code));
    }

    #[test]
    fn test_room_code_factory_generate_uniqueness() {
        // テスト項目: RoomCodeFactory::generate() は毎回異なるコードを生成する
        // when (操作):
        let code1 = RoomCodeFactory::generate();
        let code2 = RoomCodeFactory::generate();

        // then (期待する結果):
        assert_ne!(code1, code2);
    }
}
