//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::ValueObjectError;

/// Maximum rating for memos and comments
pub const MAX_RATING: u8 = 5;

static PHONE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{1,4}[)]?[-\s.]?[(]?[0-9]{1,4}[)]?[-\s.]?[0-9]{1,9}$").ok()
});

/// Check a required text field: non-blank and at most `max` characters.
fn required_text(field: &'static str, value: String, max: usize) -> Result<String, ValueObjectError> {
    if value.trim().is_empty() {
        return Err(ValueObjectError::Empty { field });
    }
    optional_text(field, value, max)
}

/// Check an optional text field: at most `max` characters.
pub(crate) fn optional_text(field: &'static str, value: String, max: usize) -> Result<String, ValueObjectError> {
    let len = value.chars().count();
    if len > max {
        return Err(ValueObjectError::TooLong {
            field,
            max,
            actual: len,
        });
    }
    Ok(value)
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Get the inner u64 value.
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// User identifier assigned by the user repository.
    UserId
);
numeric_id!(
    /// Memo identifier assigned by the memo repository.
    MemoId
);
numeric_id!(
    /// Comment identifier assigned by the comment repository.
    CommentId
);
numeric_id!(
    /// Room identifier assigned by the room repository.
    RoomId
);

/// Room invitation code value object.
///
/// Shared with other users so they can join a room. Always a UUID string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomCode(String);

impl RoomCode {
    /// Create a new RoomCode.
    ///
    /// # Arguments
    ///
    /// * `code` - The room code string (UUID format)
    ///
    /// # Returns
    ///
    /// A Result containing the RoomCode or an error if validation fails
    pub fn new(code: String) -> Result<Self, ValueObjectError> {
        let code = code.trim().to_string();
        if code.is_empty() {
            return Err(ValueObjectError::Empty { field: "room_code" });
        }
        let uuid = uuid::Uuid::parse_str(&code)
            .map_err(|_| ValueObjectError::RoomCodeInvalidFormat(code.clone()))?;
        Ok(Self(uuid.hyphenated().to_string()))
    }

    /// Create a RoomCode from a UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Login account identifier chosen by the user at sign up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    pub const MAX_LEN: usize = 255;

    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        let id = required_text("account_id", id.trim().to_string(), Self::MAX_LEN)?;
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nickname(String);

impl Nickname {
    pub const MAX_LEN: usize = 100;

    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        let name = required_text("nickname", name.trim().to_string(), Self::MAX_LEN)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User password.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub const MIN_LEN: usize = 8;
    pub const MAX_LEN: usize = 256;

    pub fn new(password: String) -> Result<Self, ValueObjectError> {
        let len = password.chars().count();
        if len < Self::MIN_LEN {
            return Err(ValueObjectError::TooShort {
                field: "password",
                min: Self::MIN_LEN,
                actual: len,
            });
        }
        let password = optional_text("password", password, Self::MAX_LEN)?;
        Ok(Self(password))
    }

    /// Compare against a plain-text candidate.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Room display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomName(String);

impl RoomName {
    pub const MAX_LEN: usize = 120;

    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        let name = required_text("room_name", name, Self::MAX_LEN)?;
        Ok(Self(name))
    }

    /// Name of the room every user receives at sign up.
    pub fn default_for(nickname: &Nickname) -> Self {
        Self(format!("{}'s room", nickname.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Memo title value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoTitle(String);

impl MemoTitle {
    pub const MAX_LEN: usize = 200;

    pub fn new(title: String) -> Result<Self, ValueObjectError> {
        let title = required_text("title", title, Self::MAX_LEN)?;
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Memo body. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoContent(String);

impl MemoContent {
    pub const MAX_LEN: usize = 10000;

    pub fn new(content: String) -> Result<Self, ValueObjectError> {
        let content = optional_text("content", content, Self::MAX_LEN)?;
        Ok(Self(content))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Comment body value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentContent(String);

impl CommentContent {
    pub const MAX_LEN: usize = 1000;

    pub fn new(content: String) -> Result<Self, ValueObjectError> {
        let content = required_text("content", content, Self::MAX_LEN)?;
        Ok(Self(content))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Star rating between 0 and 5. Zero means "not rated".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Result<Self, ValueObjectError> {
        if value > MAX_RATING {
            return Err(ValueObjectError::RatingOutOfRange {
                max: MAX_RATING,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_rated(&self) -> bool {
        self.0 > 0
    }
}

/// URL of an image stored elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub const MAX_LEN: usize = 500;

    /// Blank input means "no image" and yields `None`.
    pub fn parse(url: Option<String>) -> Result<Option<Self>, ValueObjectError> {
        match url.map(|u| u.trim().to_string()) {
            None => Ok(None),
            Some(u) if u.is_empty() => Ok(None),
            Some(u) => Ok(Some(Self(optional_text("image_url", u, Self::MAX_LEN)?))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A validated latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValueObjectError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValueObjectError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValueObjectError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Build from two optional halves. Both or neither must be present.
    pub fn from_parts(
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Option<Self>, ValueObjectError> {
        match (latitude, longitude) {
            (Some(lat), Some(lng)) => Self::new(lat, lng).map(Some),
            (None, None) => Ok(None),
            _ => Err(ValueObjectError::IncompleteCoordinates),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Phone number of a business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(phone: String) -> Result<Self, ValueObjectError> {
        let phone = phone.trim().to_string();
        let valid = PHONE_PATTERN
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(&phone));
        if !valid {
            return Err(ValueObjectError::InvalidPhoneNumber(phone));
        }
        Ok(Self(phone))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    ///
    /// # Arguments
    ///
    /// * `value` - Unix timestamp in milliseconds
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Current time.
    pub fn now() -> Self {
        Self(daily_memo_shared::time::now_millis())
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
