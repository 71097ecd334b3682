use serde::{Deserialize, Serialize};

use super::place::PlaceCategory;
use crate::domain::{
    error::ValueObjectError,
    value_object::{
        Coordinates, ImageUrl, MemoContent, MemoId, MemoTitle, PhoneNumber, Rating, RoomId,
        Timestamp, UserId, optional_text,
    },
};

pub const LOCATION_NAME_MAX_LEN: usize = 255;
pub const NAVER_PLACE_URL_MAX_LEN: usize = 500;
pub const BUSINESS_NAME_MAX_LEN: usize = 255;
pub const BUSINESS_ADDRESS_MAX_LEN: usize = 1000;

/// Blank strings mean "not set".
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Business details attached to a memo about a shop or restaurant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusinessInfo {
    pub name: Option<String>,
    pub phone: Option<PhoneNumber>,
    pub address: Option<String>,
}

impl BusinessInfo {
    pub fn new(
        name: Option<String>,
        phone: Option<String>,
        address: Option<String>,
    ) -> Result<Self, ValueObjectError> {
        let name = non_blank(name)
            .map(|n| optional_text("business_name", n, BUSINESS_NAME_MAX_LEN))
            .transpose()?;
        let phone = non_blank(phone).map(PhoneNumber::new).transpose()?;
        let address = non_blank(address)
            .map(|a| optional_text("business_address", a, BUSINESS_ADDRESS_MAX_LEN))
            .transpose()?;
        Ok(Self {
            name,
            phone,
            address,
        })
    }
}

/// Unvalidated memo input as received from a client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoDraft {
    pub title: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub rating: Option<u8>,
    pub is_pinned: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location_name: Option<String>,
    pub category: Option<String>,
    pub is_wishlist: bool,
    pub business_name: Option<String>,
    pub business_phone: Option<String>,
    pub business_address: Option<String>,
    pub naver_place_url: Option<String>,
}

impl MemoDraft {
    /// Validate every field and build the mutable part of a memo.
    pub fn validate(self) -> Result<MemoFields, ValueObjectError> {
        let location_name = non_blank(self.location_name)
            .map(|n| optional_text("location_name", n, LOCATION_NAME_MAX_LEN))
            .transpose()?;
        let naver_place_url = non_blank(self.naver_place_url)
            .map(|u| optional_text("naver_place_url", u, NAVER_PLACE_URL_MAX_LEN))
            .transpose()?;

        Ok(MemoFields {
            title: MemoTitle::new(self.title)?,
            content: MemoContent::new(self.content.unwrap_or_default())?,
            image_url: ImageUrl::parse(self.image_url)?,
            rating: Rating::new(self.rating.unwrap_or(0))?,
            is_pinned: self.is_pinned,
            location: Coordinates::from_parts(self.latitude, self.longitude)?,
            location_name,
            category: PlaceCategory::parse(self.category.as_deref())?,
            is_wishlist: self.is_wishlist,
            business: BusinessInfo::new(
                self.business_name,
                self.business_phone,
                self.business_address,
            )?,
            naver_place_url,
        })
    }
}

/// Fields of a memo its author may change.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoFields {
    pub title: MemoTitle,
    pub content: MemoContent,
    pub image_url: Option<ImageUrl>,
    /// Author's own rating
    pub rating: Rating,
    pub is_pinned: bool,
    pub location: Option<Coordinates>,
    pub location_name: Option<String>,
    pub category: PlaceCategory,
    pub is_wishlist: bool,
    pub business: BusinessInfo,
    pub naver_place_url: Option<String>,
}

/// A journal entry
#[derive(Debug, Clone, PartialEq)]
pub struct Memo {
    pub id: MemoId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub fields: MemoFields,
    /// Mean rating of the memo's comments
    pub average_rating: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMemo {
    pub user_id: UserId,
    pub room_id: RoomId,
    pub fields: MemoFields,
    pub created_at: Timestamp,
}

/// Colour of the pin drawn for a memo on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerPin {
    Yellow,
    Red,
    Blue,
}

impl MarkerPin {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerPin::Yellow => "yellow",
            MarkerPin::Red => "red",
            MarkerPin::Blue => "blue",
        }
    }
}

/// What the map needs to draw one memo.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub memo_id: MemoId,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub pin: MarkerPin,
    pub info_window_text: String,
    pub category: PlaceCategory,
}

impl Memo {
    pub fn new(id: MemoId, new_memo: NewMemo) -> Self {
        Self {
            id,
            user_id: new_memo.user_id,
            room_id: new_memo.room_id,
            fields: new_memo.fields,
            average_rating: None,
            created_at: new_memo.created_at,
            updated_at: new_memo.created_at,
        }
    }

    pub fn is_written_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Replace every mutable field.
    pub fn update(&mut self, fields: MemoFields, now: Timestamp) {
        self.fields = fields;
        self.updated_at = now;
    }

    /// Comment average when there is one, otherwise the author's rating.
    pub fn effective_rating(&self) -> f64 {
        self.average_rating
            .unwrap_or_else(|| f64::from(self.fields.rating.value()))
    }

    pub fn marker_pin(&self) -> MarkerPin {
        if self.fields.is_pinned {
            MarkerPin::Yellow
        } else if self.fields.is_wishlist {
            MarkerPin::Red
        } else {
            MarkerPin::Blue
        }
    }

    pub fn info_window_text(&self) -> String {
        let rating = self.effective_rating();
        if rating > 0.0 {
            format!("{} | ⭐ {:.1}", self.fields.title, rating)
        } else {
            self.fields.title.to_string()
        }
    }

    pub fn has_valid_location(&self) -> bool {
        self.fields.location.is_some()
    }

    /// `None` when the memo has no location.
    pub fn to_map_marker(&self) -> Option<MapMarker> {
        let location = self.fields.location?;
        Some(MapMarker {
            memo_id: self.id,
            title: self.fields.title.to_string(),
            latitude: location.latitude(),
            longitude: location.longitude(),
            pin: self.marker_pin(),
            info_window_text: self.info_window_text(),
            category: self.fields.category,
        })
    }
}
