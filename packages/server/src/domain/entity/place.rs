use serde::{Deserialize, Serialize};

use crate::domain::error::ValueObjectError;

/// Category of a place a memo was written about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlaceCategory {
    Restaurant,
    Cafe,
    Convenience,
    Hospital,
    Pharmacy,
    Cultural,
    Accommodation,
    Entertainment,
    Shopping,
    Sports,
    Parking,
    GasStation,
    Subway,
    Bank,
    Bookstore,
    #[default]
    Other,
}

/// Keyword table used to classify free-text category names returned by the
/// place search API (e.g. "음식점 > 한식 > 육류,고기"). First match wins.
const CATEGORY_KEYWORDS: &[(&[&str], PlaceCategory)] = &[
    (&["카페", "cafe"], PlaceCategory::Cafe),
    (&["음식점", "식당", "restaurant"], PlaceCategory::Restaurant),
    (&["편의점", "convenience"], PlaceCategory::Convenience),
    (&["병원", "hospital"], PlaceCategory::Hospital),
    (&["약국", "pharmacy"], PlaceCategory::Pharmacy),
    (&["관광", "명소"], PlaceCategory::Entertainment),
    (&["쇼핑", "shopping"], PlaceCategory::Shopping),
    (&["문화", "공연"], PlaceCategory::Cultural),
    (&["숙박", "호텔", "hotel"], PlaceCategory::Accommodation),
    (&["스포츠", "운동"], PlaceCategory::Sports),
    (&["주차", "parking"], PlaceCategory::Parking),
    (&["주유"], PlaceCategory::GasStation),
    (&["지하철", "subway"], PlaceCategory::Subway),
    (&["은행", "bank"], PlaceCategory::Bank),
    (&["서점", "bookstore"], PlaceCategory::Bookstore),
];

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 16] = [
        PlaceCategory::Restaurant,
        PlaceCategory::Cafe,
        PlaceCategory::Convenience,
        PlaceCategory::Hospital,
        PlaceCategory::Pharmacy,
        PlaceCategory::Cultural,
        PlaceCategory::Accommodation,
        PlaceCategory::Entertainment,
        PlaceCategory::Shopping,
        PlaceCategory::Sports,
        PlaceCategory::Parking,
        PlaceCategory::GasStation,
        PlaceCategory::Subway,
        PlaceCategory::Bank,
        PlaceCategory::Bookstore,
        PlaceCategory::Other,
    ];

    /// Wire name, e.g. `GAS_STATION`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceCategory::Restaurant => "RESTAURANT",
            PlaceCategory::Cafe => "CAFE",
            PlaceCategory::Convenience => "CONVENIENCE",
            PlaceCategory::Hospital => "HOSPITAL",
            PlaceCategory::Pharmacy => "PHARMACY",
            PlaceCategory::Cultural => "CULTURAL",
            PlaceCategory::Accommodation => "ACCOMMODATION",
            PlaceCategory::Entertainment => "ENTERTAINMENT",
            PlaceCategory::Shopping => "SHOPPING",
            PlaceCategory::Sports => "SPORTS",
            PlaceCategory::Parking => "PARKING",
            PlaceCategory::GasStation => "GAS_STATION",
            PlaceCategory::Subway => "SUBWAY",
            PlaceCategory::Bank => "BANK",
            PlaceCategory::Bookstore => "BOOKSTORE",
            PlaceCategory::Other => "OTHER",
        }
    }

    /// Kakao Local category group code, where Kakao has one.
    pub fn kakao_code(&self) -> Option<&'static str> {
        match self {
            PlaceCategory::Restaurant => Some("FD6"),
            PlaceCategory::Cafe => Some("CE7"),
            PlaceCategory::Convenience => Some("CS2"),
            PlaceCategory::Hospital => Some("HP8"),
            PlaceCategory::Pharmacy => Some("PM9"),
            PlaceCategory::Cultural => Some("CT1"),
            PlaceCategory::Accommodation => Some("AD5"),
            PlaceCategory::Entertainment => Some("AT4"),
            PlaceCategory::Shopping => Some("MT1"),
            PlaceCategory::Parking => Some("PK6"),
            PlaceCategory::GasStation => Some("OL7"),
            PlaceCategory::Subway => Some("SW8"),
            PlaceCategory::Bank => Some("BK9"),
            PlaceCategory::Sports | PlaceCategory::Bookstore | PlaceCategory::Other => None,
        }
    }

    /// Parse a wire name case-insensitively. `None` and blank map to `Other`.
    pub fn parse(value: Option<&str>) -> Result<Self, ValueObjectError> {
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(PlaceCategory::Other);
        };
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ValueObjectError::UnknownPlaceCategory(value.to_string()))
    }

    /// Classify a free-text category name by keyword.
    pub fn classify(category_name: &str) -> Self {
        let lowered = category_name.to_lowercase();
        CATEGORY_KEYWORDS
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(_, category)| *category)
            .unwrap_or(PlaceCategory::Other)
    }
}

/// A place returned by the third-party place search. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    /// Free-text category name as returned by the search API
    pub category: String,
    pub phone: Option<String>,
    pub address: String,
    pub road_address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub place_url: Option<String>,
}

impl Place {
    pub fn place_category(&self) -> PlaceCategory {
        PlaceCategory::classify(&self.category)
    }
}
