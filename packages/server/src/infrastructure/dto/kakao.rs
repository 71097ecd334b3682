//! Kakao Local API response DTOs.
//!
//! Kakao returns coordinates as strings and empty strings for missing values.

use serde::Deserialize;

use crate::domain::{Place, PlaceSearchError};

#[derive(Debug, Deserialize)]
pub struct KakaoPlaceSearchResponse {
    #[serde(default)]
    pub documents: Vec<KakaoPlaceDocument>,
}

#[derive(Debug, Deserialize)]
pub struct KakaoPlaceDocument {
    pub id: String,
    pub place_name: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address_name: String,
    #[serde(default)]
    pub road_address_name: String,
    /// 経度
    pub x: String,
    /// 緯度
    pub y: String,
    #[serde(default)]
    pub place_url: String,
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn coordinate(value: &str, name: &str) -> Result<f64, PlaceSearchError> {
    value
        .trim()
        .parse()
        .map_err(|_| PlaceSearchError::Decode(format!("invalid {name}: {value:?}")))
}

impl TryFrom<KakaoPlaceDocument> for Place {
    type Error = PlaceSearchError;

    fn try_from(document: KakaoPlaceDocument) -> Result<Self, Self::Error> {
        Ok(Place {
            latitude: coordinate(&document.y, "y")?,
            longitude: coordinate(&document.x, "x")?,
            id: document.id,
            name: document.place_name,
            category: document.category_name,
            phone: non_empty(document.phone),
            address: document.address_name,
            road_address: non_empty(document.road_address_name),
            place_url: non_empty(document.place_url),
        })
    }
}

impl KakaoPlaceSearchResponse {
    pub fn into_places(self) -> Result<Vec<Place>, PlaceSearchError> {
        self.documents.into_iter().map(Place::try_from).collect()
    }
}
