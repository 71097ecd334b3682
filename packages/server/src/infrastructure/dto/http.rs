//! HTTP API request/response DTOs.
//!
//! Shared with the CLI client, so every type is both `Serialize` and `Deserialize`.
//! Timestamps are RFC 3339 strings in KST except token expiries, which are Unix millis.

use daily_memo_shared::time::timestamp_to_kst_rfc3339;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{MapMarker, Memo, MemoDraft, Participant, Place, Room, RoomId, User},
    usecase::{
        AuthSession, CategorySearchInput, CommentView, KeywordSearchInput, ListMemosInput,
        SignUpInput, UpdateProfileInput,
    },
};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub account_id: String,
    pub password: String,
    pub auth_code: String,
    pub nickname: String,
}

impl From<SignUpRequest> for SignUpInput {
    fn from(request: SignUpRequest) -> Self {
        SignUpInput {
            account_id: request.account_id,
            password: request.password,
            nickname: request.nickname,
            auth_code: request.auth_code,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignInRequest {
    pub account_id: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Body of memo create and update. `room_id` is ignored on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_wishlist: bool,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub business_phone: Option<String>,
    #[serde(default)]
    pub business_address: Option<String>,
    #[serde(default)]
    pub naver_place_url: Option<String>,
}

impl MemoRequest {
    pub fn room_id(&self) -> Option<RoomId> {
        self.room_id.map(RoomId::new)
    }

    pub fn into_draft(self) -> MemoDraft {
        MemoDraft {
            title: self.title,
            content: self.content,
            image_url: self.image_url,
            rating: self.rating,
            is_pinned: self.is_pinned,
            latitude: self.latitude,
            longitude: self.longitude,
            location_name: self.location_name,
            category: self.category,
            is_wishlist: self.is_wishlist,
            business_name: self.business_name,
            business_phone: self.business_phone,
            business_address: self.business_address,
            naver_place_url: self.naver_place_url,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MemoListQuery {
    pub room_id: Option<u64>,
    pub is_wishlist: Option<bool>,
}

impl From<MemoListQuery> for ListMemosInput {
    fn from(query: MemoListQuery) -> Self {
        ListMemosInput {
            room_id: query.room_id.map(RoomId::new),
            is_wishlist: query.is_wishlist,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
    #[serde(default)]
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub current_password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}

impl From<UpdateProfileRequest> for UpdateProfileInput {
    fn from(request: UpdateProfileRequest) -> Self {
        UpdateProfileInput {
            current_password: request.current_password,
            nickname: request.nickname,
            new_password: request.new_password,
            profile_image_url: request.profile_image_url,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JoinRoomRequest {
    #[serde(default)]
    pub room_code: String,
}

/// `x` is the longitude, `y` the latitude.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceSearchQuery {
    #[serde(default)]
    pub query: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub radius: Option<u32>,
}

impl From<PlaceSearchQuery> for KeywordSearchInput {
    fn from(query: PlaceSearchQuery) -> Self {
        KeywordSearchInput {
            query: query.query,
            x: query.x,
            y: query.y,
            radius: query.radius,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategorySearchQuery {
    #[serde(default)]
    pub category: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub radius: Option<u32>,
}

impl From<CategorySearchQuery> for CategorySearchInput {
    fn from(query: CategorySearchQuery) -> Self {
        CategorySearchInput {
            category: query.category,
            x: query.x,
            y: query.y,
            radius: query.radius,
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Unix millis
    pub access_token_expired_at: i64,
    pub refresh_token: String,
    /// Unix millis
    pub refresh_token_expired_at: i64,
    pub user_id: u64,
    pub account_id: String,
    pub nickname: String,
    pub default_room_id: Option<u64>,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        AuthResponse {
            access_token: session.tokens.access_token,
            access_token_expired_at: session.tokens.access_token_expires_at.value(),
            refresh_token: session.tokens.refresh_token,
            refresh_token_expired_at: session.tokens.refresh_token_expires_at.value(),
            user_id: session.user.id.value(),
            account_id: session.user.account_id.to_string(),
            nickname: session.user.nickname.to_string(),
            default_room_id: session.user.default_room_id.map(|id| id.value()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoResponse {
    pub id: u64,
    pub user_id: u64,
    pub room_id: u64,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub rating: u8,
    pub is_pinned: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location_name: Option<String>,
    pub category: String,
    pub is_wishlist: bool,
    pub business_name: Option<String>,
    pub business_phone: Option<String>,
    pub business_address: Option<String>,
    pub naver_place_url: Option<String>,
    pub average_rating: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Memo> for MemoResponse {
    fn from(memo: &Memo) -> Self {
        let fields = &memo.fields;
        MemoResponse {
            id: memo.id.value(),
            user_id: memo.user_id.value(),
            room_id: memo.room_id.value(),
            title: fields.title.to_string(),
            content: fields.content.as_str().to_string(),
            image_url: fields.image_url.as_ref().map(|u| u.as_str().to_string()),
            rating: fields.rating.value(),
            is_pinned: fields.is_pinned,
            latitude: fields.location.map(|l| l.latitude()),
            longitude: fields.location.map(|l| l.longitude()),
            location_name: fields.location_name.clone(),
            category: fields.category.as_str().to_string(),
            is_wishlist: fields.is_wishlist,
            business_name: fields.business.name.clone(),
            business_phone: fields.business.phone.as_ref().map(|p| p.as_str().to_string()),
            business_address: fields.business.address.clone(),
            naver_place_url: fields.naver_place_url.clone(),
            average_rating: memo.average_rating,
            created_at: timestamp_to_kst_rfc3339(memo.created_at.value()),
            updated_at: timestamp_to_kst_rfc3339(memo.updated_at.value()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoListResponse {
    pub memos: Vec<MemoResponse>,
    pub total: usize,
}

impl From<Vec<Memo>> for MemoListResponse {
    fn from(memos: Vec<Memo>) -> Self {
        let memos: Vec<MemoResponse> = memos.iter().map(MemoResponse::from).collect();
        MemoListResponse {
            total: memos.len(),
            memos,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarkerDto {
    pub memo_id: u64,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    /// `yellow`, `red` or `blue`
    pub pin: String,
    pub info_window_text: String,
    pub category: String,
}

impl From<MapMarker> for MapMarkerDto {
    fn from(marker: MapMarker) -> Self {
        MapMarkerDto {
            memo_id: marker.memo_id.value(),
            title: marker.title,
            latitude: marker.latitude,
            longitude: marker.longitude,
            pin: marker.pin.as_str().to_string(),
            info_window_text: marker.info_window_text,
            category: marker.category.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarkerListResponse {
    pub markers: Vec<MapMarkerDto>,
    pub total: usize,
}

impl From<Vec<MapMarker>> for MapMarkerListResponse {
    fn from(markers: Vec<MapMarker>) -> Self {
        let markers: Vec<MapMarkerDto> = markers.into_iter().map(MapMarkerDto::from).collect();
        MapMarkerListResponse {
            total: markers.len(),
            markers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: u64,
    pub memo_id: u64,
    pub user_id: u64,
    pub user_name: String,
    pub content: String,
    pub rating: u8,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CommentView> for CommentResponse {
    fn from(view: CommentView) -> Self {
        let comment = view.comment;
        CommentResponse {
            id: comment.id.value(),
            memo_id: comment.memo_id.value(),
            user_id: comment.user_id.value(),
            user_name: view.user_name,
            content: comment.content.as_str().to_string(),
            rating: comment.rating.value(),
            created_at: timestamp_to_kst_rfc3339(comment.created_at.value()),
            updated_at: timestamp_to_kst_rfc3339(comment.updated_at.value()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
    pub total: usize,
}

impl From<Vec<CommentView>> for CommentListResponse {
    fn from(views: Vec<CommentView>) -> Self {
        let comments: Vec<CommentResponse> =
            views.into_iter().map(CommentResponse::from).collect();
        CommentListResponse {
            total: comments.len(),
            comments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user_id: u64,
    pub account_id: String,
    pub nickname: String,
    pub profile_image_url: Option<String>,
    pub default_room_id: Option<u64>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        ProfileResponse {
            user_id: user.id.value(),
            account_id: user.account_id.to_string(),
            nickname: user.nickname.to_string(),
            profile_image_url: user.profile_image_url,
            default_room_id: user.default_room_id.map(|id| id.value()),
            created_at: timestamp_to_kst_rfc3339(user.created_at.value()),
            updated_at: timestamp_to_kst_rfc3339(user.updated_at.value()),
        }
    }
}

/// Room detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub id: u64,
    pub code: String,
    pub name: String,
    pub owner_id: u64,
    pub participants: Vec<ParticipantDetailDto>,
    pub participant_capacity: usize,
    pub created_at: String, // ISO 8601
    pub updated_at: String, // ISO 8601
}

impl From<Room> for RoomDetailDto {
    fn from(room: Room) -> Self {
        RoomDetailDto {
            id: room.id.value(),
            code: room.code.to_string(),
            name: room.name.as_str().to_string(),
            owner_id: room.owner_id.value(),
            participants: room
                .participants
                .iter()
                .map(ParticipantDetailDto::from)
                .collect(),
            participant_capacity: room.participant_capacity,
            created_at: timestamp_to_kst_rfc3339(room.created_at.value()),
            updated_at: timestamp_to_kst_rfc3339(room.updated_at.value()),
        }
    }
}

/// Participant detail for room detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantDetailDto {
    pub user_id: u64,
    pub name: String,
    pub is_owner: bool,
    pub joined_at: String, // ISO 8601
}

impl From<&Participant> for ParticipantDetailDto {
    fn from(participant: &Participant) -> Self {
        ParticipantDetailDto {
            user_id: participant.user_id.value(),
            name: participant.name.clone(),
            is_owner: participant.is_owner,
            joined_at: timestamp_to_kst_rfc3339(participant.joined_at.value()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDto {
    pub id: String,
    pub name: String,
    /// Category name as returned by the search API
    pub category: String,
    /// Our classification of `category`, e.g. `CAFE`
    pub place_category: String,
    pub phone: Option<String>,
    pub address: String,
    pub road_address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub place_url: Option<String>,
}

impl From<Place> for PlaceDto {
    fn from(place: Place) -> Self {
        PlaceDto {
            place_category: place.place_category().as_str().to_string(),
            id: place.id,
            name: place.name,
            category: place.category,
            phone: place.phone,
            address: place.address,
            road_address: place.road_address,
            latitude: place.latitude,
            longitude: place.longitude,
            place_url: place.place_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceListResponse {
    pub places: Vec<PlaceDto>,
    pub total: usize,
}

impl From<Vec<Place>> for PlaceListResponse {
    fn from(places: Vec<Place>) -> Self {
        let places: Vec<PlaceDto> = places.into_iter().map(PlaceDto::from).collect();
        PlaceListResponse {
            total: places.len(),
            places,
        }
    }
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
