//! Plain-text rendering of server responses for the terminal.

use daily_memo_server::infrastructure::dto::http::{
    CommentResponse, MapMarkerDto, MemoResponse, PlaceDto, ProfileResponse, RoomDetailDto,
};

fn stars(rating: u8) -> String {
    if rating == 0 {
        "-".to_string()
    } else {
        "★".repeat(rating as usize)
    }
}

/// One line per memo in a list
pub fn memo_line(memo: &MemoResponse) -> String {
    let mut flags = String::new();
    if memo.is_pinned {
        flags.push_str("📌");
    }
    if memo.is_wishlist {
        flags.push_str("♡");
    }
    let average = memo
        .average_rating
        .map(|avg| format!(" (avg {avg:.1})"))
        .unwrap_or_default();
    format!(
        "#{:<4} {}{} [{}] {}{}",
        memo.id,
        flags,
        memo.title,
        memo.category,
        stars(memo.rating),
        average
    )
}

pub fn memo_detail(memo: &MemoResponse) -> String {
    let mut lines = vec![memo_line(memo)];
    if !memo.content.is_empty() {
        lines.push(memo.content.clone());
    }
    if let (Some(lat), Some(lng)) = (memo.latitude, memo.longitude) {
        let name = memo.location_name.as_deref().unwrap_or("location");
        lines.push(format!("{name} ({lat:.5}, {lng:.5})"));
    }
    if let Some(name) = &memo.business_name {
        let phone = memo.business_phone.as_deref().unwrap_or("");
        lines.push(format!("{name} {phone}").trim_end().to_string());
    }
    if let Some(url) = &memo.image_url {
        lines.push(format!("image: {url}"));
    }
    lines.push(format!(
        "room {} · created {} · updated {}",
        memo.room_id, memo.created_at, memo.updated_at
    ));
    lines.join("\n")
}

pub fn marker_line(marker: &MapMarkerDto) -> String {
    format!(
        "#{:<4} {:<6} {} ({:.5}, {:.5})",
        marker.memo_id, marker.pin, marker.info_window_text, marker.latitude, marker.longitude
    )
}

pub fn comment_line(comment: &CommentResponse) -> String {
    format!(
        "#{:<4} {} {}: {} ({})",
        comment.id,
        stars(comment.rating),
        comment.user_name,
        comment.content,
        comment.created_at
    )
}

pub fn profile(profile: &ProfileResponse) -> String {
    let mut lines = vec![
        format!("{} ({})", profile.nickname, profile.account_id),
        format!("user id: {}", profile.user_id),
    ];
    if let Some(room_id) = profile.default_room_id {
        lines.push(format!("default room: {room_id}"));
    }
    if let Some(url) = &profile.profile_image_url {
        lines.push(format!("image: {url}"));
    }
    lines.join("\n")
}

pub fn room(room: &RoomDetailDto) -> String {
    let mut lines = vec![
        format!("#{} {}", room.id, room.name),
        format!("code: {}", room.code),
        format!(
            "participants ({}/{}):",
            room.participants.len(),
            room.participant_capacity
        ),
    ];
    for participant in &room.participants {
        let owner = if participant.is_owner { " (owner)" } else { "" };
        lines.push(format!(
            "  {} #{}{}",
            participant.name, participant.user_id, owner
        ));
    }
    lines.join("\n")
}

pub fn place_line(place: &PlaceDto) -> String {
    let phone = place.phone.as_deref().unwrap_or("-");
    format!(
        "{} [{}] {} · {} ({}, {})",
        place.name, place.place_category, place.address, phone, place.latitude, place.longitude
    )
}
