//! Time helpers.
//!
//! Timestamps travel through the system as Unix milliseconds and are rendered
//! in KST (UTC+9) at the HTTP boundary.

use chrono::{DateTime, FixedOffset, Offset, Utc};

const KST_OFFSET_SECS: i32 = 9 * 3600;

fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Get current Unix timestamp (milliseconds)
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert a Unix timestamp in milliseconds into an RFC 3339 string in KST.
///
/// Out-of-range values fall back to the Unix epoch.
pub fn timestamp_to_kst_rfc3339(millis: i64) -> String {
    let utc = DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH);
    utc.with_timezone(&kst()).to_rfc3339()
}
