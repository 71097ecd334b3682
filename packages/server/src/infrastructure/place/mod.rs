//! Third-party place search clients.

mod kakao;

pub use kakao::{DEFAULT_KAKAO_BASE_URL, KakaoPlaceClient};
