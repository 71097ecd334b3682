pub mod http;
pub mod kakao;
