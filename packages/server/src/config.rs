//! Server configuration from command-line flags and environment variables.

use std::{net::SocketAddr, time::Duration};

use clap::Parser;

use crate::{
    error::ServerError,
    infrastructure::{auth::JwtConfig, place::DEFAULT_KAKAO_BASE_URL},
};

#[derive(Debug, Clone, Parser)]
#[command(name = "daily-memo-server", version, about = "Daily Memo REST server")]
pub struct ServerConfig {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(short, long, env = "PORT", default_value_t = 7001)]
    pub port: u16,

    /// Secret for signing JWTs
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Access token lifetime in hours
    #[arg(long, env = "JWT_EXPIRE_HOURS", default_value_t = 24)]
    pub jwt_expire_hours: i64,

    /// Refresh token lifetime in hours
    #[arg(long, env = "REFRESH_EXPIRE_HOURS", default_value_t = 336)]
    pub refresh_expire_hours: i64,

    /// Code a new user must present to sign up
    #[arg(long, env = "SIGNUP_AUTH_CODE", default_value = "5508", hide_env_values = true)]
    pub signup_auth_code: String,

    /// Place search is disabled when unset
    #[arg(long, env = "KAKAO_REST_API_KEY", hide_env_values = true)]
    pub kakao_rest_api_key: Option<String>,

    #[arg(long, env = "KAKAO_BASE_URL", default_value = DEFAULT_KAKAO_BASE_URL)]
    pub kakao_base_url: String,

    /// Comma-separated list of origins allowed by CORS
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000,http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    #[arg(long, env = "LOG_LEVEL", default_value = "debug")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ServerError::InvalidConfig(format!("invalid address {}:{}", self.host, self.port)))
    }

    pub fn jwt(&self) -> JwtConfig {
        JwtConfig {
            secret: self.jwt_secret.clone(),
            access_token_hours: self.jwt_expire_hours,
            refresh_token_hours: self.refresh_expire_hours,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Reject values that would make the server unusable.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ServerError::InvalidConfig("JWT_SECRET cannot be empty".to_string()));
        }
        if self.jwt_expire_hours <= 0 || self.refresh_expire_hours <= 0 {
            return Err(ServerError::InvalidConfig(
                "token lifetimes must be positive".to_string(),
            ));
        }
        if self.signup_auth_code.trim().is_empty() {
            return Err(ServerError::InvalidConfig(
                "SIGNUP_AUTH_CODE cannot be empty".to_string(),
            ));
        }
        self.socket_addr()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // テスト項目: 必須項目だけ指定すると既定値が使われる
        // given (前提条件):
        let args = ["daily-memo-server", "--jwt-secret", "s3cret"];

        // when (操作):
        let config = ServerConfig::try_parse_from(args).unwrap();

        // then (期待する結果):
        assert_eq!(config.port, 7001);
        assert_eq!(config.jwt_expire_hours, 24);
        assert_eq!(config.refresh_expire_hours, 336);
        assert_eq!(config.signup_auth_code, "5508");
        assert_eq!(config.kakao_base_url, "https://dapi.kakao.com");
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "http://localhost:5173"]
        );
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_override_defaults() {
        // テスト項目: フラグで既定値を上書きできる
        // given (前提条件):
        let args = [
            "daily-memo-server",
            "--jwt-secret",
            "s3cret",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--allowed-origins",
            "https://a.example,https://b.example",
            "--kakao-rest-api-key",
            "key",
        ];

        // when (操作):
        let config = ServerConfig::try_parse_from(args).unwrap();

        // then (期待する結果):
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.allowed_origins.len(), 2);
        assert_eq!(config.kakao_rest_api_key.as_deref(), Some("key"));
    }

    #[test]
    fn test_validate_rejects_unusable_values() {
        // テスト項目: 空の秘密鍵や負の有効期限は設定エラーになる
        // given (前提条件):
        let blank_secret =
            ServerConfig::try_parse_from(["daily-memo-server", "--jwt-secret", " "]).unwrap();
        let negative = ServerConfig::try_parse_from([
            "daily-memo-server",
            "--jwt-secret",
            "s",
            "--jwt-expire-hours=-1",
        ])
        .unwrap();

        // when (操作):
        let blank_result = blank_secret.validate();
        let negative_result = negative.validate();

        // then (期待する結果):
        assert!(matches!(blank_result, Err(ServerError::InvalidConfig(_))));
        assert!(matches!(negative_result, Err(ServerError::InvalidConfig(_))));
    }
}
