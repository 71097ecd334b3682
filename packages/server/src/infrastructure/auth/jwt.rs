//! HS256 JWT implementation of [`TokenService`].

use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::domain::{
    AccountId, AuthClaims, Timestamp, TokenError, TokenKind, TokenPair, TokenService, UserId,
};

static JWT_ALGORITHM: Algorithm = Algorithm::HS256;

/// Secret and lifetimes for issued tokens
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_hours: i64,
    pub refresh_token_hours: i64,
}

/// JWT ペイロード (クレーム)
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: u64,
    account_id: String,
    kind: TokenKind,
    /// issued at (Unix 秒)
    iat: i64,
    /// 有効期限 (Unix 秒)
    exp: i64,
}

pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_lifetime: Duration,
    refresh_token_lifetime: Duration,
}

impl JwtTokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            access_token_lifetime: Duration::hours(config.access_token_hours),
            refresh_token_lifetime: Duration::hours(config.refresh_token_hours),
        }
    }

    fn sign(
        &self,
        user_id: UserId,
        account_id: &AccountId,
        kind: TokenKind,
        lifetime: Duration,
    ) -> Result<(String, Timestamp), TokenError> {
        let now = Utc::now();
        let expiration = now + lifetime;
        let claims = Claims {
            sub: user_id.value(),
            account_id: account_id.to_string(),
            kind,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };
        let token = encode(&Header::new(JWT_ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))?;
        Ok((token, Timestamp::new(expiration.timestamp_millis())))
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: UserId, account_id: &AccountId) -> Result<TokenPair, TokenError> {
        let (access_token, access_token_expires_at) = self.sign(
            user_id,
            account_id,
            TokenKind::Access,
            self.access_token_lifetime,
        )?;
        let (refresh_token, refresh_token_expires_at) = self.sign(
            user_id,
            account_id,
            TokenKind::Refresh,
            self.refresh_token_lifetime,
        )?;
        Ok(TokenPair {
            access_token,
            access_token_expires_at,
            refresh_token,
            refresh_token_expires_at,
        })
    }

    fn verify(&self, token: &str, kind: TokenKind) -> Result<AuthClaims, TokenError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            }
        })?;
        let claims = data.claims;
        if claims.kind != kind {
            return Err(TokenError::WrongKind);
        }
        Ok(AuthClaims {
            user_id: UserId::new(claims.sub),
            account_id: claims.account_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str, hours: i64) -> JwtTokenService {
        JwtTokenService::new(&JwtConfig {
            secret: secret.to_string(),
            access_token_hours: hours,
            refresh_token_hours: hours * 14,
        })
    }

    fn account() -> AccountId {
        AccountId::new("alice".to_string()).unwrap()
    }

    #[test]
    fn test_issue_and_verify() {
        // テスト項目: 発行したトークンを検証するとユーザー情報が得られる
        // given (前提条件):
        let service = service("secret", 24);

        // when (操作):
        let pair = service.issue(UserId::new(7), &account()).unwrap();
        let claims = service.verify(&pair.access_token, TokenKind::Access).unwrap();

        // then (期待する結果):
        assert_eq!(claims.user_id, UserId::new(7));
        assert_eq!(claims.account_id, "alice");
        assert!(pair.refresh_token_expires_at.value() > pair.access_token_expires_at.value());
        assert!(pair.access_token_expires_at.value() > Timestamp::now().value());
    }

    #[test]
    fn test_verify_rejects_wrong_kind() {
        // テスト項目: リフレッシュトークンはアクセストークンとして使えない
        // given (前提条件):
        let service = service("secret", 24);
        let pair = service.issue(UserId::new(1), &account()).unwrap();

        // when (操作):
        let as_access = service.verify(&pair.refresh_token, TokenKind::Access);
        let as_refresh = service.verify(&pair.access_token, TokenKind::Refresh);

        // then (期待する結果):
        assert_eq!(as_access, Err(TokenError::WrongKind));
        assert_eq!(as_refresh, Err(TokenError::WrongKind));
    }

    #[test]
    fn test_verify_rejects_other_secret_and_garbage() {
        // テスト項目: 別の鍵で署名されたトークンや不正な文字列は無効
        // given (前提条件):
        let issuer = service("secret-a", 24);
        let verifier = service("secret-b", 24);
        let pair = issuer.issue(UserId::new(1), &account()).unwrap();

        // when (操作):
        let other_key = verifier.verify(&pair.access_token, TokenKind::Access);
        let garbage = verifier.verify("not-a-jwt", TokenKind::Access);

        // then (期待する結果):
        assert_eq!(other_key, Err(TokenError::Invalid));
        assert_eq!(garbage, Err(TokenError::Invalid));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        // テスト項目: 有効期限切れのトークンは Expired になる
        // given (前提条件):
        let service = service("secret", -1);
        let pair = service.issue(UserId::new(1), &account()).unwrap();

        // when (操作):
        let result = service.verify(&pair.access_token, TokenKind::Access);

        // then (期待する結果):
        assert_eq!(result, Err(TokenError::Expired));
    }
}
