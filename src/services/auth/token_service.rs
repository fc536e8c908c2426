//! 플랫폼 아이덴티티 토큰 서비스
//!
//! 리졸버가 결정한 아이덴티티를 HMAC-SHA256으로 서명한 JWT로 발급합니다.
//! 검증은 토큰을 소비하는 쪽의 책임입니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use crate::config::JwtConfig;
use crate::domain::models::auth::ResolvedIdentity;
use crate::domain::models::token::IdentityTokenClaims;
use crate::errors::errors::{AppError, ErrorContext};

/// 아이덴티티 토큰 발급 서비스
pub struct IdentityTokenService {
    config: JwtConfig,
    namespace: String,
}

impl IdentityTokenService {
    pub fn new(config: JwtConfig, namespace: impl Into<String>) -> Self {
        Self {
            config,
            namespace: namespace.into(),
        }
    }

    /// 아이덴티티에 대한 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.issue(&response.identity)?;
    /// ```
    pub fn issue(&self, identity: &ResolvedIdentity) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);
        let sub = IdentityTokenClaims::user_entity_ref(&self.namespace, &identity.id);

        let claims = IdentityTokenClaims {
            ent: vec![sub.clone()],
            sub,
            iss: self.config.issuer.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.config.secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key).context("JWT 토큰 생성 실패")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    fn config(secret: &str, expiration_minutes: i64) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            expiration_minutes,
            issuer: "google-auth-provider".to_string(),
        }
    }

    fn identity(id: &str) -> ResolvedIdentity {
        ResolvedIdentity { id: id.to_string() }
    }

    fn verify(token: &str, secret: &str, issuer: &str) -> jsonwebtoken::errors::Result<IdentityTokenClaims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[issuer]);

        decode::<IdentityTokenClaims>(token, &DecodingKey::from_secret(secret.as_ref()), &validation)
            .map(|token_data| token_data.claims)
    }

    #[test]
    fn test_issued_token_verifies() {
        let service = IdentityTokenService::new(config("test-secret", 60), "default");

        let token = service.issue(&identity("u-bob")).unwrap();
        let claims = verify(&token, "test-secret", "google-auth-provider").unwrap();

        assert_eq!(claims.sub, "user:default/u-bob");
        assert_eq!(claims.ent, vec!["user:default/u-bob".to_string()]);
        assert_eq!(claims.iss, "google-auth-provider");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_configured_namespace_is_used() {
        let service = IdentityTokenService::new(config("test-secret", 60), "platform");

        let token = service.issue(&identity("carol")).unwrap();
        let claims = verify(&token, "test-secret", "google-auth-provider").unwrap();

        assert_eq!(claims.sub, "user:platform/carol");
    }

    #[test]
    fn test_token_is_signed_with_configured_secret() {
        let service = IdentityTokenService::new(config("secret-a", 60), "default");

        let token = service.issue(&identity("u-bob")).unwrap();
        assert!(verify(&token, "secret-b", "google-auth-provider").is_err());
    }

    #[test]
    fn test_expiration_follows_config() {
        let service = IdentityTokenService::new(config("test-secret", -10), "default");

        let token = service.issue(&identity("u-bob")).unwrap();
        let err = verify(&token, "test-secret", "google-auth-provider").unwrap_err();
        assert_eq!(*err.kind(), jsonwebtoken::errors::ErrorKind::ExpiredSignature);
    }

    #[test]
    fn test_issuer_follows_config() {
        let mut other = config("test-secret", 60);
        other.issuer = "someone-else".to_string();

        let token = IdentityTokenService::new(other, "default").issue(&identity("u-bob")).unwrap();
        assert!(verify(&token, "test-secret", "google-auth-provider").is_err());
        assert!(verify(&token, "test-secret", "someone-else").is_ok());
    }
}
