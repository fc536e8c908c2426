//! # Authentication Configuration Module
//!
//! Google OAuth 클라이언트, 쿠키/nonce 정책, 아이덴티티 디렉터리 매핑,
//! 플랫폼 아이덴티티 토큰 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! 모든 설정 구조체는 `from_env()`로 프로세스 환경변수에서, `load_with()`로
//! 임의의 조회 함수에서 값을 읽습니다. 테스트는 `load_with()`에 `HashMap` 기반
//! 조회 함수를 넘겨 환경변수를 건드리지 않습니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### Google OAuth 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! # 선택: 기본값은 {AUTH_BASE_URL}/api/auth/google/handler/frame
//! export GOOGLE_REDIRECT_URI="http://localhost:7007/api/auth/google/handler/frame"
//! ```
//!
//! ### 아이덴티티 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_MINUTES="60"
//! export JWT_ISSUER="google-auth-provider"
//! ```
//!
//! ### 쿠키 / nonce 설정
//! ```bash
//! export APP_ORIGIN="http://localhost:3000"
//! export OAUTH_SECURE_COOKIES="true"
//! export OAUTH_NONCE_TIMEOUT_MINUTES="10"
//! ```

use std::env;
use crate::config::data_config::{Environment, ServerConfig};
use crate::errors::errors::{AppError, AppResult};

/// 프로세스 환경변수 조회 함수
pub fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> AppResult<String> {
    lookup(key).ok_or_else(|| AppError::ConfigError(format!("{} must be set", key)))
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{} 파싱 실패: {}. 기본값 사용", key, raw);
            default
        }),
        None => default,
    }
}

/// Google OAuth 2.0 클라이언트 설정
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보를 관리합니다.
/// `client_secret`은 절대 로그에 출력하지 마세요. `Debug` 구현에서도 가려집니다.
///
/// ## Google Cloud Console 설정 가이드
///
/// 1. [Google Cloud Console](https://console.cloud.google.com/) 접속
/// 2. APIs & Services > Credentials로 이동
/// 3. OAuth 2.0 Client IDs 생성
/// 4. 승인된 리디렉션 URI 추가: `http://localhost:7007/api/auth/google/handler/frame`
#[derive(Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    /// 인증 완료 후 Google이 호출할 프레임 핸들러 URL
    pub callback_url: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub userinfo_uri: String,
    pub scope: String,
}

impl std::fmt::Debug for GoogleOAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("callback_url", &self.callback_url)
            .field("auth_uri", &self.auth_uri)
            .field("token_uri", &self.token_uri)
            .field("userinfo_uri", &self.userinfo_uri)
            .field("scope", &self.scope)
            .finish()
    }
}

impl GoogleOAuthConfig {
    pub const DEFAULT_AUTH_URI: &'static str = "https://accounts.google.com/o/oauth2/v2/auth";
    pub const DEFAULT_TOKEN_URI: &'static str = "https://oauth2.googleapis.com/token";
    pub const DEFAULT_USERINFO_URI: &'static str = "https://www.googleapis.com/oauth2/v2/userinfo";
    pub const DEFAULT_SCOPE: &'static str = "openid email profile";

    pub fn from_env() -> AppResult<Self> {
        Self::load_with(env_lookup)
    }

    /// 조회 함수로부터 설정을 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - `GOOGLE_CLIENT_ID` 또는 `GOOGLE_CLIENT_SECRET` 누락
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let client_id = required(&lookup, "GOOGLE_CLIENT_ID")?;
        let client_secret = required(&lookup, "GOOGLE_CLIENT_SECRET")?;

        let callback_url = lookup("GOOGLE_REDIRECT_URI").unwrap_or_else(|| {
            format!(
                "{}/api/auth/google/handler/frame",
                ServerConfig::load_with(&lookup).base_url.trim_end_matches('/')
            )
        });

        Ok(Self {
            client_id,
            client_secret,
            callback_url,
            auth_uri: lookup("GOOGLE_AUTH_URI").unwrap_or_else(|| Self::DEFAULT_AUTH_URI.to_string()),
            token_uri: lookup("GOOGLE_TOKEN_URI").unwrap_or_else(|| Self::DEFAULT_TOKEN_URI.to_string()),
            userinfo_uri: lookup("GOOGLE_USERINFO_URI")
                .unwrap_or_else(|| Self::DEFAULT_USERINFO_URI.to_string()),
            scope: lookup("GOOGLE_SCOPE").unwrap_or_else(|| Self::DEFAULT_SCOPE.to_string()),
        })
    }
}

/// OAuth 쿠키 및 nonce 정책 설정
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// 프레임 응답을 전달할 프론트엔드 오리진 (state에 origin이 없을 때 사용)
    pub app_origin: String,
    pub secure_cookies: bool,
    pub nonce_timeout_minutes: i64,
}

impl OAuthConfig {
    /// 리프레시 토큰 쿠키 유지 기간 (1000일)
    pub const REFRESH_COOKIE_MAX_AGE_DAYS: i64 = 1000;

    pub fn from_env() -> Self {
        Self::load_with(env_lookup)
    }

    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let environment = lookup("ENVIRONMENT")
            .map(|e| Environment::from_str(&e))
            .unwrap_or(Environment::Production);

        let secure_cookies = parse_or(
            &lookup,
            "OAUTH_SECURE_COOKIES",
            environment != Environment::Development,
        );

        Self {
            app_origin: lookup("APP_ORIGIN").unwrap_or_else(|| "http://localhost:3000".to_string()),
            secure_cookies,
            nonce_timeout_minutes: parse_or(&lookup, "OAUTH_NONCE_TIMEOUT_MINUTES", 10),
        }
    }
}

/// 아이덴티티 디렉터리 매핑 설정
///
/// `email` 클레임을 카탈로그 사용자 어노테이션에 매핑하는 방법을 정의합니다.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub email_annotation: String,
    pub collection: String,
    pub namespace: String,
    pub cache_ttl_seconds: u64,
}

impl IdentityConfig {
    pub fn from_env() -> Self {
        Self::load_with(env_lookup)
    }

    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            email_annotation: lookup("IDENTITY_EMAIL_ANNOTATION")
                .unwrap_or_else(|| "google.com/email".to_string()),
            collection: lookup("IDENTITY_COLLECTION").unwrap_or_else(|| "catalog_users".to_string()),
            namespace: lookup("IDENTITY_NAMESPACE").unwrap_or_else(|| "default".to_string()),
            cache_ttl_seconds: parse_or(&lookup, "IDENTITY_CACHE_TTL_SECONDS", 600),
        }
    }
}

/// 플랫폼 아이덴티티 토큰(JWT) 설정
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_minutes: i64,
    pub issuer: String,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("expiration_minutes", &self.expiration_minutes)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self::load_with(env_lookup)
    }

    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let secret = lookup("JWT_SECRET").unwrap_or_else(|| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        });

        Self {
            secret,
            expiration_minutes: parse_or(&lookup, "JWT_EXPIRATION_MINUTES", 60),
            issuer: lookup("JWT_ISSUER").unwrap_or_else(|| "google-auth-provider".to_string()),
        }
    }
}
