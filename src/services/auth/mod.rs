//! 인증 서비스 모듈
//!
//! Google OAuth 핸드셰이크 결과를 로컬 아이덴티티로 매핑하는 서비스들을 제공합니다.
//!
//! # 구성
//!
//! - [`profile_normalizer`] - userinfo/ID Token → `NormalizedProfile`
//! - [`identity_resolver`] - 이메일 → 디렉터리 아이덴티티 (실패 시 로컬 파트 폴백)
//! - [`response_builder`] - 정규화와 아이덴티티 결정을 묶어 `AuthResponse` 조립
//! - [`handshake`] - Google 토큰 교환/갱신, 사용자 정보 조회
//! - [`oauth_state`] - CSRF 방지용 state/nonce
//! - [`google_auth_provider`] - 시작, 프레임 콜백, 갱신 플로우 조율
//! - [`token_service`] - 플랫폼 아이덴티티 JWT 발급/검증
//! - [`warning_sink`] - 폴백 경고 출력처
//!
//! # Examples
//!
//! ```rust,ignore
//! let resolver = Arc::new(IdentityResolver::new(directory, Arc::new(LogWarningSink)));
//! let provider = GoogleAuthProvider::new(
//!     Arc::new(GoogleHandshake::new(google_config)),
//!     SessionResponseBuilder::new(resolver),
//!     IdentityTokenService::new(JwtConfig::from_env(), "default"),
//!     OAuthConfig::from_env(),
//! );
//! ```

pub mod warning_sink;
pub mod profile_normalizer;
pub mod identity_resolver;
pub mod response_builder;
pub mod handshake;
pub mod oauth_state;
pub mod google_auth_provider;
pub mod token_service;

pub use warning_sink::{LogWarningSink, WarningSink};
pub use profile_normalizer::normalize_profile;
pub use identity_resolver::IdentityResolver;
pub use response_builder::SessionResponseBuilder;
pub use handshake::{GoogleHandshake, HandshakeResult, OAuthHandshake};
pub use oauth_state::OAuthState;
pub use google_auth_provider::{FrameOutcome, FrameSuccess, GoogleAuthProvider, StartResult};
pub use token_service::IdentityTokenService;
