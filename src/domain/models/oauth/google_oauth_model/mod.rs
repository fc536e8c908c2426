//! # Google OAuth 2.0 Domain Models
//!
//! Google OAuth 2.0 / OpenID Connect 응답을 표현하는 모델입니다.
//!
//! - **`google_user`**: UserInfo API 원시 프로필 (`GoogleUserInfo`)
//! - **`id_token`**: ID Token 페이로드 클레임 (`IdTokenClaims`)
//!
//! ## Authorization Code Flow
//! ```text
//! 1. 사용자 → /api/auth/google/start → Google 인증 URL로 리다이렉트
//! 2. Google → authorization_code와 state를 들고 /handler/frame 으로 리다이렉트
//! 3. 서버 → authorization_code를 access_token/id_token으로 교환
//! 4. 서버 → access_token으로 사용자 정보 조회 → GoogleUserInfo
//! ```

pub mod google_user;
pub mod id_token;

pub use google_user::GoogleUserInfo;
pub use id_token::IdTokenClaims;
