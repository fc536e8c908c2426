//! # Domain Models
//!
//! 인증 플로우 전반에서 사용하는 도메인 모델입니다.
//!
//! - [`auth`] - 정규화 프로필, 프로바이더 토큰, 아이덴티티, 최종 인증 응답
//! - [`oauth`] - Google 원시 프로필과 ID Token 클레임
//! - [`token`] - 플랫폼 아이덴티티 토큰 클레임

pub mod auth;
pub mod oauth;
pub mod token;
