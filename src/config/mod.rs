//! # Configuration Module
//!
//! 인증 프로바이더 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 요청 제한 설정
//! - [`auth_config`] - Google OAuth, 쿠키 정책, 아이덴티티 매핑, JWT 설정
//!
//! ## Google 프로바이더 등록
//!
//! `GOOGLE_CLIENT_ID`/`GOOGLE_CLIENT_SECRET`가 없으면 [`GoogleOAuthConfig::from_env`]가
//! `ConfigError`를 반환하고, 서버는 경고 로그를 남긴 뒤 Google 라우트 없이 기동합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="7007"
//! export AUTH_BASE_URL="https://auth.example.com"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="portal_catalog"
//! export REDIS_URL="redis://localhost:6379"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
