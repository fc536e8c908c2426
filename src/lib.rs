//! Google 인증 프로바이더
//!
//! Google OAuth 2.0 로그인 결과를 카탈로그 디렉터리의 로컬 아이덴티티로 매핑하는
//! 인증 백엔드입니다. 디렉터리에서 사용자를 찾지 못하면 이메일 로컬 파트를
//! 아이덴티티로 사용합니다.
//!
//! # Features
//!
//! - **OAuth 2.0**: 팝업 기반 Google 로그인 (`/start`, `/handler/frame`, `/refresh`, `/logout`)
//! - **아이덴티티 결정**: 이메일 어노테이션 기반 카탈로그 조회, 로컬 파트 폴백
//! - **아이덴티티 토큰**: HS256 JWT (`sub = user:default/<id>`)
//! - **MongoDB**: 카탈로그 사용자 저장소
//! - **Redis**: 디렉터리 조회 캐시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/auth/google/*, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 쿠키, 리다이렉트, HTML 프레임
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 핸드셰이크, 정규화, 아이덴티티 결정
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← IdentityDirectory
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
