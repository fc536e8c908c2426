//! # Domain Layer
//!
//! 인증 프로바이더의 도메인 모델과 HTTP DTO를 정의합니다.

pub mod dto;
pub mod models;
