//! HTTP 요청/응답 DTO

pub mod auth;

pub use auth::*;
