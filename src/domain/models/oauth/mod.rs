//! OAuth 프로바이더별 도메인 모델

pub mod google_oauth_model;
