//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! Google 인증 프로바이더를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 전파 정책
//!
//! | 에러 | 처리 |
//! |------|------|
//! | `MissingClaimError` | 호출자에게 전달, 폴백 불가 |
//! | `DirectoryLookupError` | 리졸버 내부에서 폴백으로 복구, 경고 로그만 남김 |
//! | `HandshakeError` | 해석하지 않고 그대로 전달 |
//! | `ProfileFormatError` | 호출자에게 전달 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! fn require_email(profile: &NormalizedProfile) -> Result<&str, AppError> {
//!     profile.email.as_deref().ok_or_else(|| {
//!         AppError::MissingClaimError("profile contained no email".to_string())
//!     })
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 인증 플로우에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 클레임(이메일) 누락 (401 Unauthorized)
    #[error("Missing claim: {0}")]
    MissingClaimError(String),

    /// 아이덴티티 디렉터리 조회 실패 (503 Service Unavailable)
    ///
    /// 리졸버가 폴백으로 복구하므로 정상 흐름에서는 HTTP까지 올라오지 않습니다.
    #[error("Directory lookup error: {0}")]
    DirectoryLookupError(String),

    /// OAuth 핸드셰이크 실패 (401 Unauthorized)
    #[error("Handshake error: {0}")]
    HandshakeError(String),

    /// 프로바이더 프로필 형식 오류 (502 Bad Gateway)
    #[error("Profile format error: {0}")]
    ProfileFormatError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 설정 누락/오류 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 프레임 응답에 실리는 에러 이름
    pub fn name(&self) -> &'static str {
        match self {
            AppError::MissingClaimError(_) => "MissingClaimError",
            AppError::DirectoryLookupError(_) => "DirectoryLookupError",
            AppError::HandshakeError(_) => "HandshakeError",
            AppError::ProfileFormatError(_) => "ProfileFormatError",
            AppError::ValidationError(_) => "ValidationError",
            AppError::AuthenticationError(_) => "AuthenticationError",
            AppError::ConfigError(_) => "ConfigError",
            AppError::DatabaseError(_) => "DatabaseError",
            AppError::InternalError(_) => "InternalError",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::MissingClaimError(_)
            | AppError::HandshakeError(_)
            | AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::ProfileFormatError(_) => StatusCode::BAD_GATEWAY,
            AppError::DirectoryLookupError(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("env is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_claim_error_response() {
        let error = AppError::MissingClaimError("profile contained no email".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_handshake_error_response() {
        let error = AppError::HandshakeError("invalid_grant".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_profile_format_error_response() {
        let error = AppError::ProfileFormatError("bad id token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_directory_lookup_error_response() {
        let error = AppError::DirectoryLookupError("timeout".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::ConfigError("GOOGLE_CLIENT_ID must be set".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_names() {
        assert_eq!(AppError::MissingClaimError(String::new()).name(), "MissingClaimError");
        assert_eq!(AppError::HandshakeError(String::new()).name(), "HandshakeError");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
