//! API 라우트 설정 모듈
//!
//! 헬스체크와 Google 인증 라우트를 등록합니다.
//! Google 라우트는 프로바이더가 구성된 경우에만 마운트됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(provider))
//!     .configure(|cfg| configure_all_routes(cfg, true));
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
/// * `google_enabled` - Google 프로바이더 등록 여부
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, google_enabled: bool) {
    // Health check endpoint
    cfg.service(health_check);

    if google_enabled {
        configure_google_routes(cfg);
    }
}

/// Google 인증 라우트를 설정합니다
///
/// `web::Data<GoogleAuthProvider>`가 앱 데이터로 등록되어 있어야 합니다.
///
/// # Available Routes
///
/// - `GET /api/auth/google/start` - Google 인증 페이지로 리다이렉트
/// - `GET /api/auth/google/handler/frame` - OAuth 콜백 (HTML 프레임)
/// - `GET /api/auth/google/refresh` - 세션 갱신
/// - `POST /api/auth/google/logout` - 로그아웃
///
/// # Examples
///
/// ```bash
/// # 팝업에서 로그인 시작
/// open "http://localhost:7007/api/auth/google/start?env=development"
///
/// # 세션 갱신
/// curl -b "google-refresh-token=1//..." http://localhost:7007/api/auth/google/refresh
/// ```
pub fn configure_google_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth/google")
            .service(handlers::auth::google_start)
            .service(handlers::auth::google_frame_handler)
            .service(handlers::auth::google_refresh)
            .service(handlers::auth::google_logout)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:7007/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "google_auth_provider",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": {
///     "directory": "MongoDB",
///     "cache": "Redis"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "google_auth_provider",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "directory": "MongoDB",
            "cache": "Redis"
        }
    }))
}
