//! Google Authentication HTTP Handlers
//!
//! 팝업 기반 Google 로그인 엔드포인트입니다. 모든 라우트는 `/api/auth/google` 아래에 마운트됩니다.
//!
//! # Endpoints
//!
//! - `GET /start` - nonce 쿠키 설정 후 Google 인증 페이지로 302 리다이렉트
//! - `GET /handler/frame` - Google 콜백, 항상 HTML 프레임으로 응답
//! - `GET /refresh` - 리프레시 쿠키로 세션 갱신
//! - `POST /logout` - 리프레시 쿠키 삭제
//!
//! # Cookies
//!
//! | 이름 | Path | 유지 기간 |
//! |------|------|-----------|
//! | `google-nonce` | `/api/auth/google/handler` | 10분 |
//! | `google-refresh-token` | `/api/auth/google` | 1000일 |

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::config::OAuthConfig;
use crate::domain::dto::auth::{FrameCallbackQuery, FrameMessage, StartQuery};
use crate::errors::errors::AppError;
use crate::handlers::frame::render_frame_page;
use crate::services::auth::GoogleAuthProvider;

pub const NONCE_COOKIE: &str = "google-nonce";
pub const REFRESH_COOKIE: &str = "google-refresh-token";

const NONCE_COOKIE_PATH: &str = "/api/auth/google/handler";
const REFRESH_COOKIE_PATH: &str = "/api/auth/google";

fn build_cookie(name: &'static str, value: String, path: &'static str, config: &OAuthConfig) -> Cookie<'static> {
    Cookie::build(name, value)
        .path(path)
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookies)
        .finish()
}

fn nonce_cookie(nonce: String, config: &OAuthConfig) -> Cookie<'static> {
    let mut cookie = build_cookie(NONCE_COOKIE, nonce, NONCE_COOKIE_PATH, config);
    cookie.set_max_age(Duration::minutes(config.nonce_timeout_minutes));
    cookie
}

fn refresh_cookie(refresh_token: String, config: &OAuthConfig) -> Cookie<'static> {
    let mut cookie = build_cookie(REFRESH_COOKIE, refresh_token, REFRESH_COOKIE_PATH, config);
    cookie.set_max_age(Duration::days(OAuthConfig::REFRESH_COOKIE_MAX_AGE_DAYS));
    cookie
}

fn removal_cookie(name: &'static str, path: &'static str, config: &OAuthConfig) -> Cookie<'static> {
    let mut cookie = build_cookie(name, String::new(), path, config);
    cookie.make_removal();
    cookie
}

/// Google 로그인 시작 핸들러
///
/// # Endpoint
/// `GET /api/auth/google/start?env=development&origin=http://localhost:3000`
#[get("/start")]
pub async fn google_start(
    provider: web::Data<GoogleAuthProvider>,
    query: web::Query<StartQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let started = provider.start(&query.env, query.origin.clone())?;

    Ok(HttpResponse::Found()
        .append_header((header::LOCATION, started.authorization_url))
        .cookie(nonce_cookie(started.nonce, provider.oauth_config()))
        .finish())
}

/// Google OAuth 콜백 핸들러
///
/// 성공과 실패 모두 HTML 프레임으로 응답하며, nonce 쿠키는 항상 삭제합니다.
///
/// # Endpoint
/// `GET /api/auth/google/handler/frame?code=..&state=..`
#[get("/handler/frame")]
pub async fn google_frame_handler(
    req: HttpRequest,
    provider: web::Data<GoogleAuthProvider>,
    query: web::Query<FrameCallbackQuery>,
) -> HttpResponse {
    let nonce = req.cookie(NONCE_COOKIE).map(|c| c.value().to_string());
    let outcome = provider.handle_frame(&query, nonce.as_deref()).await;
    let config = provider.oauth_config();

    let mut response = HttpResponse::Ok();
    response
        .content_type("text/html; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .cookie(removal_cookie(NONCE_COOKIE, NONCE_COOKIE_PATH, config));

    let message = match outcome.result {
        Ok(success) => {
            if let Some(refresh_token) = success.refresh_token {
                response.cookie(refresh_cookie(refresh_token, config));
            }
            FrameMessage::response(success.session)
        }
        Err(e) => FrameMessage::error(&e),
    };

    response.body(render_frame_page(&message, &outcome.origin))
}

/// 세션 갱신 핸들러
///
/// # Endpoint
/// `GET /api/auth/google/refresh`
#[get("/refresh")]
pub async fn google_refresh(
    req: HttpRequest,
    provider: web::Data<GoogleAuthProvider>,
) -> Result<HttpResponse, AppError> {
    let refresh_token = req.cookie(REFRESH_COOKIE).map(|c| c.value().to_string());

    let session = provider.refresh(refresh_token.as_deref()).await?;

    log::info!("Google 세션 갱신 성공: {}", session.identity.id);
    Ok(HttpResponse::Ok().json(session))
}

/// 로그아웃 핸들러
///
/// # Endpoint
/// `POST /api/auth/google/logout`
#[post("/logout")]
pub async fn google_logout(provider: web::Data<GoogleAuthProvider>) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(removal_cookie(REFRESH_COOKIE, REFRESH_COOKIE_PATH, provider.oauth_config()))
        .json(json!({ "success": true }))
}
