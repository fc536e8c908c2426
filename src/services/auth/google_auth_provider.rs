//! # Google Auth Provider
//!
//! 팝업 기반 Google 로그인 플로우를 조율합니다.
//!
//! ```text
//! ┌──────────────┐  1. GET /start?env=..     ┌──────────────┐
//! │ 프론트엔드 팝업 ├──────────────────────────►│  이 서비스     │ nonce 쿠키 + state 생성
//! └──────────────┘  2. 302 → Google          └──────────────┘
//!        │                                          ▲
//!        │ 3. 사용자 인증                              │ 4. GET /handler/frame?code&state
//!        ▼                                          │
//! ┌──────────────┐──────────────────────────────────┘
//! │ Google OAuth │        5. nonce 검증 → 코드 교환 → 프로필 정규화 → 아이덴티티 결정
//! └──────────────┘        6. HTML 프레임이 window.opener에 결과 전달
//! ```
//!
//! 요청마다 독립적으로 동작하며 공유되는 가변 상태가 없습니다.

use std::sync::Arc;
use validator::Validate;
use crate::config::OAuthConfig;
use crate::domain::dto::auth::{FrameCallbackQuery, SessionPayload};
use crate::errors::errors::{AppError, AppResult};
use crate::services::auth::handshake::OAuthHandshake;
use crate::services::auth::oauth_state::OAuthState;
use crate::services::auth::response_builder::SessionResponseBuilder;
use crate::services::auth::token_service::IdentityTokenService;
use crate::utils::string_utils::validate_required_string;

/// 로그인 시작 결과
#[derive(Debug, Clone)]
pub struct StartResult {
    pub authorization_url: String,
    /// `google-nonce` 쿠키에 저장할 값
    pub nonce: String,
}

/// 프레임 콜백 성공 결과
#[derive(Debug, Clone)]
pub struct FrameSuccess {
    pub session: SessionPayload,
    pub refresh_token: Option<String>,
}

/// 프레임 콜백 처리 결과
///
/// 실패한 경우에도 결과를 전달할 오리진이 필요하므로 둘을 함께 돌려줍니다.
#[derive(Debug)]
pub struct FrameOutcome {
    pub origin: String,
    pub result: AppResult<FrameSuccess>,
}

pub struct GoogleAuthProvider {
    handshake: Arc<dyn OAuthHandshake>,
    builder: SessionResponseBuilder,
    tokens: IdentityTokenService,
    oauth: OAuthConfig,
}

impl GoogleAuthProvider {
    pub fn new(
        handshake: Arc<dyn OAuthHandshake>,
        builder: SessionResponseBuilder,
        tokens: IdentityTokenService,
        oauth: OAuthConfig,
    ) -> Self {
        Self { handshake, builder, tokens, oauth }
    }

    pub fn oauth_config(&self) -> &OAuthConfig {
        &self.oauth
    }

    /// 새 nonce로 Google 인증 URL을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `env`가 비어 있는 경우
    pub fn start(&self, env: &str, origin: Option<String>) -> AppResult<StartResult> {
        let env = validate_required_string(env, "env")?;
        let state = OAuthState::new(env, origin.filter(|o| !o.trim().is_empty()));

        Ok(StartResult {
            authorization_url: self.handshake.authorization_url(&state.encode()),
            nonce: state.nonce,
        })
    }

    /// Google 콜백을 처리합니다.
    pub async fn handle_frame(&self, query: &FrameCallbackQuery, nonce_cookie: Option<&str>) -> FrameOutcome {
        let state = OAuthState::decode(&query.state);
        let origin = self.target_origin(state.as_ref().ok());

        let result = self.complete_frame(query, nonce_cookie, state).await;
        match &result {
            Ok(success) => log::info!("Google 로그인 완료: {}", success.session.identity.id),
            Err(e) => log::log!(failure_log_level(e), "Google 로그인 실패: [{}] {}", e.name(), e),
        }

        FrameOutcome { origin, result }
    }

    async fn complete_frame(
        &self,
        query: &FrameCallbackQuery,
        nonce_cookie: Option<&str>,
        state: AppResult<OAuthState>,
    ) -> AppResult<FrameSuccess> {
        if let Some(error) = &query.error {
            return Err(AppError::HandshakeError(
                query.error_description.clone().unwrap_or_else(|| error.clone()),
            ));
        }

        query.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;

        let state = state?;
        if let Some(origin) = &state.origin {
            if !self.is_allowed_origin(origin) {
                return Err(AppError::AuthenticationError(format!(
                    "Origin '{}' is not allowed",
                    origin
                )));
            }
        }
        state.verify_nonce(nonce_cookie)?;

        let handshake = self.handshake.exchange_code(&query.code).await?;
        let response = self.builder.build(handshake.provider_info, &handshake.profile).await?;
        let token = self.tokens.issue(&response.identity)?;

        Ok(FrameSuccess {
            session: SessionPayload::new(response, token),
            refresh_token: handshake.refresh_token,
        })
    }

    /// 리프레시 쿠키로 세션을 갱신합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 리프레시 쿠키가 없는 경우
    /// * 그 외 핸드셰이크, 정규화, 아이덴티티 결정 단계의 에러
    pub async fn refresh(&self, refresh_token: Option<&str>) -> AppResult<SessionPayload> {
        let refresh_token = refresh_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("Missing session cookie".to_string()))?;

        let handshake = self.handshake.refresh(refresh_token).await?;
        let response = self.builder.build(handshake.provider_info, &handshake.profile).await?;
        let token = self.tokens.issue(&response.identity)?;

        Ok(SessionPayload::new(response, token))
    }

    fn is_allowed_origin(&self, origin: &str) -> bool {
        origin.trim_end_matches('/') == self.oauth.app_origin.trim_end_matches('/')
    }

    fn target_origin(&self, state: Option<&OAuthState>) -> String {
        state
            .and_then(|s| s.origin.as_deref())
            .filter(|o| self.is_allowed_origin(o))
            .unwrap_or(&self.oauth.app_origin)
            .to_string()
    }
}

/// 프레임 실패 로그 레벨
///
/// 이메일 누락은 info로 남깁니다. warn은 폴백 같은 저하 이벤트용입니다.
fn failure_log_level(error: &AppError) -> log::Level {
    match error {
        AppError::MissingClaimError(_) => log::Level::Info,
        _ => log::Level::Warn,
    }
}
