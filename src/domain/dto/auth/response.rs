//! Google OAuth 응답 DTO 모듈
//!
//! Google 토큰 엔드포인트 응답과, 이 서비스가 프론트엔드에 돌려주는 세션 페이로드를 정의합니다.

use serde::{Deserialize, Serialize};
use crate::domain::models::auth::{AuthResponse, NormalizedProfile, ProviderTokenInfo};
use crate::errors::errors::AppError;

/// Google OAuth 2.0 토큰 교환/갱신 응답
///
/// 리프레시 요청에는 `refresh_token`이 포함되지 않습니다.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    /// Google OAuth 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (항상 "Bearer")
    #[serde(default)]
    pub token_type: Option<String>,
    /// 토큰 만료 시간 (초 단위)
    #[serde(default)]
    pub expires_in: i64,
    /// 리프레시 토큰 (`access_type=offline` 최초 동의 시에만)
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// 부여된 권한 범위
    #[serde(default)]
    pub scope: String,
    /// OpenID Connect ID Token
    #[serde(default)]
    pub id_token: Option<String>,
}

impl GoogleTokenResponse {
    pub fn provider_info(&self) -> ProviderTokenInfo {
        ProviderTokenInfo {
            access_token: self.access_token.clone(),
            id_token: self.id_token.clone(),
            scope: self.scope.clone(),
            expires_in_seconds: self.expires_in,
        }
    }
}

/// 플랫폼 아이덴티티와 서명된 토큰
#[derive(Debug, Clone, Serialize)]
pub struct IdentityPayload {
    pub id: String,
    pub token: String,
}

/// 프론트엔드로 전달되는 세션 페이로드
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    pub provider_info: ProviderTokenInfo,
    pub profile: NormalizedProfile,
    pub identity: IdentityPayload,
}

impl SessionPayload {
    pub fn new(response: AuthResponse, token: String) -> Self {
        Self {
            provider_info: response.provider_info,
            profile: response.profile,
            identity: IdentityPayload {
                id: response.identity.id,
                token,
            },
        }
    }
}

/// 프레임 에러 본문
#[derive(Debug, Clone, Serialize)]
pub struct FrameError {
    pub name: String,
    pub message: String,
}

/// 팝업 창이 `window.opener`에 전달하는 메시지
///
/// `response`와 `error` 중 정확히 하나만 채워집니다.
#[derive(Debug, Clone, Serialize)]
pub struct FrameMessage {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SessionPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FrameError>,
}

impl FrameMessage {
    pub const KIND: &'static str = "authorization_response";

    pub fn response(payload: SessionPayload) -> Self {
        Self { kind: Self::KIND, response: Some(payload), error: None }
    }

    pub fn error(err: &AppError) -> Self {
        Self {
            kind: Self::KIND,
            response: None,
            error: Some(FrameError {
                name: err.name().to_string(),
                message: err.to_string(),
            }),
        }
    }
}
