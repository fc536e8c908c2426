//! # Google OAuth 2.0 핸드셰이크
//!
//! Authorization Code 플로우의 외부 통신 부분을 담당합니다.
//! 코어 로직은 [`OAuthHandshake`] trait만 알며, 실패 원인은 해석하지 않고
//! `AppError::HandshakeError`로 그대로 전달합니다.
//!
//! ## 사용하는 Google API 엔드포인트
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Authorization** | `https://accounts.google.com/o/oauth2/v2/auth` | GET |
//! | **Token Exchange / Refresh** | `https://oauth2.googleapis.com/token` | POST |
//! | **User Info** | `https://www.googleapis.com/oauth2/v2/userinfo` | GET |

use async_trait::async_trait;
use crate::config::GoogleOAuthConfig;
use crate::domain::dto::auth::GoogleTokenResponse;
use crate::domain::models::auth::ProviderTokenInfo;
use crate::domain::models::oauth::google_oauth_model::GoogleUserInfo;
use crate::errors::errors::{AppError, AppResult};

/// 완료된 핸드셰이크 결과
#[derive(Debug, Clone)]
pub struct HandshakeResult {
    pub provider_info: ProviderTokenInfo,
    pub profile: GoogleUserInfo,
    /// 새로 발급된 리프레시 토큰. 갱신 요청에서는 항상 `None`입니다.
    pub refresh_token: Option<String>,
}

#[async_trait]
pub trait OAuthHandshake: Send + Sync {
    fn authorization_url(&self, state: &str) -> String;

    async fn exchange_code(&self, code: &str) -> AppResult<HandshakeResult>;

    async fn refresh(&self, refresh_token: &str) -> AppResult<HandshakeResult>;
}

/// `reqwest` 기반 Google 핸드셰이크
pub struct GoogleHandshake {
    config: GoogleOAuthConfig,
    client: reqwest::Client,
}

impl GoogleHandshake {
    pub fn new(config: GoogleOAuthConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn request_token(&self, params: &[(&str, &str)]) -> AppResult<GoogleTokenResponse> {
        let response = self
            .client
            .post(&self.config.token_uri)
            .form(params)
            .send()
            .await
            .map_err(|e| AppError::HandshakeError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::HandshakeError(format!(
                "Google 토큰 교환 실패: {}",
                error_text
            )));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::HandshakeError(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    async fn get_user_info(&self, access_token: &str) -> AppResult<GoogleUserInfo> {
        let response = self
            .client
            .get(&self.config.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::HandshakeError(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::HandshakeError(format!(
                "Google 사용자 정보 조회 실패: {}",
                error_text
            )));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::HandshakeError(format!("Google 사용자 정보 파싱 실패: {}", e)))
    }

    async fn complete(&self, token: GoogleTokenResponse) -> AppResult<HandshakeResult> {
        let profile = self.get_user_info(&token.access_token).await?;

        Ok(HandshakeResult {
            provider_info: token.provider_info(),
            profile,
            refresh_token: token.refresh_token,
        })
    }
}

#[async_trait]
impl OAuthHandshake for GoogleHandshake {
    fn authorization_url(&self, state: &str) -> String {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.callback_url.as_str()),
            ("response_type", "code"),
            ("scope", self.config.scope.as_str()),
            ("access_type", "offline"),
            ("prompt", "consent"),
            ("include_granted_scopes", "true"),
            ("state", state),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.auth_uri, query_string)
    }

    async fn exchange_code(&self, code: &str) -> AppResult<HandshakeResult> {
        let token = self
            .request_token(&[
                ("code", code),
                ("client_id", &self.config.client_id),
                ("client_secret", &self.config.client_secret),
                ("redirect_uri", &self.config.callback_url),
                ("grant_type", "authorization_code"),
            ])
            .await?;

        self.complete(token).await
    }

    async fn refresh(&self, refresh_token: &str) -> AppResult<HandshakeResult> {
        let token = self
            .request_token(&[
                ("refresh_token", refresh_token),
                ("client_id", &self.config.client_id),
                ("client_secret", &self.config.client_secret),
                ("grant_type", "refresh_token"),
            ])
            .await?;

        let mut result = self.complete(token).await?;
        result.refresh_token = None;
        Ok(result)
    }
}
