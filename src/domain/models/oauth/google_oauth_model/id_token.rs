//! OpenID Connect ID Token 페이로드 디코딩
//!
//! 프로필 보완 용도로만 사용하므로 서명은 검증하지 않습니다.
//! 토큰은 TLS로 Google 토큰 엔드포인트에서 직접 받은 값입니다.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use crate::errors::errors::{AppError, AppResult};
use crate::utils::string_utils::deserialize_optional_string;

/// 프로필 보완에 사용하는 ID Token 클레임
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdTokenClaims {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub sub: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub picture: Option<String>,
}

impl IdTokenClaims {
    /// JWT의 페이로드 세그먼트를 서명 검증 없이 디코딩합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ProfileFormatError` - 세그먼트 수, base64, JSON 중 하나라도 잘못된 경우
    pub fn decode_unverified(id_token: &str) -> AppResult<Self> {
        let segments: Vec<&str> = id_token.split('.').collect();
        if segments.len() != 3 {
            return Err(Self::parse_error(format!(
                "expected 3 segments, got {}",
                segments.len()
            )));
        }

        let payload = URL_SAFE_NO_PAD
            .decode(segments[1].trim_end_matches('='))
            .map_err(Self::parse_error)?;

        serde_json::from_slice(&payload).map_err(Self::parse_error)
    }

    fn parse_error(cause: impl std::fmt::Display) -> AppError {
        AppError::ProfileFormatError(format!(
            "failed to parse id token and get profile info, {}",
            cause
        ))
    }
}

#[cfg(test)]
pub(crate) fn encode_test_id_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.c2lnbmF0dXJl", header, payload)
}
