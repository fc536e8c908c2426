//! OAuth state 매개변수
//!
//! CSRF 방지를 위해 nonce와 프론트엔드 실행 정보를 state에 담아 Google에 보냅니다.
//! 같은 nonce를 `google-nonce` 쿠키에도 저장하고, 콜백에서 두 값을 비교합니다.
//!
//! ```text
//! encode: nonce=..&env=..&origin=.. → base64url
//! verify: decode(state).nonce == cookie nonce
//! ```

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use crate::errors::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthState {
    pub nonce: String,
    pub env: String,
    pub origin: Option<String>,
}

impl OAuthState {
    pub fn new(env: impl Into<String>, origin: Option<String>) -> Self {
        Self {
            nonce: uuid::Uuid::new_v4().to_string(),
            env: env.into(),
            origin,
        }
    }

    pub fn encode(&self) -> String {
        let mut params = vec![("nonce", self.nonce.as_str()), ("env", self.env.as_str())];
        if let Some(origin) = &self.origin {
            params.push(("origin", origin.as_str()));
        }

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        URL_SAFE_NO_PAD.encode(query_string)
    }

    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - base64/UTF-8 형식이 잘못되었거나 `nonce`/`env`가 없는 경우
    pub fn decode(state: &str) -> AppResult<Self> {
        let bytes = URL_SAFE_NO_PAD
            .decode(state.trim_end_matches('='))
            .map_err(Self::invalid)?;
        let query_string = String::from_utf8(bytes).map_err(Self::invalid)?;

        let mut nonce = None;
        let mut env = None;
        let mut origin = None;

        for pair in query_string.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = urlencoding::decode(value).map_err(Self::invalid)?.into_owned();
            match key {
                "nonce" => nonce = Some(value),
                "env" => env = Some(value),
                "origin" => origin = Some(value),
                _ => {}
            }
        }

        Ok(Self {
            nonce: nonce
                .filter(|n| !n.is_empty())
                .ok_or_else(|| Self::invalid("missing nonce"))?,
            env: env
                .filter(|e| !e.is_empty())
                .ok_or_else(|| Self::invalid("missing env"))?,
            origin: origin.filter(|o| !o.is_empty()),
        })
    }

    /// 쿠키에 저장된 nonce와 비교합니다.
    pub fn verify_nonce(&self, cookie_nonce: Option<&str>) -> AppResult<()> {
        match cookie_nonce {
            None | Some("") => Err(AppError::AuthenticationError(
                "Auth response is missing cookie nonce".to_string(),
            )),
            Some(nonce) if nonce == self.nonce => Ok(()),
            Some(_) => Err(AppError::AuthenticationError("Invalid nonce".to_string())),
        }
    }

    fn invalid(cause: impl std::fmt::Display) -> AppError {
        AppError::AuthenticationError(format!("Invalid OAuth state, {}", cause))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_round_trip_keeps_fields() {
        let state = OAuthState::new("development", Some("http://localhost:3000".to_string()));

        let decoded = OAuthState::decode(&state.encode()).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_state_without_origin() {
        let state = OAuthState::new("production", None);

        let decoded = OAuthState::decode(&state.encode()).unwrap();
        assert_eq!(decoded.origin, None);
        assert_eq!(decoded.env, "production");
    }

    #[test]
    fn test_nonces_are_unique() {
        assert_ne!(OAuthState::new("dev", None).nonce, OAuthState::new("dev", None).nonce);
    }

    #[test]
    fn test_verify_nonce() {
        let state = OAuthState::new("development", None);

        assert!(state.verify_nonce(Some(&state.nonce)).is_ok());
        assert!(matches!(
            state.verify_nonce(Some("other")),
            Err(AppError::AuthenticationError(ref m)) if m == "Invalid nonce"
        ));
        assert!(matches!(
            state.verify_nonce(None),
            Err(AppError::AuthenticationError(ref m)) if m.contains("missing cookie nonce")
        ));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(OAuthState::decode("***").is_err());

        let without_nonce = URL_SAFE_NO_PAD.encode("env=development");
        assert!(matches!(
            OAuthState::decode(&without_nonce),
            Err(AppError::AuthenticationError(ref m)) if m.contains("nonce")
        ));
    }
}
