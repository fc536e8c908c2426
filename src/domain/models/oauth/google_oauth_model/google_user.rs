//! # Google User Information Model
//!
//! Google UserInfo API (`/oauth2/v2/userinfo`)가 반환하는 원시 프로필 모델입니다.
//!
//! ## 응답 데이터 구조
//!
//! ```json
//! {
//!   "id": "1234567890",
//!   "email": "user@gmail.com",
//!   "verified_email": true,
//!   "name": "John Doe",
//!   "given_name": "John",
//!   "family_name": "Doe",
//!   "picture": "https://lh3.googleusercontent.com/.../photo.jpg",
//!   "locale": "en"
//! }
//! ```
//!
//! `email` 스코프가 거부되면 `email`이 빠질 수 있으므로 `id`를 제외한 모든 필드는
//! 선택 값입니다. 빈 문자열은 `None`으로 역직렬화됩니다.

use serde::Deserialize;
use crate::utils::string_utils::deserialize_optional_string;

/// Google 사용자 원시 프로필
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 사용자 고유 식별자 (OpenID `sub`)
    #[serde(default)]
    pub id: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    #[serde(default)]
    pub verified_email: Option<bool>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub given_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub family_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub picture: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub locale: Option<String>,
}

impl GoogleUserInfo {
    /// 표시 이름: `name`, 없으면 `given_name family_name`
    pub fn display_name(&self) -> Option<String> {
        if let Some(name) = &self.name {
            return Some(name.clone());
        }

        let parts: Vec<&str> = [self.given_name.as_deref(), self.family_name.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_userinfo() {
        let json = r#"{
            "id": "1234567890",
            "email": "user@gmail.com",
            "verified_email": true,
            "name": "John Doe",
            "given_name": "John",
            "family_name": "Doe",
            "picture": "https://lh3.googleusercontent.com/photo.jpg",
            "locale": "en"
        }"#;

        let user: GoogleUserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "1234567890");
        assert_eq!(user.email.as_deref(), Some("user@gmail.com"));
        assert_eq!(user.verified_email, Some(true));
        assert_eq!(user.display_name().as_deref(), Some("John Doe"));
    }

    #[test]
    fn test_deserialize_without_email_scope() {
        let user: GoogleUserInfo = serde_json::from_str(r#"{"id": "42", "email": "  "}"#).unwrap();

        assert_eq!(user.email, None);
        assert_eq!(user.picture, None);
        assert_eq!(user.display_name(), None);
    }

    #[test]
    fn test_display_name_from_given_and_family() {
        let user = GoogleUserInfo {
            id: "1".to_string(),
            given_name: Some("철수".to_string()),
            family_name: Some("김".to_string()),
            ..Default::default()
        };

        assert_eq!(user.display_name().as_deref(), Some("철수 김"));
    }
}
