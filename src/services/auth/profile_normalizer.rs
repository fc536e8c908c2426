//! Google 프로필 정규화
//!
//! userinfo 응답(과 선택적인 ID Token)을 프로바이더에 독립적인
//! [`NormalizedProfile`]로 변환합니다. 부수 효과가 없는 순수 함수입니다.

use crate::domain::models::auth::NormalizedProfile;
use crate::domain::models::oauth::google_oauth_model::{GoogleUserInfo, IdTokenClaims};
use crate::errors::errors::{AppError, AppResult};

/// userinfo 프로필을 정규화합니다.
///
/// 이메일이나 사진이 비어 있고 `id_token`이 주어지면 페이로드 클레임으로 채웁니다.
/// 둘 다 있으면 ID Token은 디코딩하지 않습니다.
///
/// # Errors
///
/// * `AppError::ProfileFormatError` - 프로필에 `id`가 없거나 ID Token 형식이 잘못된 경우
///
/// # Examples
///
/// ```rust,ignore
/// let profile = normalize_profile(&google_user, provider_info.id_token.as_deref())?;
/// assert_eq!(profile.email.as_deref(), Some("bob@co.com"));
/// ```
pub fn normalize_profile(raw: &GoogleUserInfo, id_token: Option<&str>) -> AppResult<NormalizedProfile> {
    if raw.id.trim().is_empty() {
        return Err(AppError::ProfileFormatError(
            "google profile did not contain a subject id".to_string(),
        ));
    }

    let mut profile = NormalizedProfile {
        display_name: raw.display_name(),
        email: raw.email.clone(),
        picture_url: raw.picture.clone(),
    };

    if profile.email.is_none() || profile.picture_url.is_none() {
        if let Some(token) = id_token {
            let claims = IdTokenClaims::decode_unverified(token)?;
            profile.email = profile.email.or(claims.email);
            profile.picture_url = profile.picture_url.or(claims.picture);
        }
    }

    Ok(profile)
}
