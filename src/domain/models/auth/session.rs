//! 인증 세션 응답 모델
//!
//! 완료된 OAuth 핸드셰이크를 로컬 아이덴티티로 매핑한 최종 결과를 표현합니다.
//! 모든 필드는 프론트엔드 계약에 맞춰 camelCase로 직렬화됩니다.

use serde::Serialize;

/// 프로바이더에 독립적인 사용자 프로필
///
/// 인증 시도마다 한 번 생성되며 생성 후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "picture", skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
}

/// 프로바이더 토큰 번들
///
/// 응답에 포함되어 클라이언트로 전달될 뿐, 이 서비스가 저장하지 않습니다.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderTokenInfo {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    pub scope: String,
    pub expires_in_seconds: i64,
}

impl std::fmt::Debug for ProviderTokenInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderTokenInfo")
            .field("access_token", &"***")
            .field("id_token", &self.id_token.as_ref().map(|_| "***"))
            .field("scope", &self.scope)
            .field("expires_in_seconds", &self.expires_in_seconds)
            .finish()
    }
}

/// 로컬 시스템 아이덴티티
///
/// `id`는 리졸버를 통과한 이후 항상 비어 있지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedIdentity {
    pub id: String,
}

/// 최종 인증 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub provider_info: ProviderTokenInfo,
    pub profile: NormalizedProfile,
    pub identity: ResolvedIdentity,
}
