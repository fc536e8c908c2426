//! 인증 요청관련 DTO
//!
//! Google 인증 라우트가 받는 쿼리 파라미터를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// `/start` 쿼리 파라미터
#[derive(Debug, Deserialize, Validate)]
pub struct StartQuery {
    /// 프론트엔드 실행 환경 (예: `development`)
    #[serde(default)]
    #[validate(length(min = 1, message = "env가 필요합니다"))]
    pub env: String,

    /// 프레임 응답을 받을 프론트엔드 오리진
    pub origin: Option<String>,
}

/// `/handler/frame` 콜백 쿼리 파라미터
///
/// Google이 에러를 돌려준 경우 `code`/`state` 없이 `error`만 올 수 있습니다.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct FrameCallbackQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "State가 필요합니다"))]
    pub state: String,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
    pub error_description: Option<String>,
}
