//! 팝업 프레임 응답 페이지
//!
//! 인증 결과를 `window.opener.postMessage`로 프론트엔드에 전달하는 HTML을 만듭니다.
//! 페이로드와 오리진은 퍼센트 인코딩한 뒤 스크립트 안에서 `decodeURIComponent`로 복원하므로
//! 프로필 데이터가 스크립트 블록을 벗어날 수 없습니다.

use crate::domain::dto::auth::FrameMessage;

const FALLBACK_MESSAGE: &str =
    r#"{"type":"authorization_response","error":{"name":"InternalError","message":"failed to serialize response"}}"#;

pub fn render_frame_page(message: &FrameMessage, origin: &str) -> String {
    let json = serde_json::to_string(message).unwrap_or_else(|e| {
        log::error!("프레임 메시지 직렬화 실패: {}", e);
        FALLBACK_MESSAGE.to_string()
    });

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Authorization</title>
</head>
<body>
<script>
(function () {{
  var origin = decodeURIComponent('{origin}');
  var message = JSON.parse(decodeURIComponent('{payload}'));
  if (window.opener) {{
    window.opener.postMessage(message, origin);
  }}
  window.close();
}})();
</script>
</body>
</html>
"#,
        origin = urlencoding::encode(origin),
        payload = urlencoding::encode(&json),
    )
}
