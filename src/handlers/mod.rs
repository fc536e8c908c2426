//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 `web::Data<GoogleAuthProvider>`로 서비스를 주입받고,
//! 서비스가 돌려준 `AppError`를 그대로 응답으로 변환합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser popup (frontend)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 쿠키, 리다이렉트, HTML 프레임
//! ├─────────────────────────────────────────────┤
//!   Services - 핸드셰이크, 정규화, 아이덴티티 결정
//! ├─────────────────────────────────────────────┤
//!   Repositories - 카탈로그 디렉터리
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: Google 로그인 엔드포인트 (`/start`, `/handler/frame`, `/refresh`, `/logout`)
//! - **`frame`**: 팝업 프레임 HTML 렌더링

pub mod auth;
pub mod frame;
